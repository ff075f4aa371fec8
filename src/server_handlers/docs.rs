use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::EnrollmentRequest;

/// GET /
pub async fn root_handler() -> impl Responder {
    let example = EnrollmentRequest {
        semester_code: "2024.1".to_string(),
        discipline_code: "14117".to_string(),
    };

    let help = json!({
        "message": "Planejador Acadêmico UFRPE",
        "version": env!("CARGO_PKG_VERSION"),
        "enroll_example": example,
        "routes": [
            "GET|POST /api/disciplines",
            "GET|PUT|DELETE /api/disciplines/{code}",
            "POST /api/disciplines/import/csv",
            "GET|POST /api/disciplines/{code}/grades",
            "GET|POST /api/semesters",
            "GET|PUT /api/semesters/{code}",
            "GET /api/semesters/{code}/enrolled",
            "GET /api/semesters/{code}/board",
            "POST /api/enroll",
            "POST /api/unenroll",
            "GET /api/progress",
            "GET /api/schedule/{semester}",
            "GET /api/final-exam?average=x"
        ]
    });

    HttpResponse::Ok().json(help)
}

/// GET /health
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "healthy"}))
}
