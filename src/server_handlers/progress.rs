use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::lock_store;
use crate::algorithm::{final_exam_report, progress_report};
use crate::api_json::FinalExamQuery;
use crate::server::AppState;

/// GET /api/progress
pub async fn progress_handler(state: web::Data<AppState>) -> impl Responder {
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    let semesters = store.list_semesters();
    match progress_report(&*store, &semesters, state.total_hours) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

/// GET /api/final-exam?average=5.5
/// Simulador: nota necesaria en la prueba final para una media dada.
pub async fn final_exam_handler(query: web::Query<FinalExamQuery>) -> impl Responder {
    match final_exam_report(query.average) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}
