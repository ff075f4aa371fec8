use actix_web::{web, HttpResponse, Responder};

use super::{enroll_error, lock_store};
use crate::algorithm::{enroll, unenroll};
use crate::api_json::{EnrollmentRequest, EnrollmentResponse};
use crate::server::AppState;

/// POST /api/enroll
/// Todo el flujo corre con el lock tomado: la verificación de "ya
/// matriculada" y la escritura ven el mismo estado.
pub async fn enroll_handler(state: web::Data<AppState>, body: web::Json<EnrollmentRequest>) -> impl Responder {
    let req = body.into_inner();
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match enroll(&mut *store, &req.semester_code, &req.discipline_code) {
        Ok(outcome) => HttpResponse::Ok().json(EnrollmentResponse::from(outcome)),
        Err(e) => enroll_error(e),
    }
}

/// POST /api/unenroll
pub async fn unenroll_handler(state: web::Data<AppState>, body: web::Json<EnrollmentRequest>) -> impl Responder {
    let req = body.into_inner();
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match unenroll(&mut *store, &req.semester_code, &req.discipline_code) {
        Ok(outcome) => HttpResponse::Ok().json(EnrollmentResponse::from(outcome)),
        Err(e) => enroll_error(e),
    }
}
