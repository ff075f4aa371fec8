use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::{lock_store, not_found, store_error};
use crate::algorithm::{curriculum_board, weekly_schedule};
use crate::models::{SemesterRecord, SemesterUpdate};
use crate::server::AppState;
use crate::store::AcademicStore;

/// GET /api/semesters
pub async fn list_semesters_handler(state: web::Data<AppState>) -> impl Responder {
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    HttpResponse::Ok().json(store.list_semesters())
}

/// GET /api/semesters/{code}
pub async fn get_semester_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.get_semester(&code) {
        Some(s) => HttpResponse::Ok().json(s),
        None => not_found("semester"),
    }
}

/// POST /api/semesters
pub async fn create_semester_handler(state: web::Data<AppState>, body: web::Json<SemesterRecord>) -> impl Responder {
    let record = body.into_inner();
    if record.code.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "semester code is required"}));
    }
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.create_semester(record) {
        Ok(Some(s)) => HttpResponse::Ok().json(s),
        Ok(None) => HttpResponse::BadRequest().json(json!({"error": "semester already exists"})),
        Err(e) => store_error(e),
    }
}

/// PUT /api/semesters/{code}
pub async fn update_semester_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SemesterUpdate>,
) -> impl Responder {
    let code = path.into_inner();
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.update_semester(&code, body.into_inner()) {
        Ok(Some(s)) => HttpResponse::Ok().json(s),
        Ok(None) => not_found("semester"),
        Err(e) => store_error(e),
    }
}

/// GET /api/semesters/{code}/enrolled
pub async fn enrolled_disciplines_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    if store.get_semester(&code).is_none() {
        return not_found("semester");
    }
    HttpResponse::Ok().json(store.enrolled_disciplines(&code))
}

/// GET /api/semesters/{code}/board
/// Estado (completed/studying/available/blocked) de cada disciplina.
pub async fn board_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    if store.get_semester(&code).is_none() {
        return not_found("semester");
    }
    HttpResponse::Ok().json(json!({"semester": code, "disciplines": curriculum_board(&*store, &code)}))
}

/// GET /api/schedule/{semester}
pub async fn schedule_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    if store.get_semester(&code).is_none() {
        return not_found("semester");
    }
    HttpResponse::Ok().json(weekly_schedule(&*store, &code))
}
