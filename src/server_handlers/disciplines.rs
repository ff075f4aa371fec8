use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use super::{enroll_error, lock_store, not_found, store_error};
use crate::algorithm::record_grades;
use crate::algorithm::validation::{validate_discipline, validate_new_discipline};
use crate::api_json::{GradesRequest, ImportResponse};
use crate::importer::import_csv;
use crate::models::{DisciplineCreate, DisciplineUpdate};
use crate::server::AppState;
use crate::store::AcademicStore;

/// GET /api/disciplines
pub async fn list_disciplines_handler(state: web::Data<AppState>) -> impl Responder {
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    HttpResponse::Ok().json(store.list_disciplines())
}

/// GET /api/disciplines/{code}
pub async fn get_discipline_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.get_discipline(&code) {
        Some(d) => HttpResponse::Ok().json(d),
        None => not_found("discipline"),
    }
}

/// POST /api/disciplines
pub async fn create_discipline_handler(state: web::Data<AppState>, body: web::Json<DisciplineCreate>) -> impl Responder {
    let discipline = body.into_inner();
    if let Err(errors) = validate_new_discipline(&discipline) {
        return HttpResponse::BadRequest().json(json!({"error": errors.join("; ")}));
    }
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.create_discipline(discipline) {
        Ok(Some(d)) => {
            info!(code = %d.code, "discipline created");
            HttpResponse::Ok().json(d)
        }
        Ok(None) => HttpResponse::BadRequest().json(json!({"error": "discipline already exists"})),
        Err(e) => store_error(e),
    }
}

/// PUT /api/disciplines/{code}
/// Mezcla parcial; el resultado se valida antes de guardar.
pub async fn update_discipline_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<DisciplineUpdate>,
) -> impl Responder {
    let code = path.into_inner();
    let update = body.into_inner();
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };

    let Some(mut merged) = store.get_discipline(&code) else { return not_found("discipline") };
    update.clone().apply_to(&mut merged);
    if let Err(errors) = validate_discipline(&merged) {
        return HttpResponse::BadRequest().json(json!({"error": errors.join("; ")}));
    }

    match store.update_discipline(&code, update) {
        Ok(Some(d)) => HttpResponse::Ok().json(d),
        Ok(None) => not_found("discipline"),
        Err(e) => store_error(e),
    }
}

/// DELETE /api/disciplines/{code}
pub async fn delete_discipline_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.delete_discipline(&code) {
        Ok(true) => {
            info!(code = %code, "discipline deleted");
            HttpResponse::Ok().json(json!({"message": "discipline deleted"}))
        }
        Ok(false) => not_found("discipline"),
        Err(e) => store_error(e),
    }
}

/// POST /api/disciplines/import/csv
/// Cuerpo: el CSV tal cual (separador ';').
pub async fn import_csv_handler(state: web::Data<AppState>, body: String) -> impl Responder {
    let report = match import_csv(&body) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::Ok().json(ImportResponse {
                success: false,
                imported_count: 0,
                message: "invalid CSV format".to_string(),
                errors: vec![e.to_string()],
            })
        }
    };

    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.bulk_create_disciplines(report.disciplines) {
        Ok(count) => HttpResponse::Ok().json(ImportResponse {
            success: true,
            imported_count: count,
            message: format!("{} disciplines imported", count),
            errors: report.errors,
        }),
        Err(e) => store_error(e),
    }
}

/// POST /api/disciplines/{code}/grades
pub async fn set_grades_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<GradesRequest>,
) -> impl Responder {
    let code = path.into_inner();
    let Some((n1, n2, n3)) = body.all() else {
        return HttpResponse::BadRequest().json(json!({"error": "all three grades are required"}));
    };
    let mut store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match record_grades(&mut *store, &code, n1, n2, n3) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => enroll_error(e),
    }
}

/// GET /api/disciplines/{code}/grades
pub async fn get_grades_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let store = match lock_store(&state) { Ok(s) => s, Err(resp) => return resp };
    match store.get_grades(&code) {
        Some(g) => HttpResponse::Ok().json(g),
        None => not_found("discipline"),
    }
}
