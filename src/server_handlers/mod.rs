pub mod disciplines;
pub mod docs;
pub mod enrollments;
pub mod progress;
pub mod semesters;

pub use disciplines::*;
pub use docs::*;
pub use enrollments::*;
pub use progress::*;
pub use semesters::*;

use std::sync::MutexGuard;

use actix_web::HttpResponse;
use serde_json::json;
use tracing::error;

use crate::error::{EnrollError, StoreError};
use crate::server::AppState;
use crate::store::JsonStore;

/// Toma el lock del almacenamiento; si está envenenado responde 500.
pub(crate) fn lock_store(state: &AppState) -> Result<MutexGuard<'_, JsonStore>, HttpResponse> {
    state.store.lock().map_err(|_| {
        error!("store mutex poisoned");
        HttpResponse::InternalServerError().json(json!({"error": "store unavailable"}))
    })
}

pub(crate) fn store_error(e: StoreError) -> HttpResponse {
    error!(error = %e, "store failure");
    HttpResponse::InternalServerError().json(json!({"error": format!("failed to save data: {}", e)}))
}

pub(crate) fn enroll_error(e: EnrollError) -> HttpResponse {
    match e {
        EnrollError::NotFound { .. } => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
        EnrollError::Calc(c) => HttpResponse::BadRequest().json(json!({"error": c.to_string()})),
        EnrollError::Store(s) => store_error(s),
    }
}

pub(crate) fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": format!("{} not found", what)}))
}
