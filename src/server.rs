use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::AppConfig;
use crate::server_handlers::*;
use crate::store::JsonStore;

/// Estado compartido entre workers: un único almacenamiento tras un Mutex.
pub struct AppState {
    pub store: Mutex<JsonStore>,
    pub total_hours: u32,
}

impl AppState {
    pub fn new(store: JsonStore, total_hours: u32) -> Self {
        AppState { store: Mutex::new(store), total_hours }
    }
}

/// Registra todas las rutas; usado por `run_server` y por los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_handler))
        .route("/health", web::get().to(health_handler))
        .service(
            web::scope("/api")
                .route("/disciplines", web::get().to(list_disciplines_handler))
                .route("/disciplines", web::post().to(create_discipline_handler))
                .route("/disciplines/import/csv", web::post().to(import_csv_handler))
                .route("/disciplines/{code}", web::get().to(get_discipline_handler))
                .route("/disciplines/{code}", web::put().to(update_discipline_handler))
                .route("/disciplines/{code}", web::delete().to(delete_discipline_handler))
                .route("/disciplines/{code}/grades", web::get().to(get_grades_handler))
                .route("/disciplines/{code}/grades", web::post().to(set_grades_handler))
                .route("/semesters", web::get().to(list_semesters_handler))
                .route("/semesters", web::post().to(create_semester_handler))
                .route("/semesters/{code}", web::get().to(get_semester_handler))
                .route("/semesters/{code}", web::put().to(update_semester_handler))
                .route("/semesters/{code}/enrolled", web::get().to(enrolled_disciplines_handler))
                .route("/semesters/{code}/board", web::get().to(board_handler))
                .route("/enroll", web::post().to(enroll_handler))
                .route("/unenroll", web::post().to(unenroll_handler))
                .route("/progress", web::get().to(progress_handler))
                .route("/schedule/{semester}", web::get().to(schedule_handler))
                .route("/final-exam", web::get().to(final_exam_handler)),
        );
}

pub async fn run_server(config: AppConfig, store: JsonStore) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(store, config.total_hours));
    info!(bind = %config.bind, "starting server");
    HttpServer::new(move || {
        App::new()
            // CORS abierto para el frontend
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
