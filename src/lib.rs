// Biblioteca raíz del crate `planejador`.
// Motor de reglas académicas (notas, prerequisitos, conflictos de horario y
// matrícula) más el almacenamiento JSON, la importación y la API HTTP.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod importer;
pub mod logging;
pub mod models;
pub mod server;
pub mod server_handlers;
pub mod store;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
