// Inicialización de logs con tracing-subscriber.
// RUST_LOG controla el nivel (por defecto info).
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;

pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => fmt().json().with_env_filter(filter).with_target(true).init(),
        LogFormat::Text => fmt().with_env_filter(filter).with_target(true).with_line_number(true).init(),
    }
}

/// Para tests: nivel debug y salida capturada por el harness.
pub fn init_test() {
    let _ = fmt().with_env_filter(EnvFilter::new("debug")).with_test_writer().try_init();
}
