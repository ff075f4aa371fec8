// Configuración desde variables de entorno (con .env si existe).
use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Total de horas del curso CCP02.
pub const DEFAULT_TOTAL_HOURS: u32 = 3210;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PLANEJADOR_BIND
    pub bind: String,
    /// PLANEJADOR_DATA_DIR
    pub data_dir: PathBuf,
    /// PLANEJADOR_TOTAL_HOURS
    pub total_hours: u32,
    /// PLANEJADOR_LOG_FORMAT (text | json)
    pub log_format: LogFormat,
    /// PLANEJADOR_IMPORT_FILE: CSV o workbook a importar al arrancar
    pub import_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: "127.0.0.1:8000".to_string(),
            data_dir: PathBuf::from("data"),
            total_hours: DEFAULT_TOTAL_HOURS,
            log_format: LogFormat::Text,
            import_file: None,
        }
    }
}

impl AppConfig {
    /// Carga `.env` (si hay) y lee las variables.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Variante parametrizable para pruebas: `lookup` hace de entorno.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();
        let non_empty = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = non_empty("PLANEJADOR_BIND") {
            cfg.bind = v;
        }
        if let Some(v) = non_empty("PLANEJADOR_DATA_DIR") {
            cfg.data_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty("PLANEJADOR_TOTAL_HOURS") {
            match v.parse::<u32>() {
                Ok(h) if h > 0 => cfg.total_hours = h,
                _ => warn!(value = %v, "invalid PLANEJADOR_TOTAL_HOURS, using {}", DEFAULT_TOTAL_HOURS),
            }
        }
        if let Some(v) = non_empty("PLANEJADOR_LOG_FORMAT") {
            cfg.log_format = if v.eq_ignore_ascii_case("json") { LogFormat::Json } else { LogFormat::Text };
        }
        cfg.import_file = non_empty("PLANEJADOR_IMPORT_FILE").map(PathBuf::from);
        cfg
    }
}
