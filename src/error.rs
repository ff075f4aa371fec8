// Tipos de error del crate (thiserror).

use thiserror::Error;

/// Errores de validación de entrada de las calculadoras.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("value {value} out of range 0-10")]
    OutOfRange { value: f64 },

    #[error("invalid time format '{0}', use HH:MM")]
    MalformedTime(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errores del almacenamiento persistente.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Entidad que no se encontró al resolver una matrícula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Semester,
    Discipline,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Semester => write!(f, "semester"),
            Entity::Discipline => write!(f, "discipline"),
        }
    }
}

/// Errores del flujo de matrícula / notas. Los resultados de negocio
/// (conflicto, prerequisitos, ya matriculado) no son errores.
#[derive(Error, Debug)]
pub enum EnrollError {
    #[error("{entity} '{code}' not found")]
    NotFound { entity: Entity, code: String },

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errores fatales de importación (los errores por fila se acumulan aparte).
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("empty or invalid file")]
    Empty,

    #[error("missing headers: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    #[error("file contains no data rows")]
    NoData,

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),
}
