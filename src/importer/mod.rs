//! Importación masiva de disciplinas desde CSV (';') o desde la primera hoja
//! de un workbook con el mismo encabezado.
//!
//! Una disciplina puede ocupar varias filas (una por bloque horario); las
//! filas se agrupan por código. Los errores por fila se acumulan y no
//! detienen la importación.

pub mod io;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::algorithm::validation::{time_block_errors, valid_period};
use crate::error::ImportError;
use crate::models::{DisciplineCreate, TimeBlock, DEFAULT_HOURS};
use self::io::{normalize_header, read_csv_rows, read_sheet_rows};

pub const EXPECTED_HEADERS: [&str; 9] = [
    "Código", "Nome", "Professor", "Período", "Local", "Dia", "Início", "Fim", "Pré-requisitos",
];

/// Disciplinas leídas y errores por fila.
#[derive(Debug, Default, Serialize)]
pub struct ImportReport {
    pub disciplines: Vec<DisciplineCreate>,
    pub errors: Vec<String>,
}

/// Índices de cada columna esperada dentro de la fila de encabezado.
struct Columns([usize; 9]);

impl Columns {
    fn locate(header: &[String]) -> Result<Self, ImportError> {
        let normalized: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();
        let mut idx = [0usize; 9];
        let mut missing = Vec::new();
        for (i, expected) in EXPECTED_HEADERS.iter().enumerate() {
            match normalized.iter().position(|h| *h == normalize_header(expected)) {
                Some(pos) => idx[i] = pos,
                None => missing.push(expected.to_string()),
            }
        }
        if missing.is_empty() { Ok(Columns(idx)) } else { Err(ImportError::MissingHeaders(missing)) }
    }

    fn get<'a>(&self, row: &'a [String], col: usize) -> &'a str {
        row.get(self.0[col]).map(|s| s.trim()).unwrap_or("")
    }
}

/// Procesa filas ya leídas (la primera es el encabezado).
pub fn parse_rows(rows: &[Vec<String>]) -> Result<ImportReport, ImportError> {
    let (header, data) = rows.split_first().ok_or(ImportError::Empty)?;
    if header.iter().all(|h| h.trim().is_empty()) {
        return Err(ImportError::Empty);
    }
    let cols = Columns::locate(header)?;

    let data: Vec<(usize, &Vec<String>)> = data
        .iter()
        .enumerate()
        // el encabezado es la línea 1
        .map(|(i, r)| (i + 2, r))
        .filter(|(_, r)| r.iter().any(|c| !c.trim().is_empty()))
        .collect();
    if data.is_empty() {
        return Err(ImportError::NoData);
    }

    let mut report = ImportReport::default();
    let mut by_code: HashMap<String, usize> = HashMap::new();

    for (line, row) in data {
        let code = cols.get(row, 0);
        let name = cols.get(row, 1);
        let professor = cols.get(row, 2);
        let period_str = cols.get(row, 3);
        let location = cols.get(row, 4);
        let day_str = cols.get(row, 5);
        let start = cols.get(row, 6);
        let end = cols.get(row, 7);
        let prereqs_str = cols.get(row, 8);

        if code.is_empty() {
            report.errors.push(format!("line {}: empty code", line));
            continue;
        }
        if name.is_empty() {
            report.errors.push(format!("line {}: empty name", line));
            continue;
        }
        if professor.is_empty() {
            report.errors.push(format!("line {}: empty professor", line));
            continue;
        }
        let period = match period_str.parse::<u8>() {
            Ok(p) if valid_period(p) => p,
            Ok(p) => {
                report.errors.push(format!("line {}: period {} invalid (must be 1-9)", line, p));
                continue;
            }
            Err(_) => {
                report.errors.push(format!("line {}: period '{}' is not a number", line, period_str));
                continue;
            }
        };
        let day = match day_str.parse::<u8>() {
            Ok(d) => d,
            Err(_) => {
                report.errors.push(format!("line {}: day '{}' is not a number", line, day_str));
                continue;
            }
        };
        let block = TimeBlock::new(day, start, end, location);
        let block_errors = time_block_errors(&block, &format!("line {}", line));
        if !block_errors.is_empty() {
            report.errors.extend(block_errors);
            continue;
        }

        match by_code.get(code) {
            Some(&i) => report.disciplines[i].schedules.push(block),
            None => {
                let prerequisites = prereqs_str
                    .split(',')
                    .map(|p| p.trim())
                    .filter(|p| !p.is_empty())
                    .map(|p| p.to_string())
                    .collect();
                by_code.insert(code.to_string(), report.disciplines.len());
                report.disciplines.push(DisciplineCreate {
                    code: code.to_string(),
                    name: name.to_string(),
                    professor: professor.to_string(),
                    period,
                    hours: DEFAULT_HOURS,
                    prerequisites,
                    schedules: vec![block],
                });
            }
        }
    }

    if !report.errors.is_empty() {
        warn!(errors = report.errors.len(), "rows rejected during import");
    }
    info!(disciplines = report.disciplines.len(), "import parsed");
    Ok(report)
}

/// Importa desde el contenido de un CSV separado por ';'.
pub fn import_csv(content: &str) -> Result<ImportReport, ImportError> {
    parse_rows(&read_csv_rows(content)?)
}

/// Importa desde un fichero: `.csv` como texto, cualquier otra extensión
/// como workbook (xlsx/xls/ods).
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<ImportReport, ImportError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        let content = std::fs::read_to_string(path)?;
        import_csv(&content)
    } else {
        parse_rows(&read_sheet_rows(path, "")?)
    }
}
