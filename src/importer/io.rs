use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::ImportError;

/// Convierte una celda de calamine a String. Las horas que Excel guarda
/// como fracción de día se devuelven como "HH:MM".
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(dt) => {
            let f = dt.as_f64();
            if (0.0..1.0).contains(&f) {
                fraction_to_hhmm(f)
            } else {
                dt.to_string()
            }
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

fn fraction_to_hhmm(f: f64) -> String {
    let total = (f * 1440.0).round() as u32;
    format!("{:02}:{:02}", (total / 60) % 24, total % 60)
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.trim_start_matches('\u{feff}')
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Lee un CSV separado por ';' como filas de texto (incluye el encabezado).
pub fn read_csv_rows(content: &str) -> Result<Vec<Vec<String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.trim().to_string()).collect());
    }
    Ok(rows)
}

/// Lee una hoja del workbook; si `sheet_name` está vacío o no existe se usa la primera.
pub fn read_sheet_rows<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Vec<Vec<String>>, ImportError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Spreadsheet(e.to_string()))?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = names
        .iter()
        .find(|s| !sheet_name.is_empty() && *s == sheet_name)
        .or_else(|| names.first())
        .cloned()
        .ok_or(ImportError::Empty)?;

    let range = workbook
        .worksheet_range(&sheet_to_use)
        .map_err(|e| ImportError::Spreadsheet(e.to_string()))?;
    Ok(range.rows().map(|r| r.iter().map(cell_to_string).collect()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}Código"), "código");
        assert_eq!(normalize_header(" Pré-requisitos "), "pré-requisitos");
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Float(6214.0)), "6214");
        assert_eq!(cell_to_string(&Data::String(" ALGORITMOS ".to_string())), "ALGORITMOS");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(fraction_to_hhmm(14.0 / 24.0), "14:00");
    }

    #[test]
    fn test_read_csv_rows() {
        let rows = read_csv_rows("a;b\n1; 2 \n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }
}
