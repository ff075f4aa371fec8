// Cálculos de notas: media final, prueba final (remedial), CR ponderado,
// progreso del curso y media general.
use crate::error::CalcError;
use crate::models::{Discipline, DEFAULT_HOURS};

/// Nota mínima para aprobar una disciplina.
pub const PASSING_GRADE: f64 = 7.0;
/// Bajo esta media no hay prueba final: reprobado directo.
pub const REMEDIAL_FLOOR: f64 = 3.0;

/// Redondeo a 2 decimales, mitad alejándose de cero (`f64::round`).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn check_grade(value: f64) -> Result<f64, CalcError> {
    if (0.0..=10.0).contains(&value) {
        Ok(value)
    } else {
        Err(CalcError::OutOfRange { value })
    }
}

/// Media de las dos notas más altas entre n1, n2 y n3.
pub fn final_average(n1: f64, n2: f64, n3: f64) -> Result<f64, CalcError> {
    let mut notes = [check_grade(n1)?, check_grade(n2)?, check_grade(n3)?];
    // orden descendente; los NaN ya fueron rechazados por check_grade
    notes.sort_by(|a, b| b.total_cmp(a));
    Ok(round2((notes[0] + notes[1]) / 2.0))
}

/// Nota necesaria en la prueba final. `None` si ya aprobó (>= 7.0) o si
/// reprobó sin derecho a final (< 3.0).
pub fn remedial_grade_needed(average: f64) -> Result<Option<f64>, CalcError> {
    let average = check_grade(average)?;
    if average >= PASSING_GRADE || average < REMEDIAL_FLOOR {
        return Ok(None);
    }
    Ok(Some(round2(10.0 - average)))
}

/// Registro mínimo para el CR ponderado por carga horaria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedRecord {
    pub final_average: Option<f64>,
    pub hours: Option<u32>,
}

impl From<&Discipline> for WeightedRecord {
    fn from(d: &Discipline) -> Self {
        WeightedRecord { final_average: d.final_average, hours: Some(d.hours) }
    }
}

/// CR ponderado: Σ(media * CH) / Σ(CH), sólo sobre registros con media.
pub fn weighted_average<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a WeightedRecord>,
{
    let mut points = 0.0;
    let mut total_hours = 0u64;
    for r in records {
        if let Some(avg) = r.final_average {
            let ch = r.hours.unwrap_or(DEFAULT_HOURS);
            points += avg * f64::from(ch);
            total_hours += u64::from(ch);
        }
    }
    if total_hours == 0 {
        return None;
    }
    Some(round2(points / total_hours as f64))
}

/// Porcentaje de avance del curso; `completed` se acota a [0, total].
pub fn course_progress_percent(completed_hours: i64, total_hours: i64) -> Result<f64, CalcError> {
    if total_hours <= 0 {
        return Err(CalcError::InvalidConfiguration(format!(
            "total hours must be greater than 0 (got {})",
            total_hours
        )));
    }
    let completed = completed_hours.clamp(0, total_hours);
    Ok(round2(completed as f64 / total_hours as f64 * 100.0))
}

/// Media aritmética simple de las medias entregadas.
pub fn general_average(averages: &[f64]) -> Result<Option<f64>, CalcError> {
    if averages.is_empty() {
        return Ok(None);
    }
    for avg in averages {
        check_grade(*avg)?;
    }
    let sum: f64 = averages.iter().sum();
    Ok(Some(round2(sum / averages.len() as f64)))
}
