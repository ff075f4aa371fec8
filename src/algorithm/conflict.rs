// Funciones para detectar conflictos entre bloques horarios.
use serde::Serialize;

use crate::error::CalcError;
use crate::models::TimeBlock;

/// Convierte "HH:MM" a minutos desde medianoche.
pub fn time_to_minutes(hhmm: &str) -> Result<u32, CalcError> {
    let malformed = || CalcError::MalformedTime(hhmm.to_string());
    let parts: Vec<&str> = hhmm.trim().split(':').collect();
    if parts.len() != 2 {
        return Err(malformed());
    }
    let hh = parts[0].trim().parse::<u32>().map_err(|_| malformed())?;
    let mm = parts[1].trim().parse::<u32>().map_err(|_| malformed())?;
    if hh >= 24 || mm >= 60 {
        return Err(malformed());
    }
    Ok(hh * 60 + mm)
}

/// Solapamiento de intervalos semiabiertos [start, end): si uno termina
/// justo cuando el otro empieza no hay conflicto.
pub fn overlaps(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a < end_b && end_a > start_b
}

/// Detalle del primer par de bloques en conflicto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictDetail {
    pub day: u8,
    pub time1: String,
    pub time2: String,
}

fn range(b: &TimeBlock) -> Result<(u32, u32), CalcError> {
    Ok((time_to_minutes(&b.start)?, time_to_minutes(&b.end)?))
}

/// Recorre blocks_a x blocks_b en orden y devuelve el primer par del mismo
/// día cuyos rangos se solapan. No es un reporte exhaustivo.
pub fn first_conflict(blocks_a: &[TimeBlock], blocks_b: &[TimeBlock]) -> Result<Option<ConflictDetail>, CalcError> {
    for a in blocks_a {
        for b in blocks_b {
            if a.day != b.day {
                continue;
            }
            let (sa, ea) = range(a)?;
            let (sb, eb) = range(b)?;
            if overlaps(sa, ea, sb, eb) {
                return Ok(Some(ConflictDetail {
                    day: a.day,
                    time1: format!("{}-{}", a.start, a.end),
                    time2: format!("{}-{}", b.start, b.end),
                }));
            }
        }
    }
    Ok(None)
}
