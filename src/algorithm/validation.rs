// Validación de datos de disciplinas antes de guardarlas.
use crate::algorithm::conflict::time_to_minutes;
use crate::models::{Discipline, DisciplineCreate, TimeBlock};

pub fn valid_period(period: u8) -> bool {
    (1..=9).contains(&period)
}

pub fn valid_day(day: u8) -> bool {
    (1..=5).contains(&day)
}

/// Problemas de un bloque horario; `label` identifica el bloque en los mensajes.
pub fn time_block_errors(block: &TimeBlock, label: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if !valid_day(block.day) {
        errors.push(format!("{}: day {} invalid (must be 1-5)", label, block.day));
    }
    let start = time_to_minutes(&block.start);
    let end = time_to_minutes(&block.end);
    if let Err(e) = &start {
        errors.push(format!("{}: start {}", label, e));
    }
    if let Err(e) = &end {
        errors.push(format!("{}: end {}", label, e));
    }
    if let (Ok(s), Ok(e)) = (start, end) {
        if s >= e {
            errors.push(format!("{}: start {} must be before end {}", label, block.start, block.end));
        }
    }
    errors
}

fn field_errors(code: &str, name: &str, professor: &str, period: u8, hours: u32, schedules: &[TimeBlock]) -> Vec<String> {
    let mut errors = Vec::new();
    if code.trim().is_empty() {
        errors.push("invalid discipline code".to_string());
    }
    if name.trim().is_empty() {
        errors.push("invalid discipline name".to_string());
    }
    if professor.trim().is_empty() {
        errors.push("invalid professor name".to_string());
    }
    if !valid_period(period) {
        errors.push("period must be between 1 and 9".to_string());
    }
    if hours == 0 {
        errors.push("hours must be greater than 0".to_string());
    }
    for (i, block) in schedules.iter().enumerate() {
        errors.extend(time_block_errors(block, &format!("schedule {}", i + 1)));
    }
    errors
}

/// Todos los problemas juntos; `Ok` si no hay ninguno.
pub fn validate_new_discipline(d: &DisciplineCreate) -> Result<(), Vec<String>> {
    let errors = field_errors(&d.code, &d.name, &d.professor, d.period, d.hours, &d.schedules);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Igual que `validate_new_discipline`, sobre el resultado de una mezcla parcial.
pub fn validate_discipline(d: &Discipline) -> Result<(), Vec<String>> {
    let errors = field_errors(&d.code, &d.name, &d.professor, d.period, d.hours, &d.schedules);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
