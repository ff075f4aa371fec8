// Cronograma semanal de un semestre.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithm::conflict::time_to_minutes;
use crate::store::AcademicStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub discipline_code: String,
    pub discipline_name: String,
    pub start: String,
    pub end: String,
    pub location: String,
}

/// Clases matriculadas agrupadas por día (1-5) y ordenadas por inicio.
/// Los cinco días aparecen siempre, aunque estén vacíos.
pub fn weekly_schedule<S: AcademicStore + ?Sized>(store: &S, semester_code: &str) -> BTreeMap<u8, Vec<ScheduleEntry>> {
    let mut week: BTreeMap<u8, Vec<ScheduleEntry>> = (1..=5).map(|d| (d, Vec::new())).collect();

    for d in store.enrolled_disciplines(semester_code) {
        for block in &d.schedules {
            week.entry(block.day).or_default().push(ScheduleEntry {
                discipline_code: d.code.clone(),
                discipline_name: d.name.clone(),
                start: block.start.clone(),
                end: block.end.clone(),
                location: block.location.clone(),
            });
        }
    }

    // horas malformadas al final, por texto
    for entries in week.values_mut() {
        entries.sort_by(|a, b| {
            let ka = time_to_minutes(&a.start).unwrap_or(u32::MAX);
            let kb = time_to_minutes(&b.start).unwrap_or(u32::MAX);
            ka.cmp(&kb).then_with(|| a.start.cmp(&b.start))
        });
    }
    week
}
