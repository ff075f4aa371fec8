// Registro de notas, reporte de progreso y tablero de estados de la malla.
use serde::Serialize;
use tracing::info;

use crate::algorithm::grades::{
    course_progress_percent, final_average, general_average, remedial_grade_needed, weighted_average,
    WeightedRecord, PASSING_GRADE,
};
use crate::algorithm::prerequisites::{discipline_status, CompletedDisciplines};
use crate::error::{CalcError, EnrollError, Entity};
use crate::models::{DisciplineStatus, Semester, SemesterStatus};
use crate::store::AcademicStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    /// Debe rendir prueba final.
    Remedial,
    Failed,
}

/// Resultado de calcular la media de una disciplina.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalExamReport {
    pub average: f64,
    pub needs_final_exam: bool,
    pub final_exam_grade_needed: Option<f64>,
    pub verdict: Verdict,
}

/// Simulador de prueba final a partir de una media ya calculada.
pub fn final_exam_report(average: f64) -> Result<FinalExamReport, CalcError> {
    let needed = remedial_grade_needed(average)?;
    let verdict = if average >= PASSING_GRADE {
        Verdict::Approved
    } else if needed.is_some() {
        Verdict::Remedial
    } else {
        Verdict::Failed
    };
    Ok(FinalExamReport {
        average,
        needs_final_exam: needed.is_some(),
        final_exam_grade_needed: needed,
        verdict,
    })
}

/// Valida las tres notas, guarda notas y media derivada, y devuelve el reporte.
/// Nada se escribe si alguna nota está fuera de rango.
pub fn record_grades<S: AcademicStore + ?Sized>(
    store: &mut S,
    code: &str,
    n1: f64,
    n2: f64,
    n3: f64,
) -> Result<FinalExamReport, EnrollError> {
    if store.get_discipline(code).is_none() {
        return Err(EnrollError::NotFound { entity: Entity::Discipline, code: code.to_string() });
    }
    let average = final_average(n1, n2, n3)?;
    store.set_grades(code, n1, n2, n3, average)?;
    info!(discipline = code, average, "grades recorded");
    Ok(final_exam_report(average)?)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub total_hours: u32,
    pub completed_hours: u64,
    pub percentage: f64,
    pub enrolled_count: usize,
    pub general_average: Option<f64>,
    pub weighted_average: Option<f64>,
}

/// Progreso global del curso.
///
/// `enrolled_count` suma las matrículas de los semestres activos;
/// `general_average` considera sólo disciplinas aprobadas y
/// `weighted_average` todas las que tienen media.
pub fn progress_report<S: AcademicStore + ?Sized>(
    store: &S,
    semesters: &[Semester],
    total_hours: u32,
) -> Result<ProgressReport, CalcError> {
    let disciplines = store.list_disciplines();
    let completed = CompletedDisciplines::from_disciplines(&disciplines);

    // suma en u64: la carga horaria de cada disciplina sólo se valida > 0
    let completed_hours: u64 = disciplines
        .iter()
        .filter(|d| completed.is_passed(&d.code))
        .map(|d| u64::from(d.hours))
        .sum();
    let completed_i64 = i64::try_from(completed_hours).unwrap_or(i64::MAX);
    let percentage = course_progress_percent(completed_i64, i64::from(total_hours))?;

    let enrolled_count = semesters
        .iter()
        .filter(|s| s.status == SemesterStatus::Active)
        .map(|s| store.enrolled_codes(&s.code).len())
        .sum();

    let records: Vec<WeightedRecord> = disciplines.iter().map(WeightedRecord::from).collect();

    Ok(ProgressReport {
        total_hours,
        completed_hours,
        percentage,
        enrolled_count,
        general_average: general_average(&completed.averages())?,
        weighted_average: weighted_average(&records),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardEntry {
    pub code: String,
    pub name: String,
    pub period: u8,
    pub status: DisciplineStatus,
}

/// Estado de cada disciplina respecto del semestre indicado.
pub fn curriculum_board<S: AcademicStore + ?Sized>(store: &S, semester_code: &str) -> Vec<BoardEntry> {
    let disciplines = store.list_disciplines();
    let completed = CompletedDisciplines::from_disciplines(&disciplines);
    let enrolled = store.enrolled_codes(semester_code);
    let mut board: Vec<BoardEntry> = disciplines
        .iter()
        .map(|d| BoardEntry {
            code: d.code.clone(),
            name: d.name.clone(),
            period: d.period,
            status: discipline_status(&d.code, &d.prerequisites, &completed, &enrolled),
        })
        .collect();
    board.sort_by(|a, b| a.period.cmp(&b.period).then_with(|| a.code.cmp(&b.code)));
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_exam_report_veredictos() {
        assert_eq!(final_exam_report(8.0).unwrap().verdict, Verdict::Approved);
        let r = final_exam_report(5.5).unwrap();
        assert_eq!(r.verdict, Verdict::Remedial);
        assert_eq!(r.final_exam_grade_needed, Some(4.5));
        assert!(r.needs_final_exam);
        assert_eq!(final_exam_report(2.0).unwrap().verdict, Verdict::Failed);
        assert!(final_exam_report(-1.0).is_err());
    }
}
