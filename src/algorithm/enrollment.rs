// Flujo de matrícula: compone prerequisitos, conflictos de horario y el
// almacenamiento. Cada intento termina en un único resultado.
use serde::Serialize;
use tracing::{debug, info};

use crate::algorithm::conflict::{first_conflict, ConflictDetail};
use crate::algorithm::prerequisites::{missing_prerequisites, CompletedDisciplines};
use crate::error::{EnrollError, Entity};
use crate::store::AcademicStore;

/// Resultados de negocio de `enroll`. Ninguno es un error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnrollOutcome {
    EnrolledSuccessfully,
    AlreadyEnrolled,
    /// Nombres de los prerequisitos faltantes.
    PrerequisitesNotMet { missing: Vec<String> },
    /// Nombre de la disciplina matriculada con la que choca.
    ScheduleConflict { discipline: String, detail: ConflictDetail },
}

impl EnrollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EnrollOutcome::EnrolledSuccessfully)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UnenrollOutcome {
    Removed,
    NotEnrolled,
}

/// Matricula `discipline_code` en `semester_code`.
///
/// Sólo falla si el semestre o la disciplina no existen, si el
/// almacenamiento falla al guardar o si un horario guardado está corrupto.
pub fn enroll<S: AcademicStore + ?Sized>(
    store: &mut S,
    semester_code: &str,
    discipline_code: &str,
) -> Result<EnrollOutcome, EnrollError> {
    if store.get_semester(semester_code).is_none() {
        return Err(EnrollError::NotFound { entity: Entity::Semester, code: semester_code.to_string() });
    }
    let discipline = store.get_discipline(discipline_code).ok_or_else(|| EnrollError::NotFound {
        entity: Entity::Discipline,
        code: discipline_code.to_string(),
    })?;

    let completed = CompletedDisciplines::from_disciplines(&store.list_disciplines());
    let missing = missing_prerequisites(&discipline.prerequisites, &completed);
    if !missing.is_empty() {
        // códigos sin nombre resoluble se omiten del mensaje
        let names: Vec<String> = missing
            .iter()
            .filter_map(|code| store.get_discipline(code).map(|d| d.name))
            .collect();
        info!(semester = semester_code, discipline = discipline_code, ?missing, "prerequisites not met");
        return Ok(EnrollOutcome::PrerequisitesNotMet { missing: names });
    }

    for enrolled in store.enrolled_disciplines(semester_code) {
        // una disciplina no choca consigo misma
        if enrolled.code == discipline.code {
            continue;
        }
        if let Some(detail) = first_conflict(&discipline.schedules, &enrolled.schedules)? {
            info!(
                semester = semester_code,
                discipline = discipline_code,
                conflicting = %enrolled.code,
                day = detail.day,
                "schedule conflict"
            );
            return Ok(EnrollOutcome::ScheduleConflict { discipline: enrolled.name, detail });
        }
    }

    if store.set_enrollment(semester_code, discipline_code, true)? {
        info!(semester = semester_code, discipline = discipline_code, "enrolled");
        Ok(EnrollOutcome::EnrolledSuccessfully)
    } else {
        debug!(semester = semester_code, discipline = discipline_code, "already enrolled");
        Ok(EnrollOutcome::AlreadyEnrolled)
    }
}

/// Quita la matrícula si existe.
pub fn unenroll<S: AcademicStore + ?Sized>(
    store: &mut S,
    semester_code: &str,
    discipline_code: &str,
) -> Result<UnenrollOutcome, EnrollError> {
    if store.set_enrollment(semester_code, discipline_code, false)? {
        info!(semester = semester_code, discipline = discipline_code, "unenrolled");
        Ok(UnenrollOutcome::Removed)
    } else {
        Ok(UnenrollOutcome::NotEnrolled)
    }
}
