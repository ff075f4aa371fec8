// Estructuras de entrada/salida JSON de la API.
use serde::{Deserialize, Serialize};

use crate::algorithm::{ConflictDetail, EnrollOutcome, UnenrollOutcome};

/// Cuerpo de POST /api/enroll y /api/unenroll.
///
/// ```json
/// { "semester_code": "2024.1", "discipline_code": "14117" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub semester_code: String,
    pub discipline_code: String,
}

/// Cuerpo de POST /api/disciplines/{code}/grades. Las tres notas son
/// obligatorias; se aceptan como opcionales para responder 400 con mensaje.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GradesRequest {
    pub n1: Option<f64>,
    pub n2: Option<f64>,
    pub n3: Option<f64>,
}

impl GradesRequest {
    pub fn all(&self) -> Option<(f64, f64, f64)> {
        Some((self.n1?, self.n2?, self.n3?))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinalExamQuery {
    pub average: f64,
}

#[derive(Debug, Serialize)]
pub struct ScheduleConflictResponse {
    pub has_conflict: bool,
    pub conflicting_discipline: String,
    pub detail: ConflictDetail,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PrerequisiteCheckResponse {
    pub prerequisites_met: bool,
    pub missing_prerequisites: Vec<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_conflict: Option<ScheduleConflictResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_check: Option<PrerequisiteCheckResponse>,
}

impl From<EnrollOutcome> for EnrollmentResponse {
    fn from(outcome: EnrollOutcome) -> Self {
        let mut resp = EnrollmentResponse {
            success: outcome.is_success(),
            message: String::new(),
            schedule_conflict: None,
            prerequisite_check: None,
        };
        match outcome {
            EnrollOutcome::EnrolledSuccessfully => resp.message = "discipline enrolled".to_string(),
            EnrollOutcome::AlreadyEnrolled => resp.message = "discipline already enrolled".to_string(),
            EnrollOutcome::PrerequisitesNotMet { missing } => {
                resp.message = "prerequisites not met".to_string();
                resp.prerequisite_check = Some(PrerequisiteCheckResponse {
                    prerequisites_met: false,
                    message: format!("missing disciplines: {}", missing.join(", ")),
                    missing_prerequisites: missing,
                });
            }
            EnrollOutcome::ScheduleConflict { discipline, detail } => {
                resp.message = "schedule conflict detected".to_string();
                resp.schedule_conflict = Some(ScheduleConflictResponse {
                    has_conflict: true,
                    message: format!("conflict with {}", discipline),
                    conflicting_discipline: discipline,
                    detail,
                });
            }
        }
        resp
    }
}

impl From<UnenrollOutcome> for EnrollmentResponse {
    fn from(outcome: UnenrollOutcome) -> Self {
        let (success, message) = match outcome {
            UnenrollOutcome::Removed => (true, "enrollment removed"),
            UnenrollOutcome::NotEnrolled => (false, "discipline was not enrolled"),
        };
        EnrollmentResponse {
            success,
            message: message.to_string(),
            schedule_conflict: None,
            prerequisite_check: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub imported_count: usize,
    pub message: String,
    pub errors: Vec<String>,
}
