// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Carga horaria que se asume cuando un registro guardado no la trae.
pub const DEFAULT_HOURS: u32 = 60;

fn default_hours() -> u32 {
    DEFAULT_HOURS
}

/// Bloque semanal de clase. `day`: 1=lunes ... 5=viernes. Horas en "HH:MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub day: u8,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub location: String,
}

impl TimeBlock {
    pub fn new(day: u8, start: &str, end: &str, location: &str) -> Self {
        TimeBlock {
            day,
            start: start.to_string(),
            end: end.to_string(),
            location: location.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    pub code: String,
    pub name: String,
    pub professor: String,
    /// Nivel dentro de la malla (1-9)
    pub period: u8,
    #[serde(default = "default_hours")]
    pub hours: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub schedules: Vec<TimeBlock>,
    #[serde(default)]
    pub n1: Option<f64>,
    #[serde(default)]
    pub n2: Option<f64>,
    #[serde(default)]
    pub n3: Option<f64>,
    /// Derivada de n1/n2/n3; sólo la escribe el flujo de notas.
    #[serde(default)]
    pub final_average: Option<f64>,
}

/// Payload de creación (sin notas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplineCreate {
    pub code: String,
    pub name: String,
    pub professor: String,
    pub period: u8,
    #[serde(default = "default_hours")]
    pub hours: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub schedules: Vec<TimeBlock>,
}

impl From<DisciplineCreate> for Discipline {
    fn from(d: DisciplineCreate) -> Self {
        Discipline {
            code: d.code,
            name: d.name,
            professor: d.professor,
            period: d.period,
            hours: d.hours,
            prerequisites: d.prerequisites,
            schedules: d.schedules,
            n1: None,
            n2: None,
            n3: None,
            final_average: None,
        }
    }
}

/// Actualización parcial: sólo los campos presentes se mezclan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisciplineUpdate {
    pub name: Option<String>,
    pub professor: Option<String>,
    pub period: Option<u8>,
    pub hours: Option<u32>,
    pub schedules: Option<Vec<TimeBlock>>,
    pub prerequisites: Option<Vec<String>>,
}

impl DisciplineUpdate {
    /// Mezcla los campos presentes sobre `d`.
    pub fn apply_to(self, d: &mut Discipline) {
        if let Some(v) = self.name { d.name = v; }
        if let Some(v) = self.professor { d.professor = v; }
        if let Some(v) = self.period { d.period = v; }
        if let Some(v) = self.hours { d.hours = v; }
        if let Some(v) = self.schedules { d.schedules = v; }
        if let Some(v) = self.prerequisites { d.prerequisites = v; }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemesterStatus {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Planejado")]
    Planned,
    #[serde(rename = "Encerrado")]
    Closed,
}

/// Registro de semestre tal como se persiste (las matrículas van aparte).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterRecord {
    pub code: String,
    pub status: SemesterStatus,
}

/// Semestre con su lista de disciplinas matriculadas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub code: String,
    pub status: SemesterStatus,
    #[serde(default)]
    pub disciplines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterUpdate {
    pub status: Option<SemesterStatus>,
}

/// Notas de una disciplina más la media derivada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grades {
    pub n1: Option<f64>,
    pub n2: Option<f64>,
    pub n3: Option<f64>,
    pub final_average: Option<f64>,
}

impl From<&Discipline> for Grades {
    fn from(d: &Discipline) -> Self {
        Grades { n1: d.n1, n2: d.n2, n3: d.n3, final_average: d.final_average }
    }
}

/// Estado de una disciplina dentro de la malla del alumno.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineStatus {
    Completed,
    Studying,
    Available,
    Blocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discipline_defaults_when_fields_missing() {
        let json = r#"{"code":"14117","name":"INTRODUÇÃO À PROGRAMAÇÃO I","professor":"Péricles Miranda","period":1}"#;
        let d: Discipline = serde_json::from_str(json).unwrap();
        assert_eq!(d.hours, DEFAULT_HOURS);
        assert!(d.prerequisites.is_empty());
        assert!(d.schedules.is_empty());
        assert_eq!(d.final_average, None);
    }

    #[test]
    fn test_update_ignores_client_average() {
        let json = r#"{"name":"NUEVO","final_average":10.0}"#;
        let upd: DisciplineUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(upd.name.as_deref(), Some("NUEVO"));

        let mut d: Discipline = serde_json::from_str(
            r#"{"code":"14117","name":"X","professor":"P","period":1}"#,
        )
        .unwrap();
        upd.apply_to(&mut d);
        assert_eq!(d.name, "NUEVO");
        assert_eq!(d.final_average, None);
    }

    #[test]
    fn test_semester_status_labels() {
        assert_eq!(serde_json::to_string(&SemesterStatus::Active).unwrap(), "\"Ativo\"");
        let s: SemesterStatus = serde_json::from_str("\"Encerrado\"").unwrap();
        assert_eq!(s, SemesterStatus::Closed);
    }
}
