// Verificación de prerequisitos y estado de cada disciplina en la malla.
use std::collections::HashMap;

use crate::algorithm::grades::PASSING_GRADE;
use crate::models::{Discipline, DisciplineStatus};

/// Vista derivada código -> media final, sólo con disciplinas aprobadas
/// (media >= 7.0). Se construye una vez por invocación y se pasa explícita.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletedDisciplines(HashMap<String, f64>);

impl CompletedDisciplines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_disciplines<'a, I>(disciplines: I) -> Self
    where
        I: IntoIterator<Item = &'a Discipline>,
    {
        let mut map = HashMap::new();
        for d in disciplines {
            if let Some(avg) = d.final_average {
                if avg >= PASSING_GRADE {
                    map.insert(d.code.clone(), avg);
                }
            }
        }
        CompletedDisciplines(map)
    }

    /// Inserta tal cual, sin filtrar; las consultas vuelven a exigir >= 7.0.
    pub fn insert(&mut self, code: &str, average: f64) {
        self.0.insert(code.to_string(), average);
    }

    pub fn average(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    /// Aprobada si está en el mapa con media >= 7.0.
    pub fn is_passed(&self, code: &str) -> bool {
        matches!(self.average(code), Some(avg) if avg >= PASSING_GRADE)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn averages(&self) -> Vec<f64> {
        self.0.values().copied().collect()
    }
}

impl FromIterator<(String, f64)> for CompletedDisciplines {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        CompletedDisciplines(iter.into_iter().collect())
    }
}

/// Códigos requeridos que faltan, en el orden de entrada. Los duplicados
/// se conservan tal cual.
pub fn missing_prerequisites(required: &[String], completed: &CompletedDisciplines) -> Vec<String> {
    required
        .iter()
        .filter(|code| !completed.is_passed(code))
        .cloned()
        .collect()
}

pub fn all_satisfied(required: &[String], completed: &CompletedDisciplines) -> bool {
    missing_prerequisites(required, completed).is_empty()
}

/// Estado por prioridad estricta: Completed > Studying > Available > Blocked.
pub fn discipline_status(
    code: &str,
    required: &[String],
    completed: &CompletedDisciplines,
    currently_enrolled: &[String],
) -> DisciplineStatus {
    if completed.is_passed(code) {
        DisciplineStatus::Completed
    } else if currently_enrolled.iter().any(|c| c == code) {
        DisciplineStatus::Studying
    } else if all_satisfied(required, completed) {
        DisciplineStatus::Available
    } else {
        DisciplineStatus::Blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_respeta_umbral() {
        let mut completed = CompletedDisciplines::new();
        completed.insert("A", 7.0);
        assert_eq!(missing_prerequisites(&codes(&["A", "B"]), &completed), codes(&["B"]));

        let mut completed = CompletedDisciplines::new();
        completed.insert("A", 6.9);
        assert_eq!(missing_prerequisites(&codes(&["A", "B"]), &completed), codes(&["A", "B"]));
    }

    #[test]
    fn test_missing_conserva_duplicados() {
        let completed = CompletedDisciplines::new();
        assert_eq!(missing_prerequisites(&codes(&["B", "A", "B"]), &completed), codes(&["B", "A", "B"]));
    }

    #[test]
    fn test_status_prioridad() {
        let mut completed = CompletedDisciplines::new();
        completed.insert("X", 8.0);
        let enrolled = codes(&["X", "Y"]);
        assert_eq!(discipline_status("X", &[], &completed, &enrolled), DisciplineStatus::Completed);
        assert_eq!(discipline_status("Y", &codes(&["Z"]), &completed, &enrolled), DisciplineStatus::Studying);
        assert_eq!(discipline_status("W", &codes(&["X"]), &completed, &enrolled), DisciplineStatus::Available);
        assert_eq!(discipline_status("W", &codes(&["Z"]), &completed, &enrolled), DisciplineStatus::Blocked);
    }

    #[test]
    fn test_from_disciplines_filtra_reprobadas() {
        let mk = |code: &str, avg: Option<f64>| Discipline {
            code: code.to_string(),
            name: code.to_string(),
            professor: "P".to_string(),
            period: 1,
            hours: 60,
            prerequisites: vec![],
            schedules: vec![],
            n1: None,
            n2: None,
            n3: None,
            final_average: avg,
        };
        let ds = vec![mk("A", Some(7.0)), mk("B", Some(6.5)), mk("C", None)];
        let completed = CompletedDisciplines::from_disciplines(&ds);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed.average("A"), Some(7.0));
    }
}
