//! Almacenamiento de disciplinas, semestres y matrículas.
//!
//! El motor de reglas sólo conoce el trait `AcademicStore`; `JsonStore` es la
//! implementación en memoria con espejo en ficheros JSON.

mod json;
mod seed;

pub use json::JsonStore;
pub use seed::default_curriculum;

use crate::error::StoreError;
use crate::models::{Discipline, DisciplineUpdate, Semester};

/// Interfaz que consume el flujo de matrícula.
pub trait AcademicStore {
    fn get_discipline(&self, code: &str) -> Option<Discipline>;

    fn list_disciplines(&self) -> Vec<Discipline>;

    fn get_semester(&self, code: &str) -> Option<Semester>;

    /// Códigos matriculados en orden; vacío si el semestre no existe.
    fn enrolled_codes(&self, semester_code: &str) -> Vec<String>;

    /// Agrega (`present = true`) o quita la disciplina del semestre.
    /// Devuelve si hubo cambio.
    fn set_enrollment(&mut self, semester_code: &str, discipline_code: &str, present: bool) -> Result<bool, StoreError>;

    /// Guarda las tres notas y la media derivada en una sola escritura.
    fn set_grades(
        &mut self,
        discipline_code: &str,
        n1: f64,
        n2: f64,
        n3: f64,
        final_average: f64,
    ) -> Result<bool, StoreError>;

    fn update_discipline(&mut self, code: &str, update: DisciplineUpdate) -> Result<Option<Discipline>, StoreError>;

    /// Disciplinas matriculadas, en el orden de la lista de matrícula.
    /// Los códigos sin disciplina asociada se omiten.
    fn enrolled_disciplines(&self, semester_code: &str) -> Vec<Discipline> {
        self.enrolled_codes(semester_code)
            .iter()
            .filter_map(|c| self.get_discipline(c))
            .collect()
    }
}
