use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::AcademicStore;
use super::seed::default_curriculum;
use crate::error::StoreError;
use crate::models::{
    Discipline, DisciplineCreate, DisciplineUpdate, Grades, Semester, SemesterRecord, SemesterUpdate,
};

const DISCIPLINES_FILE: &str = "disciplines.json";
const SEMESTERS_FILE: &str = "semesters.json";
const ENROLLMENTS_FILE: &str = "enrollments.json";

/// Base de datos en memoria con persistencia en JSON.
///
/// Con `data_dir = None` (tests) nunca toca disco.
#[derive(Debug, Default)]
pub struct JsonStore {
    data_dir: Option<PathBuf>,
    disciplines: BTreeMap<String, Discipline>,
    semesters: BTreeMap<String, SemesterRecord>,
    /// semestre -> códigos matriculados (orden de matrícula)
    enrollments: BTreeMap<String, Vec<String>>,
}

/// Copia de los mapas para deshacer una mutación cuyo guardado falló.
struct Snapshot {
    disciplines: BTreeMap<String, Discipline>,
    semesters: BTreeMap<String, SemesterRecord>,
    enrollments: BTreeMap<String, Vec<String>>,
}

fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        return Ok(T::default());
    }
    let path_str = path.to_string_lossy().to_string();
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io { path: path_str.clone(), source })?;
    if contents.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&contents).map_err(|source| StoreError::Json { path: path_str, source })
}

/// Escribe a un temporal y renombra, para no dejar ficheros a medias.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let path_str = path.to_string_lossy().to_string();
    let text = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json { path: path_str.clone(), source })?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, text).map_err(|source| StoreError::Io { path: tmp.to_string_lossy().to_string(), source })?;
    fs::rename(&tmp, path).map_err(|source| StoreError::Io { path: path_str, source })
}

impl JsonStore {
    /// Almacenamiento vacío, sólo en memoria.
    pub fn in_memory() -> Self {
        JsonStore::default()
    }

    /// En memoria, con la malla por defecto.
    pub fn seeded() -> Self {
        let mut store = JsonStore::default();
        store.load_defaults();
        store
    }

    /// Abre (o crea) el directorio de datos. Si no hay disciplinas guardadas
    /// se inicializa con la malla por defecto y se persiste.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io { path: dir.to_string_lossy().to_string(), source })?;

        let mut store = JsonStore {
            disciplines: read_json(&dir.join(DISCIPLINES_FILE))?,
            semesters: read_json(&dir.join(SEMESTERS_FILE))?,
            enrollments: read_json(&dir.join(ENROLLMENTS_FILE))?,
            data_dir: Some(dir),
        };

        if store.disciplines.is_empty() {
            info!("empty data dir, loading default curriculum");
            store.load_defaults();
            store.save_all()?;
        }
        info!(
            disciplines = store.disciplines.len(),
            semesters = store.semesters.len(),
            "store opened"
        );
        Ok(store)
    }

    fn load_defaults(&mut self) {
        let (disciplines, semesters) = default_curriculum();
        for d in disciplines {
            self.disciplines.insert(d.code.clone(), d);
        }
        for s in semesters {
            self.enrollments.entry(s.code.clone()).or_default();
            self.semesters.insert(s.code.clone(), s);
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Persiste los tres ficheros. No-op en memoria.
    pub fn save_all(&self) -> Result<(), StoreError> {
        let Some(dir) = &self.data_dir else { return Ok(()) };
        write_json(&dir.join(DISCIPLINES_FILE), &self.disciplines)?;
        write_json(&dir.join(SEMESTERS_FILE), &self.semesters)?;
        write_json(&dir.join(ENROLLMENTS_FILE), &self.enrollments)?;
        debug!(dir = %dir.display(), "store saved");
        Ok(())
    }

    /// `None` en memoria: ahí guardar nunca falla.
    fn checkpoint(&self) -> Option<Snapshot> {
        self.data_dir.as_ref().map(|_| Snapshot {
            disciplines: self.disciplines.clone(),
            semesters: self.semesters.clone(),
            enrollments: self.enrollments.clone(),
        })
    }

    /// Guarda; si falla, restaura el estado de `before` y propaga el error.
    /// Memoria y disco no quedan divergentes.
    fn commit(&mut self, before: Option<Snapshot>) -> Result<(), StoreError> {
        if let Err(e) = self.save_all() {
            if let Some(snap) = before {
                self.disciplines = snap.disciplines;
                self.semesters = snap.semesters;
                self.enrollments = snap.enrollments;
            }
            warn!(error = %e, "save failed, changes rolled back");
            return Err(e);
        }
        Ok(())
    }

    // ============ DISCIPLINAS ============

    pub fn contains_discipline(&self, code: &str) -> bool {
        self.disciplines.contains_key(code)
    }

    /// `None` si ya existe una disciplina con ese código.
    pub fn create_discipline(&mut self, discipline: DisciplineCreate) -> Result<Option<Discipline>, StoreError> {
        if self.disciplines.contains_key(&discipline.code) {
            return Ok(None);
        }
        let before = self.checkpoint();
        let d: Discipline = discipline.into();
        self.disciplines.insert(d.code.clone(), d.clone());
        self.commit(before)?;
        Ok(Some(d))
    }

    /// Borra la disciplina y la quita de todas las matrículas.
    pub fn delete_discipline(&mut self, code: &str) -> Result<bool, StoreError> {
        if !self.disciplines.contains_key(code) {
            return Ok(false);
        }
        let before = self.checkpoint();
        self.disciplines.remove(code);
        for codes in self.enrollments.values_mut() {
            codes.retain(|c| c != code);
        }
        self.commit(before)?;
        Ok(true)
    }

    /// Crea las que no existan; devuelve cuántas se agregaron.
    pub fn bulk_create_disciplines(&mut self, disciplines: Vec<DisciplineCreate>) -> Result<usize, StoreError> {
        let before = self.checkpoint();
        let mut count = 0;
        for d in disciplines {
            if self.disciplines.contains_key(&d.code) {
                continue;
            }
            let d: Discipline = d.into();
            self.disciplines.insert(d.code.clone(), d);
            count += 1;
        }
        if count > 0 {
            self.commit(before)?;
        }
        Ok(count)
    }

    pub fn get_grades(&self, code: &str) -> Option<Grades> {
        self.disciplines.get(code).map(Grades::from)
    }

    // ============ SEMESTRES ============

    fn semester_view(&self, record: &SemesterRecord) -> Semester {
        Semester {
            code: record.code.clone(),
            status: record.status,
            disciplines: self.enrollments.get(&record.code).cloned().unwrap_or_default(),
        }
    }

    pub fn list_semesters(&self) -> Vec<Semester> {
        self.semesters.values().map(|r| self.semester_view(r)).collect()
    }

    /// `None` si el semestre ya existe.
    pub fn create_semester(&mut self, record: SemesterRecord) -> Result<Option<Semester>, StoreError> {
        if self.semesters.contains_key(&record.code) {
            return Ok(None);
        }
        let before = self.checkpoint();
        self.enrollments.entry(record.code.clone()).or_default();
        let view = self.semester_view(&record);
        self.semesters.insert(record.code.clone(), record);
        self.commit(before)?;
        Ok(Some(view))
    }

    pub fn update_semester(&mut self, code: &str, update: SemesterUpdate) -> Result<Option<Semester>, StoreError> {
        if !self.semesters.contains_key(code) {
            return Ok(None);
        }
        let before = self.checkpoint();
        let Some(record) = self.semesters.get_mut(code) else { return Ok(None) };
        if let Some(status) = update.status {
            record.status = status;
        }
        let record = record.clone();
        self.commit(before)?;
        Ok(Some(self.semester_view(&record)))
    }

    // ============ ESTADÍSTICAS ============

    /// Suma de la carga horaria de todas las disciplinas.
    pub fn total_hours(&self) -> u64 {
        self.disciplines.values().map(|d| u64::from(d.hours)).sum()
    }
}

impl AcademicStore for JsonStore {
    fn get_discipline(&self, code: &str) -> Option<Discipline> {
        self.disciplines.get(code).cloned()
    }

    fn list_disciplines(&self) -> Vec<Discipline> {
        self.disciplines.values().cloned().collect()
    }

    fn get_semester(&self, code: &str) -> Option<Semester> {
        self.semesters.get(code).map(|r| self.semester_view(r))
    }

    fn enrolled_codes(&self, semester_code: &str) -> Vec<String> {
        self.enrollments.get(semester_code).cloned().unwrap_or_default()
    }

    fn set_enrollment(&mut self, semester_code: &str, discipline_code: &str, present: bool) -> Result<bool, StoreError> {
        let before = self.checkpoint();
        let Some(codes) = self.enrollments.get_mut(semester_code) else { return Ok(false) };
        let already = codes.iter().any(|c| c == discipline_code);
        let changed = if present {
            if already || !self.disciplines.contains_key(discipline_code) {
                false
            } else {
                codes.push(discipline_code.to_string());
                true
            }
        } else if already {
            codes.retain(|c| c != discipline_code);
            true
        } else {
            false
        };
        if changed {
            self.commit(before)?;
        }
        Ok(changed)
    }

    fn set_grades(
        &mut self,
        discipline_code: &str,
        n1: f64,
        n2: f64,
        n3: f64,
        final_average: f64,
    ) -> Result<bool, StoreError> {
        if !self.disciplines.contains_key(discipline_code) {
            return Ok(false);
        }
        let before = self.checkpoint();
        let Some(d) = self.disciplines.get_mut(discipline_code) else { return Ok(false) };
        d.n1 = Some(n1);
        d.n2 = Some(n2);
        d.n3 = Some(n3);
        d.final_average = Some(final_average);
        self.commit(before)?;
        Ok(true)
    }

    fn update_discipline(&mut self, code: &str, update: DisciplineUpdate) -> Result<Option<Discipline>, StoreError> {
        if !self.disciplines.contains_key(code) {
            return Ok(None);
        }
        let before = self.checkpoint();
        let Some(d) = self.disciplines.get_mut(code) else { return Ok(None) };
        update.apply_to(d);
        let d = d.clone();
        self.commit(before)?;
        Ok(Some(d))
    }
}
