// Datos iniciales: niveles 1 y 2 de la malla CCP02 y los semestres 2024.1/2024.2.
use crate::models::{Discipline, SemesterRecord, SemesterStatus, TimeBlock};

const TBD: &str = "A definir";

fn disc(code: &str, name: &str, professor: &str, period: u8, schedules: [(u8, &str, &str); 2], prereqs: &[&str]) -> Discipline {
    Discipline {
        code: code.to_string(),
        name: name.to_string(),
        professor: professor.to_string(),
        period,
        hours: 60,
        prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
        schedules: schedules.iter().map(|(d, s, e)| TimeBlock::new(*d, s, e, TBD)).collect(),
        n1: None,
        n2: None,
        n3: None,
        final_average: None,
    }
}

/// Disciplinas y semestres con los que arranca un almacenamiento vacío.
pub fn default_curriculum() -> (Vec<Discipline>, Vec<SemesterRecord>) {
    let disciplines = vec![
        // 1º nivel
        disc("06418", "ÁLGEBRA VETORIAL E LINEAR PARA COMPUTAÇÃO", "DM", 1, [(2, "16:00", "18:00"), (4, "14:00", "16:00")], &[]),
        disc("06507", "CÁLCULO NI", "DM", 1, [(1, "16:00", "18:00"), (3, "14:00", "16:00")], &[]),
        disc("14044", "INTRODUÇÃO À CIÊNCIA DA COMPUTAÇÃO", "Rafael Perazzo", 1, [(2, "14:00", "16:00"), (5, "16:00", "18:00")], &[]),
        disc("14117", "INTRODUÇÃO À PROGRAMAÇÃO I", "Péricles Miranda", 1, [(1, "14:00", "16:00"), (4, "16:00", "18:00")], &[]),
        disc("14203", "MATEMÁTICA DISCRETA I", "Pablo Sampaio", 1, [(3, "16:00", "18:00"), (5, "14:00", "16:00")], &[]),
        // 2º nivel
        disc("06214", "ALGORITMOS", "TBD", 2, [(2, "14:00", "16:00"), (4, "16:00", "18:00")], &["14117"]),
        disc("06508", "CÁLCULO NII", "DM", 2, [(1, "14:00", "16:00"), (3, "16:00", "18:00")], &["06507"]),
        disc("14204", "MATEMÁTICA DISCRETA II", "Maigan Steffane", 2, [(3, "16:00", "18:00"), (5, "14:00", "16:00")], &["14203"]),
    ];

    let semesters = vec![
        SemesterRecord { code: "2024.1".to_string(), status: SemesterStatus::Active },
        SemesterRecord { code: "2024.2".to_string(), status: SemesterStatus::Planned },
    ];

    (disciplines, semesters)
}
