use planejador::algorithm::{enroll, progress_report, record_grades, unenroll, EnrollOutcome, UnenrollOutcome};
use planejador::error::{EnrollError, Entity};
use planejador::models::{DisciplineCreate, DisciplineUpdate, TimeBlock};
use planejador::store::{AcademicStore, JsonStore};

#[test]
fn test_conflicto_nombra_disciplina_matriculada() {
    planejador::logging::init_test();
    let mut store = JsonStore::seeded();
    // 06214 (ALGORITMOS, martes 14-16) ya está en 2024.1
    assert!(store.set_enrollment("2024.1", "06214", true).unwrap());

    let update = DisciplineUpdate {
        schedules: Some(vec![TimeBlock::new(2, "15:00", "17:00", "Sala 3")]),
        ..Default::default()
    };
    store.update_discipline("14117", update).unwrap();

    match enroll(&mut store, "2024.1", "14117").unwrap() {
        EnrollOutcome::ScheduleConflict { discipline, detail } => {
            assert_eq!(discipline, "ALGORITMOS");
            assert_eq!(detail.day, 2);
            assert_eq!(detail.time1, "15:00-17:00");
            assert_eq!(detail.time2, "14:00-16:00");
        }
        other => panic!("Se esperaba conflicto de horario, vino {:?}", other),
    }
    assert_eq!(store.enrolled_codes("2024.1"), vec!["06214".to_string()]);
}

#[test]
fn test_prerequisitos_faltantes_por_nombre() {
    let mut store = JsonStore::seeded();
    let outcome = enroll(&mut store, "2024.1", "06214").unwrap();
    assert_eq!(
        outcome,
        EnrollOutcome::PrerequisitesNotMet { missing: vec!["INTRODUÇÃO À PROGRAMAÇÃO I".to_string()] }
    );
    assert!(store.enrolled_codes("2024.1").is_empty());
}

#[test]
fn test_media_bajo_siete_no_cumple_prerequisito() {
    let mut store = JsonStore::seeded();
    // (7 + 5) / 2 = 6.0
    record_grades(&mut store, "14117", 7.0, 5.0, 2.0).unwrap();
    assert!(matches!(
        enroll(&mut store, "2024.1", "06214").unwrap(),
        EnrollOutcome::PrerequisitesNotMet { .. }
    ));
}

#[test]
fn test_flujo_completo_con_notas() {
    let mut store = JsonStore::seeded();
    let report = record_grades(&mut store, "14117", 8.0, 7.0, 9.0).unwrap();
    assert_eq!(report.average, 8.5);

    assert_eq!(enroll(&mut store, "2024.1", "06214").unwrap(), EnrollOutcome::EnrolledSuccessfully);

    // 14044 también ocupa el martes 14-16
    match enroll(&mut store, "2024.1", "14044").unwrap() {
        EnrollOutcome::ScheduleConflict { discipline, .. } => assert_eq!(discipline, "ALGORITMOS"),
        other => panic!("Se esperaba conflicto, vino {:?}", other),
    }

    // sin choque con 06214
    assert!(enroll(&mut store, "2024.1", "14203").unwrap().is_success());
    assert_eq!(store.enrolled_codes("2024.1"), vec!["06214".to_string(), "14203".to_string()]);
}

#[test]
fn test_rematricula_ya_matriculada() {
    let mut store = JsonStore::seeded();
    assert_eq!(enroll(&mut store, "2024.1", "14117").unwrap(), EnrollOutcome::EnrolledSuccessfully);
    let antes = store.enrolled_codes("2024.1");
    assert_eq!(enroll(&mut store, "2024.1", "14117").unwrap(), EnrollOutcome::AlreadyEnrolled);
    assert_eq!(store.enrolled_codes("2024.1"), antes);
}

#[test]
fn test_unenroll() {
    let mut store = JsonStore::seeded();
    enroll(&mut store, "2024.1", "14203").unwrap();
    assert_eq!(unenroll(&mut store, "2024.1", "14203").unwrap(), UnenrollOutcome::Removed);
    assert_eq!(unenroll(&mut store, "2024.1", "14203").unwrap(), UnenrollOutcome::NotEnrolled);
    assert!(store.enrolled_codes("2024.1").is_empty());
}

#[test]
fn test_entidades_inexistentes() {
    let mut store = JsonStore::seeded();
    let err = enroll(&mut store, "2030.2", "14117").unwrap_err();
    assert!(matches!(err, EnrollError::NotFound { entity: Entity::Semester, .. }));
    let err = record_grades(&mut store, "00000", 8.0, 8.0, 8.0).unwrap_err();
    assert!(matches!(err, EnrollError::NotFound { entity: Entity::Discipline, .. }));
}

#[test]
fn test_record_grades_fuera_de_rango_no_escribe() {
    let mut store = JsonStore::seeded();
    let err = record_grades(&mut store, "14117", 8.0, 11.0, 9.0).unwrap_err();
    assert!(matches!(err, EnrollError::Calc(_)));
    let d = store.get_discipline("14117").unwrap();
    assert_eq!(d.n1, None);
    assert_eq!(d.final_average, None);
}

/// 14117 pasa a ocupar el martes 14-16, igual que 14044 y 06214.
fn conflicto_con_dos(orden: [&str; 2]) -> EnrollOutcome {
    let mut store = JsonStore::seeded();
    for code in orden {
        assert!(store.set_enrollment("2024.1", code, true).unwrap());
    }
    let update = DisciplineUpdate {
        schedules: Some(vec![TimeBlock::new(2, "14:00", "16:00", "Sala 1")]),
        ..Default::default()
    };
    store.update_discipline("14117", update).unwrap();
    assert_eq!(store.enrolled_codes("2024.1"), vec![orden[0].to_string(), orden[1].to_string()]);
    enroll(&mut store, "2024.1", "14117").unwrap()
}

#[test]
fn test_conflicto_reporta_primera_en_orden_de_matricula() {
    match conflicto_con_dos(["14044", "06214"]) {
        EnrollOutcome::ScheduleConflict { discipline, .. } => {
            assert_eq!(discipline, "INTRODUÇÃO À CIÊNCIA DA COMPUTAÇÃO")
        }
        other => panic!("Se esperaba conflicto, vino {:?}", other),
    }
    match conflicto_con_dos(["06214", "14044"]) {
        EnrollOutcome::ScheduleConflict { discipline, .. } => assert_eq!(discipline, "ALGORITMOS"),
        other => panic!("Se esperaba conflicto, vino {:?}", other),
    }
}

#[test]
fn test_progreso_con_cargas_horarias_grandes() {
    let mut store = JsonStore::in_memory();
    for code in ["90001", "90002"] {
        let created = store
            .create_discipline(DisciplineCreate {
                code: code.to_string(),
                name: format!("ESTÁGIO {}", code),
                professor: "Prof".to_string(),
                period: 9,
                hours: 3_000_000_000,
                prerequisites: vec![],
                schedules: vec![],
            })
            .unwrap();
        assert!(created.is_some());
        record_grades(&mut store, code, 8.0, 8.0, 8.0).unwrap();
    }

    let report = progress_report(&store, &[], 3210).expect("No debe desbordar");
    assert_eq!(report.completed_hours, 6_000_000_000);
    assert_eq!(report.percentage, 100.0);
    assert_eq!(report.weighted_average, Some(8.0));
}
