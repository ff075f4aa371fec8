use planejador::algorithm::*;
use planejador::error::CalcError;

#[test]
fn test_final_average_dos_mayores() {
    assert_eq!(final_average(10.0, 8.0, 2.0).unwrap(), 9.0);
    assert_eq!(final_average(2.0, 8.0, 10.0).unwrap(), 9.0);
    assert_eq!(final_average(7.0, 7.0, 7.0).unwrap(), 7.0);
    // (6.75 + 6.5) / 2 = 6.625 -> 6.63
    assert_eq!(final_average(6.5, 6.75, 0.0).unwrap(), 6.63);
}

#[test]
fn test_final_average_fuera_de_rango() {
    assert_eq!(final_average(11.0, 8.0, 2.0), Err(CalcError::OutOfRange { value: 11.0 }));
    assert!(final_average(5.0, -0.5, 2.0).is_err());
    assert!(final_average(5.0, 5.0, f64::NAN).is_err());
}

#[test]
fn test_remedial_bordes() {
    assert_eq!(remedial_grade_needed(3.0).unwrap(), Some(7.0));
    assert_eq!(remedial_grade_needed(6.99).unwrap(), Some(3.01));
    assert_eq!(remedial_grade_needed(5.5).unwrap(), Some(4.5));
    assert_eq!(remedial_grade_needed(7.0).unwrap(), None);
    assert_eq!(remedial_grade_needed(2.99).unwrap(), None);
    assert!(remedial_grade_needed(10.5).is_err());
}

#[test]
fn test_course_progress_limites() {
    assert_eq!(course_progress_percent(-5, 100).unwrap(), 0.0);
    assert_eq!(course_progress_percent(150, 100).unwrap(), 100.0);
    assert_eq!(course_progress_percent(60, 3210).unwrap(), 1.87);
    assert!(matches!(course_progress_percent(0, 0), Err(CalcError::InvalidConfiguration(_))));
    assert!(course_progress_percent(10, -1).is_err());
}

#[test]
fn test_weighted_average_ignora_sin_media() {
    use planejador::algorithm::grades::WeightedRecord;
    let records = vec![
        WeightedRecord { final_average: Some(8.0), hours: Some(60) },
        WeightedRecord { final_average: Some(6.0), hours: Some(30) },
        WeightedRecord { final_average: None, hours: Some(90) },
    ];
    // (480 + 180) / 90 = 7.333...
    assert_eq!(weighted_average(&records), Some(7.33));

    let sin_media = vec![WeightedRecord { final_average: None, hours: Some(60) }];
    assert_eq!(weighted_average(&sin_media), None);
}

#[test]
fn test_general_average() {
    assert_eq!(general_average(&[]).unwrap(), None);
    assert_eq!(general_average(&[7.0, 8.0, 9.5]).unwrap(), Some(8.17));
    assert!(general_average(&[7.0, 12.0]).is_err());
}

#[test]
fn test_final_exam_report_simulador() {
    let report = final_exam_report(5.0).unwrap();
    assert!(report.needs_final_exam);
    assert_eq!(report.final_exam_grade_needed, Some(5.0));

    let aprobado = final_exam_report(9.0).unwrap();
    assert!(!aprobado.needs_final_exam);
    assert_eq!(aprobado.final_exam_grade_needed, None);
}
