use planejador::error::ImportError;
use planejador::importer::{import_csv, import_file};
use std::io::Write;

const HEADER: &str = "Código;Nome;Professor;Período;Local;Dia;Início;Fim;Pré-requisitos";

#[test]
fn test_import_csv_agrupa_por_codigo() {
    let csv = format!(
        "{}\n\
         14117;INTRODUÇÃO À PROGRAMAÇÃO I;Péricles Miranda;1;CEGOE 05;1;14:00;16:00;\n\
         14117;INTRODUÇÃO À PROGRAMAÇÃO I;Péricles Miranda;1;CEGOE 05;4;16:00;18:00;\n\
         06214;ALGORITMOS;TBD;2;Lab 1;2;14:00;16:00;14117, 06507\n",
        HEADER
    );
    let report = import_csv(&csv).expect("Debe importar el CSV");
    assert!(report.errors.is_empty(), "errores: {:?}", report.errors);
    assert_eq!(report.disciplines.len(), 2);

    let intro = &report.disciplines[0];
    assert_eq!(intro.code, "14117");
    assert_eq!(intro.schedules.len(), 2);
    assert_eq!(intro.schedules[1].day, 4);
    assert_eq!(intro.hours, 60);

    let alg = &report.disciplines[1];
    assert_eq!(alg.prerequisites, vec!["14117".to_string(), "06507".to_string()]);
    assert_eq!(alg.schedules[0].location, "Lab 1");
}

#[test]
fn test_import_csv_errores_por_linea() {
    let csv = format!(
        "{}\n\
         14117;INTRO;Prof;1;Sala;1;14:00;16:00;\n\
         ;SIN CODIGO;Prof;1;Sala;1;14:00;16:00;\n\
         99001;PERIODO MALO;Prof;12;Sala;1;14:00;16:00;\n\
         99002;DIA MALO;Prof;2;Sala;7;14:00;16:00;\n\
         99003;HORA MALA;Prof;2;Sala;3;16:00;14:00;\n",
        HEADER
    );
    let report = import_csv(&csv).unwrap();
    assert_eq!(report.disciplines.len(), 1);
    assert_eq!(report.errors.len(), 4);
    assert!(report.errors[0].starts_with("line 3:"), "{}", report.errors[0]);
    assert!(report.errors[1].starts_with("line 4:"));
    assert!(report.errors[2].starts_with("line 5:"));
    assert!(report.errors[3].starts_with("line 6:"));
}

#[test]
fn test_import_csv_encabezados_faltantes() {
    let err = import_csv("Código;Nome\n14117;INTRO\n").unwrap_err();
    match err {
        ImportError::MissingHeaders(missing) => {
            assert!(missing.contains(&"Professor".to_string()));
            assert!(missing.contains(&"Pré-requisitos".to_string()));
        }
        other => panic!("Se esperaba MissingHeaders, vino {:?}", other),
    }
}

#[test]
fn test_import_csv_vacio_o_sin_datos() {
    assert!(matches!(import_csv(""), Err(ImportError::Empty)));
    assert!(matches!(import_csv(&format!("{}\n", HEADER)), Err(ImportError::NoData)));
}

#[test]
fn test_import_csv_encabezado_con_bom_y_columnas_reordenadas() {
    let csv = "\u{feff}Nome;Código;Professor;Período;Local;Dia;Início;Fim;Pré-requisitos\n\
               CÁLCULO NI;06507;DM;1;Sala 2;1;16:00;18:00;\n";
    let report = import_csv(csv).unwrap();
    assert_eq!(report.disciplines[0].code, "06507");
    assert_eq!(report.disciplines[0].name, "CÁLCULO NI");
}

#[test]
fn test_import_file_csv() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    writeln!(file, "14203;MATEMÁTICA DISCRETA I;Pablo Sampaio;1;Sala 4;3;16:00;18:00;").unwrap();
    file.flush().unwrap();

    let report = import_file(file.path()).unwrap();
    assert_eq!(report.disciplines.len(), 1);
    assert_eq!(report.disciplines[0].professor, "Pablo Sampaio");
}

#[test]
fn test_import_file_inexistente() {
    assert!(import_file("/no/existe/grade.csv").is_err());
    assert!(matches!(import_file("/no/existe/grade.xlsx"), Err(ImportError::Spreadsheet(_))));
}
