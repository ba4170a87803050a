use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_batch_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("batch").arg("tests/fixtures/requests.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Precio con IVA: 119\n"))
        .stdout(predicate::str::contains("Margen de Ganancia: 25\n"))
        .stdout(predicate::str::contains(
            "ROI del Producto: Error: Los ingresos deben ser positivos y la inversión mayor que 0",
        ))
        .stdout(predicate::str::contains("Horas Extras: 12500\n"))
        .stdout(predicate::str::contains("Bonificaciones: 100000\n"))
        .stdout(predicate::str::contains(
            "Horas Extras: Error: El valor para 'salarioBase' es requerido.",
        ))
        .stdout(predicate::str::contains("Historial de Cálculos"))
        .stdout(predicate::str::contains(
            "Categoría: Precio con IVA - Resultado: 119",
        ))
        .stdout(predicate::str::contains("Categoría: ROI del Producto").not());

    Ok(())
}

#[test]
fn test_batch_json_history_keeps_last_ten() {
    let file = NamedTempFile::new().unwrap();
    common::generate_requests_csv(file.path(), 11).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("calcfin"))
        .arg("batch")
        .arg(file.path())
        .arg("--json")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('[').expect("history JSON array");
    let history: Vec<serde_json::Value> = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(history.len(), 10);
    // Salario Neto of 2000 is the oldest survivor, 11000 the newest
    assert_eq!(history[0]["result"], "1840");
    assert_eq!(history[9]["result"], "10120");
    assert!(history.iter().all(|e| e["label"] == "Salario Neto"));
}

#[test]
fn test_batch_reports_malformed_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "calculo,precioBase,costo,salarioBase,porcentaje").unwrap();
    // Invalid UTF-8 in the calculation name
    file.write_all(b"\xff\xfe,1,,,\n").unwrap();
    writeln!(file, "Precio con IVA,100,,,").unwrap();

    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("batch").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stdout(predicate::str::contains("Precio con IVA: 119"));
}

#[test]
fn test_batch_missing_file_fails() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("batch").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_eval_sanitizes_raw_input() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("eval")
        .arg("Horas Extras")
        .arg("--salario-base")
        .arg("2,400,000");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Resultado: 12500\n"));
}

#[test]
fn test_eval_missing_field() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("eval").arg("Horas Extras");

    cmd.assert().success().stdout(predicate::str::contains(
        "Resultado: Error: El valor para 'salarioBase' es requerido.",
    ));
}

#[test]
fn test_eval_unknown_calculation() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("eval").arg("Impuesto de Renta").arg("--precio-base").arg("1");

    cmd.assert().success().stdout(predicate::str::contains(
        "Error: Cálculo no definido: 'Impuesto de Renta'",
    ));
}

#[test]
fn test_list_shows_categories() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cálculos de Productos"))
        .stdout(predicate::str::contains(
            "  Punto de Equilibrio (salarioBase, precioBase, costo)",
        ))
        .stdout(predicate::str::contains("  Bonificaciones (salarioBase, porcentaje)"));
}

#[test]
fn test_rust_log_enables_debug_events() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.env("RUST_LOG", "debug")
        .arg("eval")
        .arg("Precio con IVA")
        .arg("--precio-base")
        .arg("100");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Resultado: 119\n"))
        .stderr(predicate::str::contains("calculation evaluated"));
}

#[test]
fn test_rust_log_info_reports_rejections() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.env("RUST_LOG", "info")
        .arg("eval")
        .arg("ROI del Producto")
        .arg("--precio-base")
        .arg("150")
        .arg("--costo")
        .arg("0");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("calculation rejected"))
        .stderr(predicate::str::contains("calculation evaluated").not());
}

#[test]
fn test_default_log_level_is_quiet() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.env_remove("RUST_LOG")
        .arg("eval")
        .arg("Precio con IVA")
        .arg("--precio-base")
        .arg("100");

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_rust_log_debug_reports_discarded_input() {
    let mut cmd = Command::new(cargo_bin!("calcfin"));
    cmd.env("RUST_LOG", "debug")
        .arg("eval")
        .arg("Salario Neto")
        .arg("--salario-base")
        .arg("1e30");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Resultado: Error: El valor para 'salarioBase' es requerido.",
        ))
        .stderr(predicate::str::contains("discarded unparseable input"))
        .stderr(predicate::str::contains("1e30"));
}
