use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a batch file with `rows` net-salary requests for salaries
/// 1000, 2000, ... so each result is distinguishable.
pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(&["calculo", "precioBase", "costo", "salarioBase", "porcentaje"])?;

    for i in 1..=rows {
        wtr.write_record(&["Salario Neto", "", "", &(i * 1000).to_string(), ""])?;
    }

    wtr.flush()?;
    Ok(())
}
