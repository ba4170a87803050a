use calcfin::application::dispatcher::{CalculationDispatcher, required_fields};
use calcfin::domain::inputs::{Field, InputBindings};
use calcfin::domain::kind::Category;
use calcfin::interfaces::csv::request_reader::RequestReader;
use calcfin::interfaces::input::sanitize;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available calculations by category
    List,
    /// Evaluate a single calculation
    Eval {
        /// Calculation name, e.g. "Precio con IVA"
        calculation: String,
        #[arg(long)]
        precio_base: Option<String>,
        #[arg(long)]
        costo: Option<String>,
        #[arg(long)]
        salario_base: Option<String>,
        #[arg(long)]
        porcentaje: Option<String>,
    },
    /// Evaluate every row of a CSV file and print the resulting history
    Batch {
        /// Input CSV with header calculo,precioBase,costo,salarioBase,porcentaje
        input: PathBuf,
        /// Print the history as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List => list(&mut out).into_diagnostic()?,
        Command::Eval {
            calculation,
            precio_base,
            costo,
            salario_base,
            porcentaje,
        } => {
            let inputs: InputBindings = [
                (Field::BasePrice, precio_base),
                (Field::Cost, costo),
                (Field::BaseSalary, salario_base),
                (Field::Percentage, porcentaje),
            ]
            .into_iter()
            .filter_map(|(field, raw)| raw.as_deref().and_then(sanitize).map(|v| (field.key(), v)))
            .collect();

            let dispatcher = CalculationDispatcher::default();
            let text = dispatcher.perform(&calculation, &inputs);
            writeln!(out, "Resultado: {}", text).into_diagnostic()?;
        }
        Command::Batch { input, json } => {
            let file = File::open(input).into_diagnostic()?;
            let dispatcher = CalculationDispatcher::default();

            for request in RequestReader::new(file).requests() {
                match request {
                    Ok(request) => {
                        let text = dispatcher.perform(&request.calculation, &request.inputs());
                        writeln!(out, "{}: {}", request.calculation, text).into_diagnostic()?;
                    }
                    Err(e) => {
                        eprintln!("Error reading request: {}", e);
                    }
                }
            }

            if json {
                serde_json::to_writer_pretty(&mut out, &dispatcher.history()).into_diagnostic()?;
                writeln!(out).into_diagnostic()?;
            } else {
                writeln!(out, "Historial de Cálculos").into_diagnostic()?;
                for line in dispatcher.history_lines() {
                    writeln!(out, "{}", line).into_diagnostic()?;
                }
            }
        }
    }

    Ok(())
}

fn list(out: &mut impl Write) -> io::Result<()> {
    for category in Category::ALL {
        writeln!(out, "{}", category)?;
        for kind in category.kinds() {
            let fields: Vec<&str> = required_fields(kind).iter().map(|f| f.key()).collect();
            writeln!(out, "  {} ({})", kind, fields.join(", "))?;
        }
    }
    Ok(())
}
