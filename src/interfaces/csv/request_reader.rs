use crate::domain::inputs::{Field, InputBindings};
use crate::error::{CalcError, Result};
use crate::interfaces::input::sanitize;
use serde::Deserialize;
use std::io::Read;

/// One row of a batch file: a calculation name plus raw field text.
///
/// Cells may be empty or missing; only cells that sanitize to a number are
/// bound as inputs.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CalculationRequest {
    #[serde(rename = "calculo")]
    pub calculation: String,
    #[serde(rename = "precioBase", default)]
    pub base_price: Option<String>,
    #[serde(rename = "costo", default)]
    pub cost: Option<String>,
    #[serde(rename = "salarioBase", default)]
    pub base_salary: Option<String>,
    #[serde(rename = "porcentaje", default)]
    pub percentage: Option<String>,
}

impl CalculationRequest {
    fn raw(&self, field: Field) -> Option<&str> {
        match field {
            Field::BasePrice => self.base_price.as_deref(),
            Field::Cost => self.cost.as_deref(),
            Field::BaseSalary => self.base_salary.as_deref(),
            Field::Percentage => self.percentage.as_deref(),
        }
    }

    /// Sanitized numeric inputs for this request.
    pub fn inputs(&self) -> InputBindings {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                self.raw(field)
                    .and_then(sanitize)
                    .map(|value| (field.key(), value))
            })
            .collect()
    }
}

/// Reads calculation requests from a CSV source.
///
/// Expects the header `calculo,precioBase,costo,salarioBase,porcentaje`.
/// Whitespace is trimmed and short rows are accepted.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<CalculationRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalcError::from))
    }
}
