use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("El valor para '{field}' es requerido.")]
    MissingField { field: &'static str },
    #[error("{0}")]
    DomainViolation(String),
    #[error("Cálculo no definido: '{0}'")]
    UnknownCalculation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    pub fn domain(message: impl Into<String>) -> Self {
        Self::DomainViolation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
