use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// Logical input fields shared across calculations.
///
/// The same field can carry different quantities depending on the
/// calculation: `salarioBase` holds the fixed costs for the break-even point
/// and the base amount for bonuses.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Field {
    BasePrice,
    Cost,
    BaseSalary,
    Percentage,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::BasePrice,
        Field::Cost,
        Field::BaseSalary,
        Field::Percentage,
    ];

    /// Key under which callers bind this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::BasePrice => "precioBase",
            Field::Cost => "costo",
            Field::BaseSalary => "salarioBase",
            Field::Percentage => "porcentaje",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Named numeric inputs supplied for a single calculation.
///
/// Only the keys the caller bound are present; keys the calculation does
/// not use are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputBindings {
    values: HashMap<String, Decimal>,
}

impl InputBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Decimal) {
        self.values.insert(key.into(), value);
    }

    pub fn with(mut self, field: Field, value: Decimal) -> Self {
        self.insert(field.key(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.values.get(key).copied()
    }

    /// Returns the bound value or a `MissingField` error naming the field.
    pub fn require(&self, field: Field) -> Result<Decimal> {
        self.get(field.key())
            .ok_or(CalcError::MissingField { field: field.key() })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for InputBindings {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
