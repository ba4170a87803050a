//! Domain layer: calculation catalog, inputs, formulas and the history port.

pub mod constants;
pub mod formulas;
pub mod history;
pub mod inputs;
pub mod kind;
pub mod ports;
