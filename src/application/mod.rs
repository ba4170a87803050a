//! Application layer containing the calculation dispatch logic.
//!
//! This module defines the `CalculationDispatcher`, the single entry point
//! that resolves a calculation, runs its formula and records the history.

pub mod dispatcher;
