//! Closed-form finance and payroll formulas.
//!
//! Every function validates its inputs and returns
//! [`CalcError::DomainViolation`] when a precondition fails. Arithmetic is
//! checked, so values outside the decimal range are rejected instead of
//! panicking.

use super::constants::{
    DAY_OVERTIME_FACTOR, DEDUCTIONS_RATE, HOLIDAY_OVERTIME_FACTOR, IVA_MULTIPLIER, MONTHLY_HOURS,
    NIGHT_OVERTIME_FACTOR, ONE_HUNDRED, PARAFISCAL_RATE, SOCIAL_BENEFITS_RATE,
    SOCIAL_PROVISIONS_RATE,
};
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;

const NEGATIVE_PRICE: &str = "El precio base no puede ser negativo";
const NEGATIVE_SALARY: &str = "El salario base no puede ser negativo";
const NEGATIVE_VALUES: &str = "Los valores no pueden ser negativos";
const INVALID_ROI: &str = "Los ingresos deben ser positivos y la inversión mayor que 0";
const OUT_OF_RANGE: &str = "El resultado excede el rango numérico";

fn require(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(CalcError::domain(message))
    }
}

fn non_negative(values: &[Decimal]) -> bool {
    values.iter().all(|v| !v.is_sign_negative() || v.is_zero())
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| CalcError::domain(OUT_OF_RANGE))
}

fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_div(b).ok_or_else(|| CalcError::domain(OUT_OF_RANGE))
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| CalcError::domain(OUT_OF_RANGE))
}

fn check_salary(base_salary: Decimal) -> Result<()> {
    require(non_negative(&[base_salary]), NEGATIVE_SALARY)
}

/// Sale price including IVA.
pub fn price_with_tax(price: Decimal) -> Result<Decimal> {
    require(non_negative(&[price]), NEGATIVE_PRICE)?;
    mul(price, IVA_MULTIPLIER)
}

/// Profit margin as a percentage of the sale price. Zero sale price yields zero.
pub fn profit_margin(sale_price: Decimal, cost: Decimal) -> Result<Decimal> {
    require(non_negative(&[sale_price, cost]), NEGATIVE_VALUES)?;
    if sale_price.is_zero() {
        return Ok(Decimal::ZERO);
    }
    mul(div(sale_price - cost, sale_price)?, ONE_HUNDRED)
}

/// Units that must be sold to cover fixed costs.
///
/// Returns zero when the unit contribution margin is not positive.
pub fn break_even_point(
    fixed_costs: Decimal,
    unit_price: Decimal,
    variable_cost: Decimal,
) -> Result<Decimal> {
    require(
        non_negative(&[fixed_costs, unit_price, variable_cost]),
        NEGATIVE_VALUES,
    )?;
    let contribution = unit_price - variable_cost;
    if contribution <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    div(fixed_costs, contribution)
}

/// Return on investment as a percentage.
pub fn roi(revenue: Decimal, investment: Decimal) -> Result<Decimal> {
    require(
        non_negative(&[revenue]) && investment > Decimal::ZERO,
        INVALID_ROI,
    )?;
    mul(div(revenue - investment, investment)?, ONE_HUNDRED)
}

/// Employer cost of one salary: salary + parafiscales + prestaciones.
pub fn total_payroll_cost(base_salary: Decimal) -> Result<Decimal> {
    let parafiscal = parafiscal_contributions(base_salary)?;
    let benefits = social_benefits(base_salary)?;
    add(add(base_salary, parafiscal)?, benefits)
}

pub fn parafiscal_contributions(base_salary: Decimal) -> Result<Decimal> {
    check_salary(base_salary)?;
    mul(base_salary, PARAFISCAL_RATE)
}

pub fn social_benefits(base_salary: Decimal) -> Result<Decimal> {
    check_salary(base_salary)?;
    mul(base_salary, SOCIAL_BENEFITS_RATE)
}

pub fn social_provisions(base_salary: Decimal) -> Result<Decimal> {
    check_salary(base_salary)?;
    mul(base_salary, SOCIAL_PROVISIONS_RATE)
}

/// Take-home pay after health and pension deductions.
pub fn net_salary(base_salary: Decimal) -> Result<Decimal> {
    let deductions = deductions(base_salary)?;
    Ok(base_salary - deductions)
}

pub fn deductions(base_salary: Decimal) -> Result<Decimal> {
    check_salary(base_salary)?;
    mul(base_salary, DEDUCTIONS_RATE)
}

fn hourly_rate(base_salary: Decimal, factor: Decimal) -> Result<Decimal> {
    check_salary(base_salary)?;
    mul(div(base_salary, MONTHLY_HOURS)?, factor)
}

pub fn day_overtime_rate(base_salary: Decimal) -> Result<Decimal> {
    hourly_rate(base_salary, DAY_OVERTIME_FACTOR)
}

pub fn night_overtime_rate(base_salary: Decimal) -> Result<Decimal> {
    hourly_rate(base_salary, NIGHT_OVERTIME_FACTOR)
}

/// Hourly rate for Sunday and holiday work.
pub fn holiday_overtime_rate(base_salary: Decimal) -> Result<Decimal> {
    hourly_rate(base_salary, HOLIDAY_OVERTIME_FACTOR)
}

pub fn bonus(base: Decimal, percentage: Decimal) -> Result<Decimal> {
    require(non_negative(&[base, percentage]), NEGATIVE_VALUES)?;
    mul(base, div(percentage, ONE_HUNDRED)?)
}
