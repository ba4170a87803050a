//! Fixed Colombian regulatory rates used by the formula library.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard monthly working hours.
pub const MONTHLY_HOURS: Decimal = dec!(240);

/// IVA multiplier (19%).
pub const IVA_MULTIPLIER: Decimal = dec!(1.19);

/// SENA 2%, ICBF 3%, Caja de Compensación 4%.
pub const PARAFISCAL_RATE: Decimal = dec!(0.09);

/// Prima, cesantías, intereses and vacations.
pub const SOCIAL_BENEFITS_RATE: Decimal = dec!(0.2183);

/// General estimate for social provisions.
pub const SOCIAL_PROVISIONS_RATE: Decimal = dec!(0.30);

/// Employee health and pension contributions (4% + 4%).
pub const DEDUCTIONS_RATE: Decimal = dec!(0.08);

pub const DAY_OVERTIME_FACTOR: Decimal = dec!(1.25);
pub const NIGHT_OVERTIME_FACTOR: Decimal = dec!(1.75);
pub const HOLIDAY_OVERTIME_FACTOR: Decimal = dec!(2.00);

pub const ONE_HUNDRED: Decimal = dec!(100);
