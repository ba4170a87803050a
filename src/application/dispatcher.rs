use crate::domain::formulas;
use crate::domain::history::HistoryEntry;
use crate::domain::inputs::{Field, InputBindings};
use crate::domain::kind::CalculationKind;
use crate::domain::ports::HistoryStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryHistory;
use rust_decimal::{Decimal, RoundingStrategy};

/// Outcome of a single calculation.
pub type CalculationResult = Result<Decimal>;

/// Receives the required field values in the order listed by its binding.
type Formula = fn(&[Decimal]) -> Result<Decimal>;

struct Binding {
    kind: CalculationKind,
    fields: &'static [Field],
    formula: Formula,
}

// Indexed by `CalculationKind as usize`; entries follow `CalculationKind::ALL`.
static CATALOG: [Binding; 14] = [
    Binding {
        kind: CalculationKind::PriceWithTax,
        fields: &[Field::BasePrice],
        formula: |v| formulas::price_with_tax(v[0]),
    },
    Binding {
        kind: CalculationKind::ProfitMargin,
        fields: &[Field::BasePrice, Field::Cost],
        formula: |v| formulas::profit_margin(v[0], v[1]),
    },
    Binding {
        kind: CalculationKind::BreakEvenPoint,
        fields: &[Field::BaseSalary, Field::BasePrice, Field::Cost],
        formula: |v| formulas::break_even_point(v[0], v[1], v[2]),
    },
    Binding {
        kind: CalculationKind::Roi,
        fields: &[Field::BasePrice, Field::Cost],
        formula: |v| formulas::roi(v[0], v[1]),
    },
    Binding {
        kind: CalculationKind::TotalPayrollCost,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::total_payroll_cost(v[0]),
    },
    Binding {
        kind: CalculationKind::SocialProvisions,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::social_provisions(v[0]),
    },
    Binding {
        kind: CalculationKind::ParafiscalContributions,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::parafiscal_contributions(v[0]),
    },
    Binding {
        kind: CalculationKind::SocialBenefits,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::social_benefits(v[0]),
    },
    Binding {
        kind: CalculationKind::NetSalary,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::net_salary(v[0]),
    },
    Binding {
        kind: CalculationKind::Deductions,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::deductions(v[0]),
    },
    Binding {
        kind: CalculationKind::DayOvertimeRate,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::day_overtime_rate(v[0]),
    },
    Binding {
        kind: CalculationKind::NightOvertimeRate,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::night_overtime_rate(v[0]),
    },
    Binding {
        kind: CalculationKind::HolidayOvertimeRate,
        fields: &[Field::BaseSalary],
        formula: |v| formulas::holiday_overtime_rate(v[0]),
    },
    Binding {
        kind: CalculationKind::Bonus,
        fields: &[Field::BaseSalary, Field::Percentage],
        formula: |v| formulas::bonus(v[0], v[1]),
    },
];

fn binding(kind: CalculationKind) -> &'static Binding {
    let binding = &CATALOG[kind as usize];
    debug_assert_eq!(binding.kind, kind);
    binding
}

/// Required input fields for `kind`, in the order the formula consumes them.
pub fn required_fields(kind: CalculationKind) -> &'static [Field] {
    binding(kind).fields
}

/// Renders a result as display text: numbers to two decimal places (halves
/// away from zero) without trailing zeros, errors prefixed with `Error: `.
pub fn render(result: &CalculationResult) -> String {
    match result {
        Ok(value) => value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Resolves calculations, runs the formulas and keeps the recent history.
///
/// All methods take `&self`; the history store serializes its own access,
/// so a dispatcher can be shared between callers.
pub struct CalculationDispatcher {
    history: HistoryStoreBox,
}

impl Default for CalculationDispatcher {
    fn default() -> Self {
        Self::new(Box::new(InMemoryHistory::new()))
    }
}

impl CalculationDispatcher {
    /// Creates a new `CalculationDispatcher` backed by the given history store.
    pub fn new(history: HistoryStoreBox) -> Self {
        Self { history }
    }

    /// Evaluates `kind` against `inputs`.
    ///
    /// Fails with `MissingField` for the first required field that is not
    /// bound, without calling the formula. Formula rejections are returned
    /// as `DomainViolation`.
    pub fn evaluate(&self, kind: CalculationKind, inputs: &InputBindings) -> CalculationResult {
        let binding = binding(kind);
        let values = binding
            .fields
            .iter()
            .map(|&field| inputs.require(field))
            .collect::<Result<Vec<_>>>()?;

        let result = (binding.formula)(&values);
        match &result {
            Ok(value) => tracing::debug!(calculation = %kind, %value, "calculation evaluated"),
            Err(e) => tracing::info!(calculation = %kind, error = %e, "calculation rejected"),
        }
        result
    }

    /// Appends `label` and the rendered result to the history, unless the
    /// result is an error.
    pub fn record_if_success(&self, label: &str, result: &CalculationResult) {
        if result.is_ok() {
            self.history.push(HistoryEntry::new(label, render(result)));
        }
    }

    /// Runs the calculation selected by name and returns its display text.
    ///
    /// This is the boundary for callers working with raw names: every
    /// failure, including an unknown name, comes back as `Error: ...` text.
    /// Successful results are recorded in the history under the calculation
    /// name.
    pub fn perform(&self, calculation_name: &str, inputs: &InputBindings) -> String {
        let kind = match calculation_name.parse::<CalculationKind>() {
            Ok(kind) => kind,
            Err(e) => {
                tracing::info!(calculation = calculation_name, "unknown calculation");
                return render(&Err(e));
            }
        };

        let result = self.evaluate(kind, inputs);
        self.record_if_success(kind.name(), &result);
        render(&result)
    }

    /// History entries, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    pub fn history_lines(&self) -> Vec<String> {
        self.history().iter().map(ToString::to_string).collect()
    }

    pub fn clear_history(&self) {
        self.history.clear();
        tracing::info!("history cleared");
    }
}
