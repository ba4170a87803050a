use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Groups calculations the way they are offered to the user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Product,
    Employer,
    Employee,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Product, Category::Employer, Category::Employee];

    pub fn label(self) -> &'static str {
        match self {
            Category::Product => "Cálculos de Productos",
            Category::Employer => "Cálculos de Empleador",
            Category::Employee => "Cálculos de Empleado",
        }
    }

    /// Calculations offered under this category, in menu order.
    pub fn kinds(self) -> impl Iterator<Item = CalculationKind> {
        CalculationKind::ALL
            .into_iter()
            .filter(move |kind| kind.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the fixed calculations the dispatcher knows how to run.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    PriceWithTax,
    ProfitMargin,
    BreakEvenPoint,
    Roi,
    TotalPayrollCost,
    SocialProvisions,
    ParafiscalContributions,
    SocialBenefits,
    NetSalary,
    Deductions,
    DayOvertimeRate,
    NightOvertimeRate,
    HolidayOvertimeRate,
    Bonus,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 14] = [
        CalculationKind::PriceWithTax,
        CalculationKind::ProfitMargin,
        CalculationKind::BreakEvenPoint,
        CalculationKind::Roi,
        CalculationKind::TotalPayrollCost,
        CalculationKind::SocialProvisions,
        CalculationKind::ParafiscalContributions,
        CalculationKind::SocialBenefits,
        CalculationKind::NetSalary,
        CalculationKind::Deductions,
        CalculationKind::DayOvertimeRate,
        CalculationKind::NightOvertimeRate,
        CalculationKind::HolidayOvertimeRate,
        CalculationKind::Bonus,
    ];

    /// The name a user selects this calculation by.
    pub fn name(self) -> &'static str {
        match self {
            CalculationKind::PriceWithTax => "Precio con IVA",
            CalculationKind::ProfitMargin => "Margen de Ganancia",
            CalculationKind::BreakEvenPoint => "Punto de Equilibrio",
            CalculationKind::Roi => "ROI del Producto",
            CalculationKind::TotalPayrollCost => "Costo Total de Nómina",
            CalculationKind::SocialProvisions => "Provisiones Sociales",
            CalculationKind::ParafiscalContributions => "Aportes Parafiscales",
            CalculationKind::SocialBenefits => "Prestaciones Sociales",
            CalculationKind::NetSalary => "Salario Neto",
            CalculationKind::Deductions => "Deducciones de Nómina",
            CalculationKind::DayOvertimeRate => "Horas Extras",
            CalculationKind::NightOvertimeRate => "Horas Extras Nocturnas",
            CalculationKind::HolidayOvertimeRate => "Horas Dominicales y Festivas",
            CalculationKind::Bonus => "Bonificaciones",
        }
    }

    pub fn category(self) -> Category {
        match self {
            CalculationKind::PriceWithTax
            | CalculationKind::ProfitMargin
            | CalculationKind::BreakEvenPoint
            | CalculationKind::Roi => Category::Product,
            CalculationKind::TotalPayrollCost
            | CalculationKind::SocialProvisions
            | CalculationKind::ParafiscalContributions
            | CalculationKind::SocialBenefits => Category::Employer,
            CalculationKind::NetSalary
            | CalculationKind::Deductions
            | CalculationKind::DayOvertimeRate
            | CalculationKind::NightOvertimeRate
            | CalculationKind::HolidayOvertimeRate
            | CalculationKind::Bonus => Category::Employee,
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        CalculationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CalcError::UnknownCalculation(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CalculationKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), CalculationKind::ALL.len());
    }

    #[test]
    fn test_parse_by_name() {
        for kind in CalculationKind::ALL {
            assert_eq!(kind.name().parse::<CalculationKind>().unwrap(), kind);
        }
        assert_eq!(
            "  Horas Extras ".parse::<CalculationKind>().unwrap(),
            CalculationKind::DayOvertimeRate
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "Impuesto de Renta".parse::<CalculationKind>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownCalculation(ref n) if n == "Impuesto de Renta"));
    }

    #[test]
    fn test_category_listing() {
        let product: Vec<_> = Category::Product.kinds().collect();
        assert_eq!(
            product,
            vec![
                CalculationKind::PriceWithTax,
                CalculationKind::ProfitMargin,
                CalculationKind::BreakEvenPoint,
                CalculationKind::Roi,
            ]
        );
        assert_eq!(Category::Employer.kinds().count(), 4);
        assert_eq!(Category::Employee.kinds().count(), 6);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&CalculationKind::BreakEvenPoint).unwrap();
        assert_eq!(json, "\"break_even_point\"");
        let json = serde_json::to_string(&Category::Employer).unwrap();
        assert_eq!(json, "\"employer\"");
    }
}
