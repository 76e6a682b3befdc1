//! Unit conversion engine
//!
//! Table-driven: each category declares a constant table mapping unit
//! symbols to their multiplier against the category's base unit (meter for
//! length, gram for weight). Conversion is `amount * table[from] /
//! table[to]`, so adding a category means adding a table - the conversion
//! function itself never changes.

use std::fmt;

use crate::error::{ToolboxError, ToolboxResult};

/// Multipliers against the meter
const LENGTH_TABLE: &[(&str, f64)] = &[
    ("m", 1.0),
    ("km", 1000.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("ft", 0.3048),
    ("in", 0.0254),
    ("mi", 1609.34),
];

/// Multipliers against the gram
const WEIGHT_TABLE: &[(&str, f64)] = &[
    ("g", 1.0),
    ("kg", 1000.0),
    ("mg", 0.001),
    ("lb", 453.592),
    ("oz", 28.3495),
];

/// A conversion category with its own unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Weight,
}

impl UnitCategory {
    /// All categories, for listings
    pub const ALL: &'static [UnitCategory] = &[UnitCategory::Length, UnitCategory::Weight];

    /// Parse a category name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "length" => Some(Self::Length),
            "weight" => Some(Self::Weight),
            _ => None,
        }
    }

    /// Stable lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
        }
    }

    /// The symbol -> base-unit-multiplier table for this category
    fn table(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Length => LENGTH_TABLE,
            Self::Weight => WEIGHT_TABLE,
        }
    }

    /// Unit symbols registered in this category
    pub fn unit_symbols(&self) -> impl Iterator<Item = &'static str> {
        self.table().iter().map(|(sym, _)| *sym)
    }

    /// Multiplier for a symbol against this category's base unit
    fn multiplier(&self, symbol: &str) -> ToolboxResult<f64> {
        self.table()
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|(_, mult)| *mult)
            .ok_or_else(|| ToolboxError::UnknownUnit {
                symbol: symbol.to_string(),
                category: self.name(),
            })
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert an amount between two units of the same category.
///
/// Both symbols are validated against the category table before any
/// arithmetic, so a cross-category pair or a typo is rejected rather than
/// silently producing NaN.
///
/// # Errors
///
/// [`ToolboxError::InvalidInput`] for a non-finite amount,
/// [`ToolboxError::UnknownUnit`] for a symbol outside the category.
pub fn convert(amount: f64, from: &str, to: &str, category: UnitCategory) -> ToolboxResult<f64> {
    if !amount.is_finite() {
        return Err(ToolboxError::InvalidInput(
            "conversion amount must be a finite number".into(),
        ));
    }

    let from_mult = category.multiplier(from)?;
    let to_mult = category.multiplier(to)?;

    Ok(amount * from_mult / to_mult)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_length_conversions() {
        assert!((convert(1.0, "km", "m", UnitCategory::Length).unwrap() - 1000.0).abs() < EPS);
        assert!((convert(12.0, "in", "ft", UnitCategory::Length).unwrap() - 1.0).abs() < EPS);
        assert!((convert(1.0, "mi", "km", UnitCategory::Length).unwrap() - 1.60934).abs() < 1e-6);
    }

    #[test]
    fn test_weight_conversions() {
        assert!((convert(2.0, "kg", "g", UnitCategory::Weight).unwrap() - 2000.0).abs() < EPS);
        assert!((convert(1.0, "lb", "oz", UnitCategory::Weight).unwrap() - 16.0).abs() < 1e-3);
    }

    #[test]
    fn test_identity_conversion() {
        for category in UnitCategory::ALL {
            for sym in category.unit_symbols() {
                let converted = convert(3.25, sym, sym, *category).unwrap();
                assert!((converted - 3.25).abs() < EPS, "{} identity failed", sym);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for category in UnitCategory::ALL {
            let symbols: Vec<_> = category.unit_symbols().collect();
            for a in &symbols {
                for b in &symbols {
                    let there = convert(7.5, a, b, *category).unwrap();
                    let back = convert(there, b, a, *category).unwrap();
                    assert!(
                        (back - 7.5).abs() < 1e-9 * 7.5,
                        "{} -> {} -> {} drifted",
                        a,
                        b,
                        a
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_rejected_before_lookup() {
        let err = convert(1.0, "kg", "m", UnitCategory::Length).unwrap_err();
        assert!(matches!(err, ToolboxError::UnknownUnit { .. }));

        let err = convert(1.0, "m", "furlong", UnitCategory::Length).unwrap_err();
        assert!(matches!(err, ToolboxError::UnknownUnit { .. }));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert!(convert(f64::NAN, "m", "km", UnitCategory::Length).is_err());
        assert!(convert(f64::INFINITY, "g", "kg", UnitCategory::Weight).is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(UnitCategory::parse("Length"), Some(UnitCategory::Length));
        assert_eq!(UnitCategory::parse("WEIGHT"), Some(UnitCategory::Weight));
        assert_eq!(UnitCategory::parse("volume"), None);
    }
}
