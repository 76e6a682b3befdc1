//! Body mass index calculator
//!
//! BMI from metric inputs, with an imperial-to-metric helper using fixed
//! conversion constants.

use serde::Serialize;
use std::fmt;

use crate::error::{ToolboxError, ToolboxResult};

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453592;

/// WHO-style BMI classification.
/// Boundaries are inclusive below, exclusive above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    fn classify(value: f64) -> Self {
        if value < 18.5 {
            Self::Underweight
        } else if value < 25.0 {
            Self::Normal
        } else if value < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal weight"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

/// A computed BMI value with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    /// weight / height², unrounded
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    /// BMI rounded to one decimal, as conventionally displayed
    pub fn rounded(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }
}

/// Compute BMI from metric measurements.
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] unless both height and weight
/// are positive finite numbers.
pub fn bmi(height_m: f64, weight_kg: f64) -> ToolboxResult<BmiReading> {
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(ToolboxError::InvalidInput(
            "height must be a positive number of meters".into(),
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ToolboxError::InvalidInput(
            "weight must be a positive number of kilograms".into(),
        ));
    }

    let value = weight_kg / (height_m * height_m);
    Ok(BmiReading {
        value,
        category: BmiCategory::classify(value),
    })
}

/// Convert imperial measurements to (meters, kilograms)
pub fn imperial_to_metric(feet: f64, inches: f64, pounds: f64) -> (f64, f64) {
    let total_inches = feet * 12.0 + inches;
    (total_inches * METERS_PER_INCH, pounds * KG_PER_POUND)
}
