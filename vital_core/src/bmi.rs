//! Body-mass index classification.

use crate::{BmiCategory, Error, Result};

/// Reject non-positive or non-finite weight/height.
pub fn validate_anthropometrics(weight_kg: f64, height_cm: f64) -> Result<()> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(Error::InvalidAnthropometrics {
            weight_kg,
            height_cm,
        });
    }
    Ok(())
}

/// Compute BMI and its category from weight (kg) and height (cm).
///
/// Thresholds: < 18.5 Underweight, < 25 Normal, else Overweight.
/// Overweight absorbs everything at or above 25; there is no Obese
/// tier (deliberate simplification, see `BmiCategory`).
pub fn classify(weight_kg: f64, height_cm: f64) -> Result<(f64, BmiCategory)> {
    validate_anthropometrics(weight_kg, height_cm)?;

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else {
        BmiCategory::Overweight
    };

    Ok((bmi, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        let (bmi, category) = classify(70.0, 175.0).unwrap();
        assert!((bmi - 22.857).abs() < 0.01);
        assert_eq!(category, BmiCategory::Normal);
    }

    #[test]
    fn test_underweight() {
        let (_, category) = classify(45.0, 175.0).unwrap();
        assert_eq!(category, BmiCategory::Underweight);
    }

    #[test]
    fn test_overweight_absorbs_everything_above() {
        let (_, category) = classify(120.0, 175.0).unwrap();
        assert_eq!(category, BmiCategory::Overweight);
    }

    #[test]
    fn test_exact_lower_boundary_is_normal() {
        // weight chosen so bmi is exactly 18.5 at 2 m
        let (bmi, category) = classify(18.5 * 4.0, 200.0).unwrap();
        assert_eq!(bmi, 18.5);
        assert_eq!(category, BmiCategory::Normal);
    }

    #[test]
    fn test_exact_upper_boundary_is_overweight() {
        let (bmi, category) = classify(25.0 * 4.0, 200.0).unwrap();
        assert_eq!(bmi, 25.0);
        assert_eq!(category, BmiCategory::Overweight);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(classify(0.0, 175.0).is_err());
        assert!(classify(70.0, 0.0).is_err());
        assert!(classify(-70.0, 175.0).is_err());
        assert!(classify(f64::NAN, 175.0).is_err());
    }
}
