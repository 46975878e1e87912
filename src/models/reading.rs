use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Nutrient quantities for one meal or one day.
///
/// Every field is lenient on input: absent, `null`, non-numeric or unparsable
/// values become `0.0`, so deserialising a reading never fails on a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionReading {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,

    /// Grams.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,

    /// Grams.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,

    /// Grams.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugars: f64,

    /// Grams.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fats: f64,

    /// Milligrams.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium: f64,
}

impl NutritionReading {
    pub fn new(calories: f64, protein: f64, carbs: f64, sugars: f64, fats: f64, sodium: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            sugars,
            fats,
            sodium,
        }
        .sanitized()
    }

    /// The all-zero reading.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Parse a reading from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy with every field forced finite and non-negative.
    ///
    /// Positive infinity (e.g. from summing huge entries) saturates to
    /// `f64::MAX` so it still trips every upper threshold.
    ///
    /// Readings built in code bypass the lenient deserialiser, so the
    /// analyzer runs this before looking at any threshold.
    pub fn sanitized(&self) -> Self {
        Self {
            calories: sanitize(self.calories),
            protein: sanitize(self.protein),
            carbs: sanitize(self.carbs),
            sugars: sanitize(self.sugars),
            fats: sanitize(self.fats),
            sodium: sanitize(self.sodium),
        }
    }

    /// Protein + carbs + fats, in grams.
    #[inline]
    pub fn total_macros(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }
}

impl std::ops::Add for NutritionReading {
    type Output = NutritionReading;

    fn add(self, other: NutritionReading) -> NutritionReading {
        NutritionReading {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            sugars: self.sugars + other.sugars,
            fats: self.fats + other.fats,
            sodium: self.sodium + other.sodium,
        }
    }
}

impl std::iter::Sum for NutritionReading {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionReading::zero(), |acc, r| acc + r)
    }
}

/// NaN and anything at or below zero become 0; positive overflow saturates.
fn sanitize(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else {
        value.min(f64::MAX)
    }
}

/// Serde adapter: accept any JSON value and coerce it to a nutrient amount.
pub fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

/// Best-effort numeric coercion of a JSON value.
///
/// Numbers pass through, strings go through [`parse_leading_f64`], anything
/// else is `0.0`. The result is always finite and non-negative.
pub fn coerce_value(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_f64(s),
        _ => 0.0,
    };
    sanitize(raw)
}

/// Parse the longest leading decimal literal of `text`.
///
/// `"12.5g"` is 12.5, `"  7 "` is 7, `"abc"` and `""` are 0.
pub fn parse_leading_f64(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits + (frac_end - frac_start) > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
