use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{BiteError, Result};
use crate::models::reading::{coerce_value, lenient_f64};
use crate::models::NutritionReading;

/// Sentinel the vision model answers with when the photo is not food.
pub const REJECTION_SENTINEL: &str = "ERROR";

/// How sure the vision model is about its estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Unknown => "unknown",
        }
    }

    fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            "low" => Confidence::Low,
            _ => Confidence::Unknown,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde adapter: anything that is not a known label string is `Unknown`.
fn lenient_confidence<'de, D>(deserializer: D) -> std::result::Result<Confidence, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => Confidence::from_label(&label),
        _ => Confidence::Unknown,
    })
}

/// Serde adapter: `None` when the field is absent or `null`, else coerced.
fn lenient_opt_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value => Some(coerce_value(&value)),
    })
}

/// Structured meal estimate returned by the vision model.
///
/// Uses the model's field names (`estimatedCalories`, `fat`, `sugar`);
/// convert with [`VisionReport::to_reading`] before scoring. Models sometimes
/// answer with `calories` instead of, or next to, `estimatedCalories`; both
/// are kept and `estimatedCalories` wins when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionReport {
    #[serde(default)]
    pub food_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_f64", skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<f64>,

    #[serde(default, deserialize_with = "lenient_opt_f64", skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium: f64,

    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Confidence,

    #[serde(default)]
    pub notes: Option<String>,
}

impl VisionReport {
    /// Calorie estimate, preferring `estimatedCalories` over `calories`.
    pub fn calorie_estimate(&self) -> f64 {
        self.estimated_calories.or(self.calories).unwrap_or(0.0)
    }

    /// Map onto the analyzer's field names. Fiber is not part of a reading.
    pub fn to_reading(&self) -> NutritionReading {
        NutritionReading::new(
            self.calorie_estimate(),
            self.protein,
            self.carbs,
            self.sugar,
            self.fat,
            self.sodium,
        )
    }

    pub fn display_name(&self) -> &str {
        self.food_name.as_deref().unwrap_or("Meal")
    }
}

impl From<&VisionReport> for NutritionReading {
    fn from(report: &VisionReport) -> Self {
        report.to_reading()
    }
}

/// Slice from the first `{` to the last `}`, if any.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parse a raw vision-model answer into a [`VisionReport`].
///
/// Answers mentioning the rejection sentinel are refused. The JSON object may
/// be wrapped in prose or code fences.
pub fn parse_vision_response(raw: &str) -> Result<VisionReport> {
    let text = raw.trim();

    if text.contains(REJECTION_SENTINEL) {
        warn!("vision model rejected the image");
        return Err(BiteError::RejectedImage);
    }

    let json = extract_json_object(text).ok_or_else(|| {
        warn!(len = text.len(), "vision response has no JSON object");
        BiteError::NoJsonPayload
    })?;

    let report: VisionReport = serde_json::from_str(json)?;
    debug!(
        food = report.display_name(),
        confidence = %report.confidence,
        "parsed vision report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_sentinel() {
        assert!(matches!(parse_vision_response("ERROR"), Err(BiteError::RejectedImage)));
        assert!(matches!(parse_vision_response(" ERROR"), Err(BiteError::RejectedImage)));
    }

    #[test]
    fn test_no_json() {
        assert!(matches!(
            parse_vision_response("I think this is a salad."),
            Err(BiteError::NoJsonPayload)
        ));
        assert!(matches!(parse_vision_response("} {"), Err(BiteError::NoJsonPayload)));
    }

    #[test]
    fn test_fenced_response() {
        let raw = "Here you go:\n```json\n{\n  \"foodName\": \"Margherita Pizza\",\n  \"estimatedCalories\": 720,\n  \"protein\": 28,\n  \"carbs\": 80,\n  \"fat\": 30,\n  \"fiber\": 4,\n  \"sugar\": 9,\n  \"sodium\": 1400,\n  \"confidence\": \"medium\",\n  \"notes\": \"Two slices\"\n}\n```";
        let report = parse_vision_response(raw).unwrap();

        assert_eq!(report.display_name(), "Margherita Pizza");
        assert_eq!(report.confidence, Confidence::Medium);
        assert_eq!(report.fiber, 4.0);

        let reading = report.to_reading();
        assert_eq!(reading.calories, 720.0);
        assert_eq!(reading.fats, 30.0);
        assert_eq!(reading.sugars, 9.0);
        assert_eq!(reading.sodium, 1400.0);
    }

    #[test]
    fn test_lenient_fields_and_calories_fallback() {
        let report = parse_vision_response(
            r#"{"calories": "350 kcal", "protein": "n/a", "confidence": "certain"}"#,
        )
        .unwrap();

        assert_eq!(report.estimated_calories, None);
        assert_eq!(report.calorie_estimate(), 350.0);
        assert_eq!(report.protein, 0.0);
        assert_eq!(report.confidence, Confidence::Unknown);
        assert_eq!(report.display_name(), "Meal");
    }

    #[test]
    fn test_null_confidence_is_unknown() {
        let report = parse_vision_response(
            r#"{"foodName": "Toast", "estimatedCalories": 120, "confidence": null}"#,
        )
        .unwrap();
        assert_eq!(report.confidence, Confidence::Unknown);
        assert_eq!(report.calorie_estimate(), 120.0);

        let report = parse_vision_response(r#"{"confidence": 3}"#).unwrap();
        assert_eq!(report.confidence, Confidence::Unknown);

        let report = parse_vision_response(r#"{"confidence": " High "}"#).unwrap();
        assert_eq!(report.confidence, Confidence::High);
    }

    #[test]
    fn test_both_calorie_fields_prefer_estimate() {
        let report = parse_vision_response(
            r#"{"estimatedCalories": 700, "calories": 650, "sodium": 500}"#,
        )
        .unwrap();
        assert_eq!(report.to_reading().calories, 700.0);

        // An explicit zero estimate still wins over the fallback field.
        let report = parse_vision_response(r#"{"estimatedCalories": 0, "calories": 650}"#).unwrap();
        assert_eq!(report.calorie_estimate(), 0.0);

        let report = parse_vision_response(r#"{"estimatedCalories": null, "calories": "650 kcal"}"#).unwrap();
        assert_eq!(report.calorie_estimate(), 650.0);
    }

    #[test]
    fn test_confidence_displays_wire_value() {
        assert_eq!(Confidence::Medium.to_string(), "medium");
        assert_eq!(Confidence::Unknown.to_string(), "unknown");
        assert_eq!(
            serde_json::to_value(Confidence::High).unwrap(),
            serde_json::json!(Confidence::High.to_string())
        );
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            parse_vision_response("{\"foodName\": }"),
            Err(BiteError::Json(_))
        ));
    }
}
