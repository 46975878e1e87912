use std::fmt;

use serde::{Deserialize, Serialize};

use crate::insights::constants::{
    GRADE_A_MESSAGE, GRADE_A_MIN_SCORE, GRADE_B_MESSAGE, GRADE_B_MIN_SCORE, GRADE_C_MESSAGE,
    GRADE_C_MIN_SCORE, GRADE_D_MESSAGE, REC_ADD_PROTEIN, REC_LOWER_SUGAR, REC_REDUCE_SODIUM,
};

/// Letter bucket for a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthGrade {
    A,
    B,
    C,
    D,
}

impl HealthGrade {
    /// Map a score onto its grade (>=90 A, >=80 B, >=70 C, else D).
    pub fn from_score(score: i32) -> Self {
        if score >= GRADE_A_MIN_SCORE {
            HealthGrade::A
        } else if score >= GRADE_B_MIN_SCORE {
            HealthGrade::B
        } else if score >= GRADE_C_MIN_SCORE {
            HealthGrade::C
        } else {
            HealthGrade::D
        }
    }

    /// The fixed sentence shown alongside the grade.
    pub fn message(self) -> &'static str {
        match self {
            HealthGrade::A => GRADE_A_MESSAGE,
            HealthGrade::B => GRADE_B_MESSAGE,
            HealthGrade::C => GRADE_C_MESSAGE,
            HealthGrade::D => GRADE_D_MESSAGE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthGrade::A => "A",
            HealthGrade::B => "B",
            HealthGrade::C => "C",
            HealthGrade::D => "D",
        }
    }
}

impl fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nutrient value past an unhealthy-direction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Concern {
    #[serde(rename = "High Sodium")]
    HighSodium,
    #[serde(rename = "High Sugar")]
    HighSugar,
    #[serde(rename = "Very High Calories")]
    VeryHighCalories,
}

impl Concern {
    pub fn label(self) -> &'static str {
        match self {
            Concern::HighSodium => "High Sodium",
            Concern::HighSugar => "High Sugar",
            Concern::VeryHighCalories => "Very High Calories",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A nutrient value past a healthy-direction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Positive {
    #[serde(rename = "Low Sodium")]
    LowSodium,
    #[serde(rename = "Good Protein Source")]
    GoodProteinSource,
}

impl Positive {
    pub fn label(self) -> &'static str {
        match self {
            Positive::LowSodium => "Low Sodium",
            Positive::GoodProteinSource => "Good Protein Source",
        }
    }
}

impl fmt::Display for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reason code behind a recommendation sentence.
///
/// Serialises as the sentence itself, so JSON consumers see a list of
/// strings while Rust callers switch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Recommendation {
    ReduceSodium,
    LowerSugar,
    AddProtein,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] = [
        Recommendation::ReduceSodium,
        Recommendation::LowerSugar,
        Recommendation::AddProtein,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Recommendation::ReduceSodium => REC_REDUCE_SODIUM,
            Recommendation::LowerSugar => REC_LOWER_SUGAR,
            Recommendation::AddProtein => REC_ADD_PROTEIN,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<Recommendation> for String {
    fn from(rec: Recommendation) -> Self {
        rec.text().to_string()
    }
}

impl TryFrom<String> for Recommendation {
    type Error = String;

    fn try_from(text: String) -> std::result::Result<Self, Self::Error> {
        Recommendation::ALL
            .into_iter()
            .find(|rec| rec.text() == text)
            .ok_or_else(|| format!("unknown recommendation: {}", text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Concern,
    Positive,
    Suggestion,
    Info,
}

/// Human-readable explanation attached to one fired rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Insight {
    pub fn new(kind: InsightKind, title: &str, message: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
            tip: None,
        }
    }

    pub fn with_tip(mut self, tip: &str) -> Self {
        self.tip = Some(tip.to_string());
        self
    }
}

/// Share of each macronutrient in protein + carbs + fats, rounded to whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroRatios {
    pub protein_percent: u32,
    pub carb_percent: u32,
    pub fat_percent: u32,
}

/// Result of scoring one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    /// 0..=100.
    pub health_score: i32,
    pub health_grade: HealthGrade,
    pub overall_message: String,
    pub concerns: Vec<Concern>,
    pub positives: Vec<Positive>,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_ratios: Option<MacroRatios>,
}

impl NutritionAnalysis {
    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }

    pub fn has_positive(&self, positive: Positive) -> bool {
        self.positives.contains(&positive)
    }

    pub fn recommends(&self, rec: Recommendation) -> bool {
        self.recommendations.contains(&rec)
    }

    /// First insight with the given title, if any.
    pub fn insight(&self, title: &str) -> Option<&Insight> {
        self.insights.iter().find(|i| i.title == title)
    }
}
