// ─────────────────────────────────────────────────────────────────────────────
// Rule thresholds (per serving). All comparisons are strict.
// ─────────────────────────────────────────────────────────────────────────────

/// Sodium (mg) above which a meal is flagged "High Sodium".
pub const HIGH_SODIUM_MG: f64 = 400.0;

/// Sodium (mg) below which a meal counts as "Low Sodium".
pub const LOW_SODIUM_MG: f64 = 140.0;

/// Sugars (g) above which a meal is flagged "High Sugar".
pub const HIGH_SUGAR_G: f64 = 15.0;

/// Calories above which the "Calorie Dense" info insight is added.
pub const CALORIE_DENSE_KCAL: f64 = 400.0;

/// Calories above which a meal is flagged "Very High Calories".
pub const VERY_HIGH_CALORIES_KCAL: f64 = 600.0;

/// Calories below which the "Light Meal" info insight is added.
pub const LIGHT_MEAL_KCAL: f64 = 200.0;

/// Protein (g) above which a meal is a "Good Protein Source".
pub const GOOD_PROTEIN_G: f64 = 15.0;

/// Protein (g) below which adding protein is recommended.
pub const LOW_PROTEIN_G: f64 = 5.0;

/// Fats (g) above which the "Fat Content" info insight is added.
pub const HIGH_FAT_G: f64 = 15.0;

/// Protein share of macros (percent) that earns "Well-Balanced Protein".
pub const BALANCED_PROTEIN_PERCENT: u32 = 25;

/// Sugars (g) below which the low-sugar fact is relevant.
pub const LOW_SUGAR_FACT_G: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

pub const MAX_HEALTH_SCORE: i32 = 100;
pub const MIN_HEALTH_SCORE: i32 = 0;

pub const HIGH_SODIUM_PENALTY: i32 = 20;
pub const HIGH_SUGAR_PENALTY: i32 = 15;
pub const VERY_HIGH_CALORIES_PENALTY: i32 = 10;

pub const GRADE_A_MIN_SCORE: i32 = 90;
pub const GRADE_B_MIN_SCORE: i32 = 80;
pub const GRADE_C_MIN_SCORE: i32 = 70;

pub const GRADE_A_MESSAGE: &str = "Excellent nutritional choice!";
pub const GRADE_B_MESSAGE: &str = "Good nutritional choice with room for improvement.";
pub const GRADE_C_MESSAGE: &str = "Decent choice, but consider healthier alternatives.";
pub const GRADE_D_MESSAGE: &str = "Consider choosing a healthier alternative.";

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation sentences
// ─────────────────────────────────────────────────────────────────────────────

pub const REC_REDUCE_SODIUM: &str =
    "Consider choosing low-sodium alternatives or reducing portion size";
pub const REC_LOWER_SUGAR: &str =
    "Look for alternatives with natural sugars or reduce portion size";
pub const REC_ADD_PROTEIN: &str =
    "Consider adding a protein source like nuts, beans, or lean meat";

// ─────────────────────────────────────────────────────────────────────────────
// Insight titles and fixed text
// ─────────────────────────────────────────────────────────────────────────────

pub const TITLE_HIGH_SODIUM: &str = "High Sodium Alert";
pub const TITLE_LOW_SODIUM: &str = "Heart-Healthy Choice";
pub const TITLE_HIGH_SUGAR: &str = "Sugar Watch";
pub const TITLE_CALORIE_DENSE: &str = "Calorie Dense";
pub const TITLE_LIGHT_MEAL: &str = "Light Meal";
pub const TITLE_GOOD_PROTEIN: &str = "Protein Power";
pub const TITLE_LOW_PROTEIN: &str = "Boost Your Protein";
pub const TITLE_FAT_CONTENT: &str = "Fat Content";
pub const TITLE_BALANCED_PROTEIN: &str = "Well-Balanced Protein";

pub const TIP_HIGH_SODIUM: &str = "Try using herbs and spices instead of salt for flavoring.";
pub const TIP_HIGH_SUGAR: &str = "Choose fruits over processed sweets for natural sweetness.";
pub const TIP_LOW_PROTEIN: &str =
    "Try adding Greek yogurt, nuts, or beans to increase protein content.";

pub const MSG_LOW_SODIUM: &str = "This meal is low in sodium, which is great for heart health!";
pub const MSG_LIGHT_MEAL: &str =
    "This is a light meal. Consider adding protein or healthy fats for more satiety.";
pub const MSG_LOW_PROTEIN: &str =
    "This meal is low in protein. Adding protein can help you feel full longer.";

// ─────────────────────────────────────────────────────────────────────────────
// Alternative suggestion tables
// ─────────────────────────────────────────────────────────────────────────────

/// Static text for one alternative suggestion.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionText {
    pub title: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
}

pub const CATEGORY_LOW_SODIUM: &str = "Low Sodium";
pub const CATEGORY_LOWER_SUGAR: &str = "Lower Sugar";
pub const CATEGORY_CALORIE_CONSCIOUS: &str = "Calorie Conscious";
pub const CATEGORY_PROTEIN_BOOST: &str = "Protein Boost";

pub static LOW_SODIUM_SUGGESTIONS: [SuggestionText; 3] = [
    SuggestionText {
        title: "Use herbs and spices",
        description: "Replace salt with garlic, herbs, lemon juice, or vinegar for flavor",
        benefit: "Reduces sodium by up to 300mg per serving",
    },
    SuggestionText {
        title: "Choose fresh over processed",
        description: "Opt for fresh vegetables instead of canned or pickled ones",
        benefit: "Can reduce sodium by 200-400mg",
    },
    SuggestionText {
        title: "Rinse canned foods",
        description: "Rinse canned beans or vegetables to remove excess sodium",
        benefit: "Reduces sodium by up to 40%",
    },
];

pub static LOWER_SUGAR_SUGGESTIONS: [SuggestionText; 3] = [
    SuggestionText {
        title: "Add fiber",
        description: "Include more vegetables or whole grains to slow sugar absorption",
        benefit: "Helps stabilize blood sugar levels",
    },
    SuggestionText {
        title: "Natural sweeteners",
        description: "Use fruits like berries or dates instead of added sugars",
        benefit: "Provides antioxidants along with natural sweetness",
    },
    SuggestionText {
        title: "Portion control",
        description: "Enjoy a smaller portion and add protein or healthy fats",
        benefit: "Reduces sugar intake while maintaining satisfaction",
    },
];

pub static CALORIE_CONSCIOUS_SUGGESTIONS: [SuggestionText; 2] = [
    SuggestionText {
        title: "Bulk up with vegetables",
        description: "Add more non-starchy vegetables to increase volume with fewer calories",
        benefit: "Maintains portion size while reducing calories by 100-200",
    },
    SuggestionText {
        title: "Cooking method swap",
        description: "Try grilling, steaming, or baking instead of frying",
        benefit: "Can reduce calories by 150-300 per serving",
    },
];

pub static PROTEIN_BOOST_SUGGESTIONS: [SuggestionText; 3] = [
    SuggestionText {
        title: "Add Greek yogurt",
        description: "Include a side of Greek yogurt or use it as a topping",
        benefit: "Adds 15-20g of protein",
    },
    SuggestionText {
        title: "Sprinkle nuts or seeds",
        description: "Top your meal with almonds, walnuts, or chia seeds",
        benefit: "Adds 5-10g of protein plus healthy fats",
    },
    SuggestionText {
        title: "Include legumes",
        description: "Add beans, lentils, or chickpeas to your meal",
        benefit: "Adds 10-15g of protein plus fiber",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Educational facts
// ─────────────────────────────────────────────────────────────────────────────

/// Number of facts handed out per reading.
pub const FACTS_PER_READING: usize = 3;

/// Generic pool used to pad the relevant facts.
pub static GENERIC_FACTS: [&str; 6] = [
    "Did you know? Protein helps you feel full longer because it takes more energy to digest than carbs or fats.",
    "Did you know? The average American consumes 3,400mg of sodium daily - 50% more than recommended!",
    "Did you know? Fiber from vegetables helps slow sugar absorption, preventing blood sugar spikes.",
    "Did you know? Eating colorful foods ensures you get a variety of antioxidants and nutrients.",
    "Did you know? Healthy fats from nuts, avocados, and fish are essential for brain function.",
    "Did you know? Your taste buds adapt to less salt within 2-3 weeks of reducing sodium intake.",
];

pub const FACT_HIGH_PROTEIN: &str = "Did you know? This meal's high protein content will help maintain stable blood sugar and keep you satisfied longer!";
pub const FACT_HIGH_SODIUM: &str = "Did you know? Reducing sodium intake by just 400mg daily can significantly lower blood pressure in many people.";
pub const FACT_LOW_SUGAR: &str = "Did you know? Keeping sugar intake low like this meal helps maintain steady energy levels throughout the day!";
