//! Product category classification.
//!
//! The fallback path selects personas and insights by matching the product
//! description against fixed keyword sets. The rule order is a documented
//! contract: rules are evaluated top to bottom and the first category with
//! any matching keyword wins, so a description mentioning both "recipe" and
//! "workout" classifies as Food, never Fitness.

use serde::{Deserialize, Serialize};

/// Product category derived from a free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Food,
    Fitness,
    Finance,
    Education,
    Travel,
    Shopping,
    /// Default when no keyword matches.
    General,
}

/// Prioritized keyword rules. Order is significant; do not reorder.
const CATEGORY_RULES: &[(ProductCategory, &[&str])] = &[
    (
        ProductCategory::Food,
        &[
            "recipe",
            "cook",
            "food",
            "meal",
            "kitchen",
            "chef",
            "baking",
            "ingredient",
        ],
    ),
    (
        ProductCategory::Fitness,
        &[
            "fitness", "workout", "exercise", "gym", "health", "wellness", "yoga",
        ],
    ),
    (
        ProductCategory::Finance,
        &["finance", "banking", "invest", "money", "budget", "saving"],
    ),
    (
        ProductCategory::Education,
        &[
            "learn",
            "course",
            "study",
            "teach",
            "school",
            "tutor",
            "education",
        ],
    ),
    (
        ProductCategory::Travel,
        &["travel", "trip", "flight", "hotel", "vacation", "itinerary"],
    ),
    (
        ProductCategory::Shopping,
        &[
            "shop",
            "store",
            "retail",
            "ecommerce",
            "marketplace",
            "cart",
        ],
    ),
];

impl ProductCategory {
    /// Classifies a product description.
    ///
    /// Matching is case-insensitive substring containment, identical for
    /// every rule. Deterministic: the same text always yields the same
    /// category.
    pub fn classify(product_description: &str) -> Self {
        let text = product_description.to_lowercase();

        for (category, keywords) in CATEGORY_RULES {
            if keywords.iter().any(|kw| text.contains(kw)) {
                return *category;
            }
        }

        ProductCategory::General
    }
}
