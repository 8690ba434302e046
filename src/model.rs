use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary preference of a recipe request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecipeType {
    #[default]
    #[serde(rename = "veg")]
    Vegetarian,
    #[serde(rename = "non-veg")]
    NonVegetarian,
}

impl RecipeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::Vegetarian => "veg",
            RecipeType::NonVegetarian => "non-veg",
        }
    }
}

impl FromStr for RecipeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(RecipeType::Vegetarian),
            "non-veg" => Ok(RecipeType::NonVegetarian),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred total preparation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepTime {
    /// Under 30 minutes
    Quick,
    /// 30 to 60 minutes
    #[default]
    Medium,
    /// Over 60 minutes
    Long,
}

impl PrepTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrepTime::Quick => "quick",
            PrepTime::Medium => "medium",
            PrepTime::Long => "long",
        }
    }
}

impl fmt::Display for PrepTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints sent by the client to `POST /api/generate-recipe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub ingredients: String,
    pub prep_time: PrepTime,
    pub servings: u32,
    pub recipe_type: RecipeType,
}

/// A recipe as produced by the generation provider.
///
/// Every field is optional: the server forwards whatever the provider emitted,
/// and placeholders are applied only when rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prep_time_actual: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub servings_actual: Option<u32>,
    #[serde(default)]
    pub ingredients_list: Vec<IngredientLine>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientLine {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Estimated nutrition per serving
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub carbs: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
}

// Models sometimes quote numbers, so accept "4" as well as 4.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => Some(n),
        Some(Count::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
