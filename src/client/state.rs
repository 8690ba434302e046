use thiserror::Error;

use crate::model::{PrepTime, RecipeRequest, RecipeResponse, RecipeType};

/// Why a submission was not sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("Please fill in the ingredients.")]
    MissingIngredients,

    #[error("A recipe is already being generated.")]
    InFlight,
}

/// Everything the recipe form shows at one point in time.
///
/// Each user action consumes the current state and returns the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub ingredients: String,
    pub prep_time: PrepTime,
    pub servings: u32,
    pub recipe_type: RecipeType,
    pub recipe: Option<RecipeResponse>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ingredients: String::new(),
            prep_time: PrepTime::Medium,
            servings: 2,
            recipe_type: RecipeType::Vegetarian,
            recipe: None,
            is_loading: false,
            error: None,
        }
    }
}

impl FormState {
    pub fn with_ingredients(self, ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            ..self
        }
    }

    pub fn with_prep_time(self, prep_time: PrepTime) -> Self {
        Self { prep_time, ..self }
    }

    /// Apply raw servings input; non-numeric text becomes 1 and values clamp to at least 1.
    pub fn with_servings_input(self, raw: &str) -> Self {
        Self {
            servings: parse_servings(raw),
            ..self
        }
    }

    pub fn select_vegetarian(self) -> Self {
        Self {
            recipe_type: RecipeType::Vegetarian,
            ..self
        }
    }

    pub fn select_non_vegetarian(self) -> Self {
        Self {
            recipe_type: RecipeType::NonVegetarian,
            ..self
        }
    }

    /// Start a submission: clears the previous outcome and marks the form as loading.
    pub fn begin_submit(self) -> Result<(Self, RecipeRequest), SubmitBlocked> {
        if self.is_loading {
            return Err(SubmitBlocked::InFlight);
        }
        if self.ingredients.trim().is_empty() {
            return Err(SubmitBlocked::MissingIngredients);
        }

        let request = RecipeRequest {
            ingredients: self.ingredients.clone(),
            prep_time: self.prep_time,
            servings: self.servings,
            recipe_type: self.recipe_type,
        };

        let next = Self {
            recipe: None,
            error: None,
            is_loading: true,
            ..self
        };

        Ok((next, request))
    }

    pub fn finish_success(self, recipe: RecipeResponse) -> Self {
        Self {
            recipe: Some(recipe),
            is_loading: false,
            ..self
        }
    }

    pub fn finish_failure(self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            is_loading: false,
            ..self
        }
    }
}

/// Leading integer of `raw` (like a number input), at least 1
fn parse_servings(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 1;
    }

    // Anything too large for u32 saturates.
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FormState::default();
        assert_eq!(state.ingredients, "");
        assert_eq!(state.prep_time, PrepTime::Medium);
        assert_eq!(state.servings, 2);
        assert_eq!(state.recipe_type, RecipeType::Vegetarian);
        assert!(state.recipe.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_servings_input() {
        assert_eq!(parse_servings("4"), 4);
        assert_eq!(parse_servings("4 people"), 4);
        assert_eq!(parse_servings("  12"), 12);
        assert_eq!(parse_servings("abc"), 1);
        assert_eq!(parse_servings(""), 1);
        assert_eq!(parse_servings("0"), 1);
        assert_eq!(parse_servings("-3"), 1);
        assert_eq!(parse_servings("+5"), 5);
        assert_eq!(parse_servings("99999999999"), u32::MAX);
    }

    #[test]
    fn test_recipe_type_selectors_are_exclusive() {
        let state = FormState::default().select_non_vegetarian();
        assert_eq!(state.recipe_type, RecipeType::NonVegetarian);

        let state = state.select_vegetarian();
        assert_eq!(state.recipe_type, RecipeType::Vegetarian);
    }

    #[test]
    fn test_submit_requires_ingredients() {
        let result = FormState::default().begin_submit();
        assert_eq!(result.unwrap_err(), SubmitBlocked::MissingIngredients);

        let result = FormState::default().with_ingredients("   ").begin_submit();
        assert_eq!(result.unwrap_err(), SubmitBlocked::MissingIngredients);
    }

    #[test]
    fn test_submit_builds_request_and_clears_outcome() {
        let state = FormState::default()
            .with_ingredients("rice, egg, onion")
            .with_prep_time(PrepTime::Quick)
            .with_servings_input("3")
            .select_non_vegetarian()
            .finish_failure("old error");

        let (state, request) = state.begin_submit().unwrap();

        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(state.recipe.is_none());
        assert_eq!(
            request,
            RecipeRequest {
                ingredients: "rice, egg, onion".to_string(),
                prep_time: PrepTime::Quick,
                servings: 3,
                recipe_type: RecipeType::NonVegetarian,
            }
        );
    }

    #[test]
    fn test_second_submit_while_loading_is_blocked() {
        let (state, _) = FormState::default()
            .with_ingredients("tofu")
            .begin_submit()
            .unwrap();

        assert_eq!(state.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
    }

    #[test]
    fn test_finish_success() {
        let (state, _) = FormState::default()
            .with_ingredients("tofu")
            .begin_submit()
            .unwrap();

        let recipe = RecipeResponse {
            title: Some("Crispy Tofu".to_string()),
            ..Default::default()
        };
        let state = state.finish_success(recipe.clone());

        assert!(!state.is_loading);
        assert_eq!(state.recipe, Some(recipe));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_finish_failure() {
        let (state, _) = FormState::default()
            .with_ingredients("tofu")
            .begin_submit()
            .unwrap();

        let state = state.finish_failure("Failed to parse recipe from AI response.");

        assert!(!state.is_loading);
        assert!(state.recipe.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to parse recipe from AI response.")
        );
    }
}
