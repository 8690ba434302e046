use std::fmt;

use crate::client::state::FormState;
use crate::model::{RecipeResponse, RecipeType};

pub const SUBMIT_LABEL: &str = "Generate Recipe";
pub const SUBMIT_LABEL_LOADING: &str = "Generating Recipe...";
pub const LOADING_MESSAGE: &str = "AI is crafting your recipe...";
pub const TITLE_PLACEHOLDER: &str = "Your Generated Recipe";
pub const DESCRIPTION_PLACEHOLDER: &str = "Enjoy your custom-made dish!";
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// What the form displays for one state
#[derive(Debug, Clone, PartialEq)]
pub struct Screen<'a> {
    pub recipe_type: RecipeType,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub loading_message: Option<&'static str>,
    pub error: Option<&'a str>,
    pub recipe: Option<&'a RecipeResponse>,
}

impl<'a> From<&'a FormState> for Screen<'a> {
    fn from(state: &'a FormState) -> Self {
        let (submit_label, loading_message) = if state.is_loading {
            (SUBMIT_LABEL_LOADING, Some(LOADING_MESSAGE))
        } else {
            (SUBMIT_LABEL, None)
        };

        let error = state.error.as_deref();

        Screen {
            recipe_type: state.recipe_type,
            submit_label,
            submit_disabled: state.is_loading,
            loading_message,
            error,
            // An error hides any recipe.
            recipe: state.recipe.as_ref().filter(|_| error.is_none()),
        }
    }
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (veg, non_veg) = match self.recipe_type {
            RecipeType::Vegetarian => ("[x]", "[ ]"),
            RecipeType::NonVegetarian => ("[ ]", "[x]"),
        };
        writeln!(f, "Recipe Type: {veg} Veg  {non_veg} Non-Veg")?;

        if self.submit_disabled {
            writeln!(f, "<{}> (disabled)", self.submit_label)?;
        } else {
            writeln!(f, "<{}>", self.submit_label)?;
        }

        if let Some(loading) = self.loading_message {
            writeln!(f, "{loading}")?;
        }

        if let Some(error) = self.error {
            writeln!(f, "Error: {error}")?;
        }

        if let Some(recipe) = self.recipe {
            write_recipe(f, recipe)?;
        }

        Ok(())
    }
}

fn write_recipe(f: &mut fmt::Formatter<'_>, recipe: &RecipeResponse) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", or_placeholder(&recipe.title, TITLE_PLACEHOLDER))?;
    writeln!(
        f,
        "{}",
        or_placeholder(&recipe.description, DESCRIPTION_PLACEHOLDER)
    )?;

    let servings = recipe
        .servings_actual
        .filter(|&n| n > 0)
        .map(|n| n.to_string())
        .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string());
    writeln!(
        f,
        "Prep Time: {} | Servings: {}",
        or_placeholder(&recipe.prep_time_actual, FIELD_PLACEHOLDER),
        servings
    )?;

    if !recipe.ingredients_list.is_empty() {
        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for line in &recipe.ingredients_list {
            writeln!(
                f,
                "  - {}: {}",
                or_placeholder(&line.item, FIELD_PLACEHOLDER),
                or_placeholder(&line.quantity, FIELD_PLACEHOLDER)
            )?;
        }
    }

    if !recipe.instructions.is_empty() {
        writeln!(f)?;
        writeln!(f, "Instructions:")?;
        for (index, step) in recipe.instructions.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, step)?;
        }
    }

    if let Some(nutrition) = &recipe.nutrition {
        writeln!(f)?;
        writeln!(f, "Nutrition (Approx. per serving):")?;
        writeln!(
            f,
            "  Calories: {}",
            or_placeholder(&nutrition.calories, FIELD_PLACEHOLDER)
        )?;
        writeln!(
            f,
            "  Protein: {}",
            or_placeholder(&nutrition.protein, FIELD_PLACEHOLDER)
        )?;
        writeln!(
            f,
            "  Carbohydrates: {}",
            or_placeholder(&nutrition.carbs, FIELD_PLACEHOLDER)
        )?;
        writeln!(
            f,
            "  Fat: {}",
            or_placeholder(&nutrition.fat, FIELD_PLACEHOLDER)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientLine, Nutrition};

    fn loaded(recipe: RecipeResponse) -> FormState {
        let (state, _) = FormState::default()
            .with_ingredients("rice")
            .begin_submit()
            .unwrap();
        state.finish_success(recipe)
    }

    #[test]
    fn test_idle_screen() {
        let state = FormState::default();
        let screen = Screen::from(&state);

        assert_eq!(screen.submit_label, SUBMIT_LABEL);
        assert!(!screen.submit_disabled);
        assert!(screen.loading_message.is_none());
        assert!(screen.recipe.is_none());

        let text = screen.to_string();
        assert!(text.contains("[x] Veg"));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_loading_screen() {
        let (state, _) = FormState::default()
            .with_ingredients("rice")
            .begin_submit()
            .unwrap();
        let screen = Screen::from(&state);

        assert!(screen.submit_disabled);
        assert_eq!(screen.submit_label, SUBMIT_LABEL_LOADING);

        let text = screen.to_string();
        assert!(text.contains(LOADING_MESSAGE));
        assert!(text.contains("(disabled)"));
    }

    #[test]
    fn test_error_suppresses_recipe() {
        let state = FormState {
            recipe: Some(RecipeResponse {
                title: Some("Fried Rice".to_string()),
                ..Default::default()
            }),
            error: Some("Something broke".to_string()),
            ..Default::default()
        };
        let screen = Screen::from(&state);

        assert!(screen.recipe.is_none());
        let text = screen.to_string();
        assert!(text.contains("Error: Something broke"));
        assert!(!text.contains("Fried Rice"));
    }

    #[test]
    fn test_full_recipe() {
        let state = loaded(RecipeResponse {
            title: Some("Egg Fried Rice".to_string()),
            description: Some("Savory and quick.".to_string()),
            prep_time_actual: Some("Approx. 20 minutes".to_string()),
            servings_actual: Some(2),
            ingredients_list: vec![IngredientLine {
                item: Some("Rice".to_string()),
                quantity: Some("2 cups".to_string()),
            }],
            instructions: vec![
                "Cook the rice.".to_string(),
                "Fry with egg and onion.".to_string(),
            ],
            nutrition: Some(Nutrition {
                calories: Some("Approx. 450 kcal per serving".to_string()),
                protein: None,
                carbs: Some("Approx. 70 g per serving".to_string()),
                fat: Some("Approx. 10 g per serving".to_string()),
            }),
        });
        let text = Screen::from(&state).to_string();

        assert!(text.contains("Egg Fried Rice"));
        assert!(text.contains("Savory and quick."));
        assert!(text.contains("Prep Time: Approx. 20 minutes | Servings: 2"));
        assert!(text.contains("  - Rice: 2 cups"));
        assert!(text.contains("  1. Cook the rice."));
        assert!(text.contains("  2. Fry with egg and onion."));
        assert!(text.contains("Calories: Approx. 450 kcal per serving"));
        assert!(text.contains("Protein: N/A"));
    }

    #[test]
    fn test_empty_recipe_uses_placeholders_and_omits_sections() {
        let state = loaded(RecipeResponse::default());
        let text = Screen::from(&state).to_string();

        assert!(text.contains(TITLE_PLACEHOLDER));
        assert!(text.contains(DESCRIPTION_PLACEHOLDER));
        assert!(text.contains("Prep Time: N/A | Servings: N/A"));
        assert!(!text.contains("Ingredients:"));
        assert!(!text.contains("Instructions:"));
        assert!(!text.contains("Nutrition"));
    }

    #[test]
    fn test_missing_ingredient_fields_use_placeholder() {
        let state = loaded(RecipeResponse {
            ingredients_list: vec![IngredientLine {
                item: Some("Salt".to_string()),
                quantity: None,
            }],
            ..Default::default()
        });
        let text = Screen::from(&state).to_string();

        assert!(text.contains("  - Salt: N/A"));
    }
}
