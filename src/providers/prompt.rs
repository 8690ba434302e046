use crate::model::RecipeType;

/// The instruction template sent to the generation provider.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
///
/// Contains `{{INGREDIENTS}}`, `{{PREP_TIME}}`, `{{SERVINGS}}` and
/// `{{DIET_CONSTRAINT}}` placeholders, filled in by [`build_recipe_prompt`].
pub const RECIPE_PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

/// Diet clause used for vegetarian requests.
pub const VEGETARIAN_CONSTRAINT: &str = "The recipe MUST be strictly vegetarian. Do not include any meat, poultry, or fish. Eggs and dairy are not acceptable in any condition, even if they appear in the 'Available Ingredients'. Assume basic vegetable oil, salt, pepper, water.";

/// Opening words of the non-vegetarian clause.
pub const NON_VEGETARIAN_MARKER: &str = "The user is open to non-vegetarian options.";

/// Form the diet clause for a request.
pub fn diet_constraint(recipe_type: RecipeType, ingredients: &str) -> String {
    match recipe_type {
        RecipeType::Vegetarian => VEGETARIAN_CONSTRAINT.to_string(),
        RecipeType::NonVegetarian => format!(
            "{NON_VEGETARIAN_MARKER} If it makes sense with the 'Available Ingredients' (`{ingredients}`), you MAY suggest incorporating common non-vegetarian items like chicken breast or eggs, even if not explicitly listed. However, the primary focus should remain on the provided ingredients. Do not suggest red meat or fish unless they are listed. Assume basic oil, salt, pepper, water."
        ),
    }
}

/// Build the complete prompt for one recipe request.
///
/// The request values are embedded verbatim: only the template is scanned
/// for placeholders, never the values inserted into it.
pub fn build_recipe_prompt(
    ingredients: &str,
    prep_time: &str,
    servings: &str,
    recipe_type: RecipeType,
) -> String {
    let diet = diet_constraint(recipe_type, ingredients);

    fill_template(RECIPE_PROMPT_TEMPLATE, |token| match token {
        "INGREDIENTS" => Some(ingredients),
        "PREP_TIME" => Some(prep_time),
        "SERVINGS" => Some(servings),
        "DIET_CONSTRAINT" => Some(diet.as_str()),
        _ => None,
    })
}

/// Replace every `{{TOKEN}}` in `template` with `lookup(TOKEN)` in one pass.
///
/// Unknown tokens and an unterminated `{{` are copied through unchanged.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        filled.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            rest = &rest[open..];
            break;
        };

        match lookup(&after_open[..close]) {
            Some(value) => filled.push_str(value),
            None => filled.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    filled.push_str(rest);
    filled
}
