/// Instruction sent alongside the flyer image.
pub const EXTRACT_INGREDIENTS_PROMPT: &str = include_str!("prompts/extract_ingredients.txt");

/// Template asking for three everyday recipes. Contains `{ingredients}`.
pub const RECIPES_PROMPT: &str = include_str!("prompts/recipes.txt");

/// Template asking for one fusion recipe. Contains `{ingredients}`.
pub const CREATIVE_RECIPE_PROMPT: &str = include_str!("prompts/creative_recipe.txt");

pub const RECIPES_PERSONA: &str = "You are a friendly and enthusiastic cooking assistant.";

pub const CREATIVE_PERSONA: &str = "You are a creative and enthusiastic cooking innovator.";

const INGREDIENTS_PLACEHOLDER: &str = "{ingredients}";

/// Substitute the ingredient text into a recipe template
pub fn fill_template(template: &str, ingredients_text: &str) -> String {
    template.replace(INGREDIENTS_PLACEHOLDER, ingredients_text)
}
