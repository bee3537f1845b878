use super::prompt::{RECIPES_PERSONA, RECIPES_PROMPT};
use super::GenerationStage;
use crate::error::Result;
use crate::model::IngredientList;
use crate::providers::LlmProvider;

pub const MAX_TOKENS: u32 = 2000;

const STAGE: GenerationStage = GenerationStage {
    persona: RECIPES_PERSONA,
    template: RECIPES_PROMPT,
    max_tokens: MAX_TOKENS,
};

/// Ask for three everyday recipes built from the extracted ingredients
pub async fn generate(
    provider: &dyn LlmProvider,
    model: &str,
    ingredients: &IngredientList,
) -> Result<String> {
    STAGE.run(provider, model, ingredients).await
}
