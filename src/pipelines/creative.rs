use super::prompt::{CREATIVE_PERSONA, CREATIVE_RECIPE_PROMPT};
use super::GenerationStage;
use crate::error::Result;
use crate::model::IngredientList;
use crate::providers::LlmProvider;

pub const MAX_TOKENS: u32 = 1500;

const STAGE: GenerationStage = GenerationStage {
    persona: CREATIVE_PERSONA,
    template: CREATIVE_RECIPE_PROMPT,
    max_tokens: MAX_TOKENS,
};

/// Ask for one unconventional fusion recipe
pub async fn generate(
    provider: &dyn LlmProvider,
    model: &str,
    ingredients: &IngredientList,
) -> Result<String> {
    STAGE.run(provider, model, ingredients).await
}
