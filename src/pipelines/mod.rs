pub mod creative;
pub mod ingredients;
pub mod prompt;
pub mod recipes;

use crate::error::Result;
use crate::model::{IngredientList, Message};
use crate::providers::LlmProvider;
use log::debug;

/// Fixed inputs of a text-only generation stage
pub(crate) struct GenerationStage {
    pub persona: &'static str,
    pub template: &'static str,
    pub max_tokens: u32,
}

impl GenerationStage {
    pub(crate) fn messages(&self, ingredients: &IngredientList) -> Vec<Message> {
        let prompt = prompt::fill_template(self.template, &ingredients.to_prompt_text());
        vec![Message::developer(self.persona), Message::user(prompt)]
    }

    /// One request, returning the completion text untouched
    pub(crate) async fn run(
        &self,
        provider: &dyn LlmProvider,
        model: &str,
        ingredients: &IngredientList,
    ) -> Result<String> {
        let messages = self.messages(ingredients);
        let text = provider
            .complete(model, &messages, self.max_tokens)
            .await?;
        debug!("Received {} characters from {}", text.len(), model);
        Ok(text)
    }
}
