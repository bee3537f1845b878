use crate::config::OpenAiConfig;
use crate::error::Result;
use crate::image::ImageSource;
use crate::model::IngredientList;
use crate::pipelines::{creative, ingredients, recipes};
use crate::providers::LlmProvider;
use log::info;
use std::io::Write;

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecipes {
    pub ingredients: IngredientList,
    pub recipes: String,
    pub creative_recipe: String,
}

/// Drives the three stages in order against a single provider
pub struct RecipeGenerator<'a> {
    provider: &'a dyn LlmProvider,
    vision_model: String,
    recipe_model: String,
}

impl<'a> RecipeGenerator<'a> {
    pub fn new(provider: &'a dyn LlmProvider, config: &OpenAiConfig) -> Self {
        Self::with_models(provider, &config.vision_model, &config.recipe_model)
    }

    pub fn with_models(
        provider: &'a dyn LlmProvider,
        vision_model: &str,
        recipe_model: &str,
    ) -> Self {
        RecipeGenerator {
            provider,
            vision_model: vision_model.to_string(),
            recipe_model: recipe_model.to_string(),
        }
    }

    /// Run extraction, recipes and the creative recipe, printing as it goes
    ///
    /// Each result is written to `out` as soon as its stage finishes, so a
    /// later failure leaves the earlier output in place.
    pub async fn run<W: Write>(
        &self,
        image: &ImageSource,
        out: &mut W,
    ) -> Result<GeneratedRecipes> {
        let image_url = image.to_image_url().await?;

        writeln!(out, "🔍 お買い得な食材を探しています...")?;
        info!(
            "Extracting ingredients with {}/{}",
            self.provider.provider_name(),
            self.vision_model
        );
        let ingredients =
            ingredients::extract(self.provider, &self.vision_model, &image_url).await?;
        writeln!(out, "\n✨ 見つけた食材はこちら！")?;
        for line in ingredients.displayed() {
            writeln!(out, "{}", line)?;
        }

        writeln!(out, "\n📝 美味しいレシピを考えています...")?;
        info!(
            "Generating recipes with {}/{}",
            self.provider.provider_name(),
            self.recipe_model
        );
        let recipes = recipes::generate(self.provider, &self.recipe_model, &ingredients).await?;
        writeln!(out, "\n🍽️ おすすめレシピの提案です！")?;
        writeln!(out, "{}", recipes)?;

        writeln!(out, "\n🎨 斬新なレシピを考えています...")?;
        info!(
            "Generating creative recipe with {}/{}",
            self.provider.provider_name(),
            self.recipe_model
        );
        let creative_recipe =
            creative::generate(self.provider, &self.recipe_model, &ingredients).await?;
        writeln!(out, "\n🌟 特別なレシピの提案です！")?;
        writeln!(out, "{}", creative_recipe)?;

        writeln!(out, "\n🎉 以上で完了です！素敵なお料理をお楽しみください！")?;

        Ok(GeneratedRecipes {
            ingredients,
            recipes,
            creative_recipe,
        })
    }
}
