//! Read a grocery flyer with a vision model and turn the bargains into recipes.
//!
//! ```no_run
//! use flyer_chef::{AppConfig, ImageSource, OpenAIProvider, RecipeGenerator};
//!
//! # async fn demo() -> Result<(), flyer_chef::RecipeError> {
//! let config = AppConfig::load()?;
//! let provider = OpenAIProvider::new(&config.openai)?;
//! let generator = RecipeGenerator::new(&provider, &config.openai);
//! let image = ImageSource::from_arg("https://example.com/flyer.jpg");
//! generator.run(&image, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod image;
pub mod model;
pub mod pipelines;
pub mod providers;

pub use config::{AppConfig, OpenAiConfig};
pub use error::RecipeError;
pub use generator::{GeneratedRecipes, RecipeGenerator};
pub use image::ImageSource;
pub use model::IngredientList;
pub use providers::{LlmProvider, OpenAIProvider};
