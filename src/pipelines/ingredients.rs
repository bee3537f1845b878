use super::prompt::EXTRACT_INGREDIENTS_PROMPT;
use crate::error::Result;
use crate::model::{IngredientList, Message};
use crate::providers::LlmProvider;
use log::debug;

pub const MAX_TOKENS: u32 = 500;

/// Ask the vision model which bargain items the flyer shows
///
/// The reply is split into lines as-is; an empty reply yields a single
/// empty line.
pub async fn extract(
    provider: &dyn LlmProvider,
    model: &str,
    image_url: &str,
) -> Result<IngredientList> {
    let messages = [Message::user_with_image(
        EXTRACT_INGREDIENTS_PROMPT.trim(),
        image_url,
    )];

    let text = provider.complete(model, &messages, MAX_TOKENS).await?;
    let ingredients = IngredientList::from_response(&text);
    debug!("Extracted {} line(s)", ingredients.lines().len());

    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::model::{ContentPart, MessageContent, Role};
    use crate::providers::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_extract_sends_image_request() {
        let provider = ScriptedProvider::replying(&["- Apples 500g ¥300\n- Milk 1L ¥200\n"]);

        let ingredients = extract(&provider, "gpt-4o-mini", "https://example.com/flyer.jpg")
            .await
            .unwrap();
        assert_eq!(
            ingredients.lines(),
            &["- Apples 500g ¥300", "- Milk 1L ¥200", ""]
        );

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-4o-mini");
        assert_eq!(requests[0].max_tokens, 500);
        assert_eq!(requests[0].messages.len(), 1);

        let message = &requests[0].messages[0];
        assert_eq!(message.role, Role::User);
        match &message.content {
            MessageContent::Parts(parts) => {
                assert_eq!(parts.len(), 2);
                assert!(matches!(&parts[0], ContentPart::Text { text } if text.contains("お買い得")));
                assert!(matches!(
                    &parts[1],
                    ContentPart::ImageUrl { image_url } if image_url.url == "https://example.com/flyer.jpg"
                ));
            }
            other => panic!("expected parts, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extract_tolerates_empty_reply() {
        let provider = ScriptedProvider::replying(&[""]);

        let ingredients = extract(&provider, "gpt-4o-mini", "https://example.com/flyer.jpg")
            .await
            .unwrap();
        assert_eq!(ingredients.lines(), &[""]);
    }

    #[tokio::test]
    async fn test_extract_propagates_provider_error() {
        let provider = ScriptedProvider::new(vec![Err(RecipeError::ApiStatus {
            status: 500,
            body: "boom".to_string(),
        })]);

        let result = extract(&provider, "gpt-4o-mini", "https://example.com/flyer.jpg").await;
        assert!(matches!(result, Err(RecipeError::ApiStatus { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_extract_is_repeatable() {
        let reply = "- Tofu ¥98";
        let provider = ScriptedProvider::replying(&[reply, reply]);

        let first = extract(&provider, "gpt-4o-mini", "https://example.com/a.jpg").await.unwrap();
        let second = extract(&provider, "gpt-4o-mini", "https://example.com/a.jpg").await.unwrap();
        assert_eq!(first, second);

        let requests = provider.requests();
        assert_eq!(requests[0], requests[1]);
    }
}
