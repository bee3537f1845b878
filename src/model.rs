use serde::Serialize;

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    User,
}

/// One piece of a multimodal message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Message body: plain text or a list of parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn developer(text: impl Into<String>) -> Self {
        Message {
            role: Role::Developer,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// A user message carrying an instruction followed by an image
    pub fn user_with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_url.into(),
                    },
                },
            ]),
        }
    }
}

/// Lines the vision model reported, exactly as returned.
///
/// Blank lines are kept so downstream prompts see the raw response; only
/// [`IngredientList::displayed`] drops them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientList {
    lines: Vec<String>,
}

impl IngredientList {
    /// Split a completion on `\n`, keeping empty trailing pieces
    pub fn from_response(text: &str) -> Self {
        IngredientList {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines worth printing: everything that is not whitespace-only
    pub fn displayed(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }

    /// Newline-joined text forwarded into the recipe prompts
    pub fn to_prompt_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_keeps_trailing_blank() {
        let list = IngredientList::from_response("- Apples 500g ¥300\n- Milk 1L ¥200\n");
        assert_eq!(
            list.lines(),
            &["- Apples 500g ¥300", "- Milk 1L ¥200", ""]
        );
        assert_eq!(
            list.displayed().collect::<Vec<_>>(),
            vec!["- Apples 500g ¥300", "- Milk 1L ¥200"]
        );
    }

    #[test]
    fn test_prompt_text_includes_blank_lines() {
        let list = IngredientList::from_response("- Eggs\n\n  \n- Tofu");
        assert_eq!(list.to_prompt_text(), "- Eggs\n\n  \n- Tofu");
        assert_eq!(list.displayed().count(), 2);
    }

    #[test]
    fn test_empty_response() {
        let list = IngredientList::from_response("");
        assert_eq!(list.lines(), &[""]);
        assert_eq!(list.displayed().count(), 0);
        assert_eq!(list.to_prompt_text(), "");
    }

    #[test]
    fn test_image_message_serializes_as_parts() {
        let message = Message::user_with_image("何が安い？", "https://example.com/flyer.jpg");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "何が安い？"},
                    {"type": "image_url", "image_url": {"url": "https://example.com/flyer.jpg"}}
                ]
            })
        );
    }

    #[test]
    fn test_text_message_serializes_as_string() {
        let message = Message::developer("You are a chef.");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"role": "developer", "content": "You are a chef."})
        );
    }
}
