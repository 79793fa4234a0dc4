//! Conversation messages exchanged with the completion service.
//!
//! Message order is significant (chronological) and preserved across a
//! request's round-trip. `reasoning_details` is an opaque passthrough:
//! whatever the service attached comes back to it unmodified on the next
//! turn.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Message content: a plain string for text messages, or ordered parts
/// (text + image attachments) for vision messages. Untagged so client
/// history with plain string content deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: MessageContent,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reasoning_details: Option<serde_json::Value>,
}

/// Ordered sequence of role-tagged messages sent to the completion service.
pub type Conversation = Vec<ConversationMessage>;

impl ConversationMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(content.into()),
            reasoning_details: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
            reasoning_details: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(content.into()),
            reasoning_details: None,
        }
    }

    /// A user message carrying instructional text plus ordered image
    /// attachments (data URLs, already base64-encoded by the caller).
    pub fn user_with_images(text: impl Into<String>, image_urls: Vec<String>) -> Self {
        let mut parts = vec![ContentPart::Text { text: text.into() }];
        parts.extend(
            image_urls
                .into_iter()
                .map(|url| ContentPart::ImageUrl { image_url: ImageUrl { url } }),
        );
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
            reasoning_details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_message_serializes_as_plain_string() {
        let msg = ConversationMessage::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
        assert!(json.get("reasoning_details").is_none());
    }

    #[test]
    fn vision_message_serializes_parts_in_order() {
        let msg = ConversationMessage::user_with_images(
            "identify this",
            vec!["data:image/png;base64,AAAA".into(), "data:image/jpeg;base64,BBBB".into()],
        );
        let json = serde_json::to_value(&msg).unwrap();
        let parts = json["content"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/png;base64,AAAA");
        assert_eq!(parts[2]["image_url"]["url"], "data:image/jpeg;base64,BBBB");
    }

    #[test]
    fn client_history_with_string_content_deserializes() {
        let msg: ConversationMessage = serde_json::from_str(
            r#"{"role":"assistant","content":"hi","reasoning_details":{"tokens":12}}"#,
        )
        .unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, MessageContent::Text("hi".into()));
        assert_eq!(msg.reasoning_details.unwrap()["tokens"], 12);
    }

    #[test]
    fn reasoning_details_round_trips_unmodified() {
        let original = serde_json::json!({"trace": [1, 2, 3], "opaque": "yes"});
        let mut msg = ConversationMessage::assistant("done");
        msg.reasoning_details = Some(original.clone());
        let json = serde_json::to_string(&msg).unwrap();
        let back: ConversationMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reasoning_details, Some(original));
    }
}
