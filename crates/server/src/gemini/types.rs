//! Types for the Gemini API.
//!
//! These types match the `generateContent` REST format. Only the fields
//! the assistant needs are modeled; everything else is ignored on decode.

use serde::{Deserialize, Serialize};

/// A piece of content in a request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role of the content producer ("user" or "model"). Omitted for
    /// system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A single-part system instruction (no role).
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part within a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text content.
    #[serde(default)]
    pub text: String,
}

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// System instruction steering the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Conversation contents, oldest first.
    pub contents: Vec<Content>,
}

/// Response from the `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Generated candidates; the first one carries the reply.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    ///
    /// Returns `None` when there is no candidate or the text is blank,
    /// so callers can substitute a fallback reply.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content.
    pub content: Option<Content>,
    /// Reason generation stopped, e.g. `STOP` or `MAX_TOKENS`.
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_uses_camel_case() {
        let request = GenerateRequest {
            system_instruction: Some(Content::system("Be helpful.")),
            contents: vec![Content::user("What cuts do you have?")],
        };

        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(!json.contains("\"role\":null"));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "We have "}, {"text": "ribeye today."}]
                },
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.text().expect("text"), "We have ribeye today.");
    }

    #[test]
    fn test_response_text_is_none_without_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_text_is_none_for_blank_reply() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "  \n"}]},
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).expect("deserialize");
        assert!(response.text().is_none());
    }
}
