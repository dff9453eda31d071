//! Wire shapes for the prompt-management API.
//!
//! These types mirror the portions of the Langfuse public API that deal with
//! prompt management (`/api/public/v2/prompts`). They validate outgoing
//! requests as well as incoming responses; the `parse_*` / `validate_*`
//! functions report the offending field instead of a bare serde message.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PromptuaryError, Result};

/// A single turn in a chat prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for creating a chat prompt (a new name or a new version).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatPromptRequest {
    pub name: String,
    pub prompt: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

/// Request body for creating a text prompt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextPromptRequest {
    pub name: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

/// Create-prompt request, tagged on `type`. The service assigns the version.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CreatePromptRequest {
    Chat(CreateChatPromptRequest),
    Text(CreateTextPromptRequest),
}

impl CreatePromptRequest {
    pub fn name(&self) -> &str {
        match self {
            CreatePromptRequest::Chat(r) => &r.name,
            CreatePromptRequest::Text(r) => &r.name,
        }
    }
}

/// Fields shared by both prompt variants in responses. Unlike the create
/// request, `labels` and `tags` are always present.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptBase {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub config: Value,
    pub labels: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// Opaque mapping used by the service for composed/nested prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_graph: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextPrompt {
    #[serde(flatten)]
    pub base: PromptBase,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChatPrompt {
    #[serde(flatten)]
    pub base: PromptBase,
    pub prompt: Vec<ChatMessage>,
}

/// A prompt resource as returned by the service, tagged on `type`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Prompt {
    Chat(ChatPrompt),
    Text(TextPrompt),
}

impl Prompt {
    pub fn base(&self) -> &PromptBase {
        match self {
            Prompt::Chat(p) => &p.base,
            Prompt::Text(p) => &p.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn version(&self) -> u32 {
        self.base().version
    }
}

/// Summary projection per prompt name (response of GET /prompts).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptMeta {
    pub name: String,
    pub versions: Vec<u32>,
    pub labels: Vec<String>,
    pub tags: Vec<String>,
    /// ISO-8601 timestamp, kept opaque (service-owned format).
    pub last_updated_at: String,
    #[serde(default)]
    pub last_config: Value,
}

/// Pagination envelope shared by list responses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtilsMetaResponse {
    pub page: u32,
    pub limit: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PromptMetaListResponse {
    pub data: Vec<PromptMeta>,
    pub meta: UtilsMetaResponse,
}

/// Request body for PATCH /prompts/{name}/versions/{version}. An empty list
/// strips every label; the schema allows it (caller's responsibility).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptVersionRequest {
    pub new_labels: Vec<String>,
}

/// Advisory query parameters for GET /prompts. Only provided fields are sent.
/// The timestamp bounds are passed through as strings; their format is the
/// service's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPromptsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_updated_at: Option<String>,
}

/// Fields a conforming `Prompt` response must carry. Checked before typed
/// deserialization so the error can name the first missing field.
const REQUIRED_PROMPT_FIELDS: &[&str] = &["type", "name", "version", "prompt", "labels", "tags"];

/// Validate an untrusted value as a create request.
pub fn parse_create_request(value: &Value) -> Result<CreatePromptRequest> {
    let obj = value
        .as_object()
        .ok_or_else(|| PromptuaryError::validation("prompt", "expected a JSON object"))?;

    match obj.get("type").and_then(Value::as_str) {
        Some("chat") | Some("text") => {}
        Some(other) => {
            return Err(PromptuaryError::validation(
                "type",
                format!("unknown prompt type '{other}', expected 'text' or 'chat'"),
            ))
        }
        None => {
            return Err(PromptuaryError::validation(
                "type",
                "missing required field",
            ))
        }
    }

    let request: CreatePromptRequest = serde_json::from_value(value.clone())
        .map_err(|e| PromptuaryError::validation("prompt", e.to_string()))?;
    validate_create_request(&request)?;
    Ok(request)
}

/// Structural checks beyond what the type system already guarantees.
pub fn validate_create_request(request: &CreatePromptRequest) -> Result<()> {
    if request.name().is_empty() {
        return Err(PromptuaryError::validation("name", "must not be empty"));
    }
    if let CreatePromptRequest::Chat(chat) = request {
        if chat.prompt.is_empty() {
            return Err(PromptuaryError::validation(
                "prompt",
                "chat prompt requires at least one message",
            ));
        }
    }
    Ok(())
}

/// Validate an untrusted value as an update request. `newLabels` must be an
/// ordered sequence of strings; anything else is rejected before a request
/// body is ever built.
pub fn parse_update_request(value: &Value) -> Result<UpdatePromptVersionRequest> {
    let labels = value
        .as_object()
        .and_then(|obj| obj.get("newLabels"))
        .ok_or_else(|| PromptuaryError::validation("newLabels", "missing required field"))?;

    let array = labels.as_array().ok_or_else(|| {
        PromptuaryError::validation("newLabels", "expected an array of strings")
    })?;

    let new_labels = array
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                PromptuaryError::validation("newLabels", "expected an array of strings")
            })
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(UpdatePromptVersionRequest { new_labels })
}

/// Validate a server response body against the `Prompt` union. Guards against
/// server-side contract drift: a 2xx with a non-conforming body is an error.
pub fn validate_prompt_response(value: &Value) -> Result<Prompt> {
    let obj = value
        .as_object()
        .ok_or_else(|| PromptuaryError::validation("prompt", "expected a JSON object"))?;

    for field in REQUIRED_PROMPT_FIELDS {
        if !obj.contains_key(*field) {
            return Err(PromptuaryError::validation(*field, "missing required field"));
        }
    }

    let prompt: Prompt = serde_json::from_value(value.clone())
        .map_err(|e| PromptuaryError::validation("prompt", e.to_string()))?;

    if prompt.version() == 0 {
        return Err(PromptuaryError::validation(
            "version",
            "must be a positive integer",
        ));
    }

    Ok(prompt)
}

/// Validate a server response body against the list envelope.
pub fn validate_meta_list_response(value: &Value) -> Result<PromptMetaListResponse> {
    let obj = value
        .as_object()
        .ok_or_else(|| PromptuaryError::validation("data", "expected a JSON object"))?;

    for field in ["data", "meta"] {
        if !obj.contains_key(field) {
            return Err(PromptuaryError::validation(field, "missing required field"));
        }
    }

    serde_json::from_value(value.clone())
        .map_err(|e| PromptuaryError::validation("data", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_create_request_round_trip() {
        let value = json!({
            "type": "text",
            "name": "greeting",
            "prompt": "Hello {{name}}"
        });

        let request = parse_create_request(&value).unwrap();
        assert!(matches!(request, CreatePromptRequest::Text(_)));
        assert_eq!(request.name(), "greeting");

        let serialized = serde_json::to_value(&request).unwrap();
        assert_eq!(serialized, value);
    }

    #[test]
    fn test_chat_create_request_parses() {
        let value = json!({
            "type": "chat",
            "name": "movie-critic",
            "prompt": [
                {"role": "system", "content": "You critique movies."},
                {"role": "user", "content": "Review {{title}}."}
            ],
            "labels": ["production"]
        });

        let request = parse_create_request(&value).unwrap();
        match request {
            CreatePromptRequest::Chat(chat) => {
                assert_eq!(chat.prompt.len(), 2);
                assert_eq!(chat.labels, Some(vec!["production".to_string()]));
            }
            CreatePromptRequest::Text(_) => panic!("expected chat variant"),
        }
    }

    #[test]
    fn test_create_request_rejects_unknown_type() {
        let err = parse_create_request(&json!({"type": "image", "name": "x", "prompt": "y"}))
            .unwrap_err();
        assert!(matches!(
            err,
            PromptuaryError::Validation { ref field, .. } if field == "type"
        ));
    }

    #[test]
    fn test_create_request_rejects_empty_chat() {
        let err = parse_create_request(&json!({"type": "chat", "name": "x", "prompt": []}))
            .unwrap_err();
        assert!(matches!(
            err,
            PromptuaryError::Validation { ref field, .. } if field == "prompt"
        ));
    }

    #[test]
    fn test_update_request_rejects_non_array_labels() {
        let err = parse_update_request(&json!({"newLabels": "production"})).unwrap_err();
        assert!(matches!(
            err,
            PromptuaryError::Validation { ref field, .. } if field == "newLabels"
        ));

        let err = parse_update_request(&json!({"newLabels": ["ok", 3]})).unwrap_err();
        assert!(matches!(err, PromptuaryError::Validation { .. }));
    }

    #[test]
    fn test_update_request_allows_empty_labels() {
        let request = parse_update_request(&json!({"newLabels": []})).unwrap();
        assert!(request.new_labels.is_empty());
    }

    #[test]
    fn test_update_request_serializes_camel_case() {
        let request = UpdatePromptVersionRequest {
            new_labels: vec!["production".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"newLabels": ["production"]})
        );
    }

    #[test]
    fn test_prompt_response_validates() {
        let value = json!({
            "type": "text",
            "name": "greeting",
            "version": 1,
            "config": null,
            "labels": [],
            "tags": []
        });

        let prompt = validate_prompt_response(&value).unwrap();
        assert_eq!(prompt.name(), "greeting");
        assert_eq!(prompt.version(), 1);
        assert_eq!(prompt.base().config, Value::Null);
    }

    #[test]
    fn test_prompt_response_missing_version_names_field() {
        let value = json!({
            "type": "text",
            "name": "greeting",
            "prompt": "Hello",
            "labels": [],
            "tags": []
        });

        let err = validate_prompt_response(&value).unwrap_err();
        assert!(matches!(
            err,
            PromptuaryError::Validation { ref field, .. } if field == "version"
        ));
    }

    #[test]
    fn test_chat_prompt_response_round_trip() {
        let value = json!({
            "type": "chat",
            "name": "movie-critic",
            "version": 3,
            "config": {"model": "overture-1"},
            "labels": ["production"],
            "tags": ["staff-pick"],
            "prompt": [{"role": "system", "content": "You critique movies."}]
        });

        let prompt = validate_prompt_response(&value).unwrap();
        assert_eq!(serde_json::to_value(&prompt).unwrap(), value);
    }

    #[test]
    fn test_meta_list_response_validates() {
        let value = json!({
            "data": [{
                "name": "greeting",
                "versions": [1, 2],
                "labels": ["production"],
                "tags": [],
                "lastUpdatedAt": "2024-05-01T12:00:00Z",
                "lastConfig": {}
            }],
            "meta": {"page": 1, "limit": 50, "totalItems": 1, "totalPages": 1}
        });

        let list = validate_meta_list_response(&value).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].versions, vec![1, 2]);
        assert_eq!(list.meta.total_items, 1);
    }

    #[test]
    fn test_meta_list_response_missing_envelope() {
        let err = validate_meta_list_response(&json!({"data": []})).unwrap_err();
        assert!(matches!(
            err,
            PromptuaryError::Validation { ref field, .. } if field == "meta"
        ));
    }
}
