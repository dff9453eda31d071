//! The prompt-template catalog.
//!
//! Two kinds of zero-argument templates: persona fetchers, one per roster
//! entry plus a derived mission-reporter variant, which fetch that literal
//! prompt name from the remote service; and static how-to guides that explain
//! when and how to call the tools registered alongside them. Fetch failures
//! propagate to the adapter as protocol errors; the guides are pure data.

use rmcp::model::{
    GetPromptResult, Prompt, PromptMessage, PromptMessageContent, PromptMessageRole,
};
use rmcp::ErrorData;

use crate::api::PromptClient;

/// Catalog entries are exposed as `prompt-{name}`.
pub const PERSONA_PROMPT_PREFIX: &str = "prompt-";

/// Derived roster variant: each persona also reports on missions.
pub const MISSION_REPORTER_PREFIX: &str = "mission-reporter-";

/// Static how-to guides, `(name, description, text)`.
const GUIDES: &[(&str, &str, &str)] = &[
    (
        "publish-to-production",
        "Publish a prompt version to the \"production\" label",
        "Your task: deploy a specific prompt version to production in a Langfuse project.\n\n\
         Step-by-step:\n\
         1. Ensure you know the *exact* prompt name and desired version. If unsure, first call \
         the `list_prompts` tool (no args) or `get_prompt` to inspect a single prompt.\n\
         2. Call the `update_labels` tool with:\n\
            - name      - the prompt name\n\
            - version   - the integer version to publish\n\
            - newLabels - an array that *must* include the string \"production\" (you can keep \
         existing labels too).\n\
         Example JSON args:\n\
         { \"name\": \"movie-critic\", \"version\": 3, \"newLabels\": [\"production\", \"latest\"] }\n\n\
         A successful call returns the full updated prompt object. Only call `update_labels` \
         after you have verified the version number exists.",
    ),
    (
        "how-to-list-prompts",
        "Instruction to list all prompts",
        "To inspect every prompt in the Langfuse project (names, versions, labels), invoke the \
         `list_prompts` tool. All arguments are optional filters; the response carries prompt \
         metadata under `data` with a pagination envelope under `meta`.",
    ),
    (
        "how-to-get-prompt",
        "Instruction to fetch a single prompt",
        "Use the `get_prompt` tool when you need the full content of one prompt. Required arg: \
         `name`. Optional: `version` (integer) *or* `label` (string such as \"production\", \
         \"latest\"). Omit both to retrieve the production version.",
    ),
    (
        "how-to-create-prompt",
        "Instruction to create a prompt (text or chat)",
        "To create a prompt (new name or new version) call the `create_prompt` tool. Pass a \
         JSON body under `prompt`.\n\
         Key fields:\n\
         - type   - \"text\" or \"chat\".\n\
         - name   - unique prompt name.\n\
         - prompt - string *or* array of {role, content} messages.\n\
         - labels - include \"production\" to deploy immediately, or leave empty to just store \
         the version.\n\
         - config / tags / commitMessage - optional metadata.\n\
         Example minimal text prompt:\n\
         { \"type\": \"text\", \"name\": \"greeting\", \"prompt\": \"Hello {{name}}\" }",
    ),
];

/// Roster plus the derived mission-reporter variants, in catalog order.
fn fetchable_names(personas: &[String]) -> Vec<String> {
    personas
        .iter()
        .cloned()
        .chain(
            personas
                .iter()
                .map(|name| format!("{MISSION_REPORTER_PREFIX}{name}")),
        )
        .collect()
}

/// The full template catalog for a roster.
pub fn catalog(personas: &[String]) -> Vec<Prompt> {
    let mut prompts: Vec<Prompt> = fetchable_names(personas)
        .into_iter()
        .map(|name| {
            Prompt::new(
                format!("{PERSONA_PROMPT_PREFIX}{name}"),
                Some(format!("Get the prompt named '{name}'")),
                None,
            )
        })
        .collect();

    for (name, description, _) in GUIDES {
        prompts.push(Prompt::new(*name, Some(*description), None));
    }

    prompts
}

/// Serve one template by name. Guides resolve locally; persona templates
/// fetch the prompt behind them and echo its JSON as an assistant message.
pub async fn resolve(
    client: &PromptClient,
    personas: &[String],
    name: &str,
) -> Result<GetPromptResult, ErrorData> {
    if let Some((_, description, text)) = GUIDES.iter().find(|(guide, _, _)| *guide == name) {
        return Ok(assistant_text(Some((*description).to_string()), *text));
    }

    if let Some(fetch_name) = name.strip_prefix(PERSONA_PROMPT_PREFIX) {
        if fetchable_names(personas).iter().any(|n| n == fetch_name) {
            let prompt = client.get_prompt(fetch_name, None, None).await?;
            let json = serde_json::to_string_pretty(&prompt)
                .map_err(crate::error::PromptuaryError::from)?;
            return Ok(assistant_text(
                Some(format!("Get the prompt named '{fetch_name}'")),
                json,
            ));
        }
    }

    Err(ErrorData::invalid_params(
        format!("Unknown prompt: {name}"),
        None,
    ))
}

fn assistant_text(description: Option<String>, text: impl Into<String>) -> GetPromptResult {
    GetPromptResult {
        description,
        messages: vec![PromptMessage {
            role: PromptMessageRole::Assistant,
            content: PromptMessageContent::text(text.into()),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Connection;

    fn roster() -> Vec<String> {
        vec!["denis".to_string(), "frankie".to_string()]
    }

    fn offline_client() -> PromptClient {
        PromptClient::new(&Connection {
            host: "http://127.0.0.1:9".to_string(),
            public_key: "pk".to_string(),
            secret_key: "sk".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_catalog_covers_roster_and_guides() {
        let prompts = catalog(&roster());
        // two templates per persona plus the four guides
        assert_eq!(prompts.len(), 2 * 2 + 4);

        let names: Vec<&str> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"prompt-denis"));
        assert!(names.contains(&"prompt-mission-reporter-frankie"));
        assert!(names.contains(&"publish-to-production"));
        assert!(names.contains(&"how-to-create-prompt"));
    }

    #[tokio::test]
    async fn test_guides_resolve_without_network() {
        let result = resolve(&offline_client(), &roster(), "how-to-get-prompt")
            .await
            .unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.description.unwrap().contains("fetch a single prompt"));
    }

    #[tokio::test]
    async fn test_unknown_prompt_is_rejected() {
        let err = resolve(&offline_client(), &roster(), "prompt-nobody")
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown prompt"));

        let err = resolve(&offline_client(), &roster(), "bogus")
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown prompt"));
    }
}
