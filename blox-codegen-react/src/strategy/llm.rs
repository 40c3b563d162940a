//! Component sources from an OpenAI-compatible chat-completion endpoint.

use std::time::Duration;

use blox_core::ResolvedCollections;
use blox_ir::{Block, DesignSystemIR};
use blox_manifest::LlmSettings;
use eyre::{Result, WrapErr, bail, eyre};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ComponentStrategy;
use crate::files::GENERATED_HEADER;

const SYSTEM_PROMPT: &str = "You write a single React + TypeScript (.tsx) presentational component \
for a Next.js site using Tailwind CSS and shadcn/ui. Reply with the file contents only. \
The file must default-export the component, which takes one `content` prop.";

/// Blocking chat-completion client with a timeout and bounded retries.
pub struct LlmStrategy {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl LlmStrategy {
    /// Build a client from `[llm]` settings. Fails when the API key
    /// variable is unset or empty.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| eyre!("environment variable {} is not set", settings.api_key_env))?;
        Self::new(settings, api_key)
    }

    pub fn new(settings: &LlmSettings, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .wrap_err("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key: api_key.into(),
            max_retries: settings.max_retries,
        })
    }

    fn request(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .wrap_err_with(|| format!("request to {} failed", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            bail!("{} responded with {}", self.endpoint, status);
        }

        let reply: ChatResponse = response.json().wrap_err("malformed completion response")?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| eyre!("completion response has no content"))?;

        extract_source(&content)
    }
}

impl ComponentStrategy for LlmStrategy {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn generate(
        &self,
        block: &Block,
        design_system: Option<&DesignSystemIR>,
        collections: &ResolvedCollections<'_>,
    ) -> Result<String> {
        let prompt = prompt(block, design_system, collections)?;

        let mut attempt = 0;
        loop {
            match self.request(&prompt) {
                Ok(source) => return Ok(source),
                Err(err) if attempt < self.max_retries => {
                    attempt += 1;
                    tracing::debug!(block = %block.name, attempt, error = %err, "retrying completion");
                }
                Err(err) => {
                    return Err(err.wrap_err(format!(
                        "no usable completion for {} after {} attempt(s)",
                        block.name,
                        attempt + 1
                    )));
                }
            }
        }
    }
}

/// The user message: everything the component must honor, as JSON.
fn prompt(
    block: &Block,
    design_system: Option<&DesignSystemIR>,
    collections: &ResolvedCollections<'_>,
) -> Result<String> {
    let brief = json!({
        "componentName": block.component_name(),
        "blockName": block.name,
        "description": block.description,
        "category": block.category,
        "fields": block.fields,
        "defaults": block.data,
        "isDetail": block.is_detail(),
        "contentType": block.content_type,
        "designSystem": design_system,
        "shadcnComponents": block.shadcn_components,
        "lucideIcons": block.lucide_icons,
        "sampleCollections": collections,
    });
    serde_json::to_string_pretty(&brief).wrap_err("failed to serialize prompt")
}

/// Strip Markdown fences and any generated header from a reply and check
/// that it looks like a component module.
fn extract_source(reply: &str) -> Result<String> {
    let mut source = reply.trim();

    if let Some(rest) = source.strip_prefix("```") {
        // Drop the info string line (```tsx).
        source = rest.split_once('\n').map_or("", |(_, body)| body);
        source = source.trim_end().strip_suffix("```").unwrap_or(source).trim();
    }

    if let Some(rest) = source.strip_prefix(GENERATED_HEADER) {
        source = rest.trim_start();
    }

    if !source.contains("export default") {
        bail!("completion has no default export");
    }

    Ok(format!("{}\n", source))
}
