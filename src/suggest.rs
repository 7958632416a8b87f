// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! AI tag suggestion against a local Ollama instance.
//!
//! One blocking request, fixed timeout, no retry. The public boundary
//! ([`suggest_tags`]) keeps the absent-on-any-failure contract; the trait
//! method underneath reports the failure reason so the UI can say why the
//! field stayed empty.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

const OLLAMA_ENDPOINT: &str = "http://localhost:11434/api/generate";
const OLLAMA_MODEL: &str = "mistral:7b-instruct-v0.2-q4_K_S";
const OLLAMA_KEEP_ALIVE: &str = "5m";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum SuggestError {
    Connect { detail: String },
    Timeout,
    Status { status: u16 },
    MalformedResponse { detail: String },
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect { detail } => {
                write!(f, "cannot reach the suggestion endpoint: {detail}")
            }
            Self::Timeout => f.write_str("suggestion request timed out"),
            Self::Status { status } => {
                write!(f, "suggestion endpoint returned status {status}")
            }
            Self::MalformedResponse { detail } => {
                write!(f, "malformed suggestion response: {detail}")
            }
        }
    }
}

impl std::error::Error for SuggestError {}

/// The tag-suggestion collaborator seam the TUI talks to.
pub trait SuggestTags {
    fn suggest(&self, category: &str, title: &str) -> Result<String, SuggestError>;
}

/// Absent-on-any-failure boundary: callers that do not care about the
/// reason get `None` for every failure mode, never a panic or an error.
pub fn suggest_tags(suggester: &dyn SuggestTags, category: &str, title: &str) -> Option<String> {
    suggester.suggest(category, title).ok()
}

/// Blocking Ollama client with the fixed generation config.
#[derive(Debug, Clone)]
pub struct OllamaSuggester {
    endpoint: String,
}

impl Default for OllamaSuggester {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaSuggester {
    pub fn new() -> Self {
        Self {
            endpoint: OLLAMA_ENDPOINT.to_owned(),
        }
    }

    /// Points the suggester at a non-default endpoint (tests, remote hosts).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SuggestTags for OllamaSuggester {
    fn suggest(&self, category: &str, title: &str) -> Result<String, SuggestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| SuggestError::Connect {
                detail: err.to_string(),
            })?;

        let payload = serde_json::json!({
            "prompt": prompt_for(category, title),
            "model": OLLAMA_MODEL,
            "keep_alive": OLLAMA_KEEP_ALIVE,
            "stream": false,
        });

        let response = client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().map_err(|err| SuggestError::MalformedResponse {
            detail: err.to_string(),
        })?;
        extract_suggestion(&body)
    }
}

fn classify_transport_error(err: reqwest::Error) -> SuggestError {
    if err.is_timeout() {
        SuggestError::Timeout
    } else {
        SuggestError::Connect {
            detail: err.to_string(),
        }
    }
}

fn prompt_for(category: &str, title: &str) -> String {
    format!(
        "Search tags for the following topic and title. The topic is {category} and the title is {title}. Show me four tags, only one word or two per tag with comma separated and don't include a preamble and don't include dot at the end.\n"
    )
}

/// The generation response carries the suggestion under `response`; only
/// its first non-surrounding-whitespace line is kept.
fn extract_suggestion(body: &Value) -> Result<String, SuggestError> {
    let text = body
        .get("response")
        .and_then(Value::as_str)
        .ok_or_else(|| SuggestError::MalformedResponse {
            detail: "missing 'response' field".to_owned(),
        })?;

    Ok(text.trim().lines().next().unwrap_or("").to_owned())
}
