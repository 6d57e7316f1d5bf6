//! Model backend interface and Gemini wire types

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Harm categories filtered by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHarassment,
    HarmCategoryHateSpeech,
    HarmCategorySexuallyExplicit,
    HarmCategoryDangerousContent,
}

/// Blocking sensitivity for a harm category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

/// Safety threshold for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Sampling parameters sent as `generationConfig`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub candidate_count: u32,
}

/// Sampling parameters plus safety thresholds for a generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub sampling: SamplingConfig,
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerationConfig {
    /// Parameters used for MVP scope documents
    pub fn scope_default() -> Self {
        let threshold = HarmBlockThreshold::BlockMediumAndAbove;
        Self {
            sampling: SamplingConfig {
                temperature: 0.6,
                top_p: 0.95,
                top_k: 40,
                max_output_tokens: 4096,
                candidate_count: 1,
            },
            safety_settings: [
                HarmCategory::HarmCategoryHarassment,
                HarmCategory::HarmCategoryHateSpeech,
                HarmCategory::HarmCategorySexuallyExplicit,
                HarmCategory::HarmCategoryDangerousContent,
            ]
            .into_iter()
            .map(|category| SafetySetting { category, threshold })
            .collect(),
        }
    }

    /// Override the output token limit
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.sampling.max_output_tokens = max_output_tokens;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::scope_default()
    }
}

/// A single text part of a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A role-tagged message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Body of a `generateContent` call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: SamplingConfig,
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerateContentRequest {
    /// Single-turn user prompt with the given parameters
    pub fn new(prompt: impl Into<String>, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: config.sampling.clone(),
            safety_settings: config.safety_settings.clone(),
        }
    }

    /// Text of the first user part
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// One generated completion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself (e.g. why it was blocked)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Response of a `generateContent` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Response with a single candidate carrying `text`
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            prompt_feedback: None,
        }
    }

    /// Response with no candidates, as returned for a blocked prompt
    pub fn blocked(block_reason: Option<&str>) -> Self {
        Self {
            candidates: Vec::new(),
            prompt_feedback: Some(PromptFeedback {
                block_reason: block_reason.map(str::to_string),
            }),
        }
    }

    /// Block reason reported in the prompt feedback, if any
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }

    /// Concatenated text of the first candidate.
    ///
    /// `None` when the candidate carries no text part at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// A remote model that can answer `generateContent` calls
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Issue one generation call
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> std::result::Result<GenerateContentResponse, ProviderError>;

    /// Get the name of this backend
    fn name(&self) -> &str;
}
