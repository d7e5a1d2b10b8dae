// src/prompt.rs
// Prompt templates keyed by operation

use std::str::FromStr;
use tracing::debug;

use crate::error::{ResearchError, Result};

/// Text-processing operations the relay understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Summarize,
    Suggest,
    Paraphrase,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Self::Summarize, Self::Suggest, Self::Paraphrase];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parse an operation tag (exact, case-sensitive match)
    pub fn parse(tag: &str) -> Result<Self> {
        Self::from_str(tag).map_err(|_| {
            let supported: Vec<&str> = Self::ALL.iter().map(Operation::as_str).collect();
            debug!(operation = %tag, ?supported, "Unsupported operation tag");
            ResearchError::UnknownOperation(tag.to_string())
        })
    }

    /// Instruction placed in front of the user content
    pub fn template(&self) -> &'static str {
        match self {
            Self::Summarize => {
                "Provide a clear and concise summary of the following text in a few sentences:\n\n"
            }
            Self::Suggest => {
                "Based on the following content: suggest related topics and further reading. \
                 Format the response with clear headings and bullet points:\n\n"
            }
            Self::Paraphrase => {
                "Paraphrase the following text to express the same meaning in different words, \
                 while maintaining the original tone and context. \
                 Do not add any extra explanations or introductory phrases:\n\n"
            }
        }
    }

    /// Paraphrase results go back as plain text instead of a JSON envelope
    pub fn returns_plain_text(&self) -> bool {
        matches!(self, Self::Paraphrase)
    }
}

/// Build the prompt for `operation`: its template followed by `content` verbatim.
pub fn build_prompt(operation: &str, content: &str) -> Result<String> {
    let op = Operation::parse(operation)?;
    let template = op.template();

    let mut prompt = String::with_capacity(template.len() + content.len());
    prompt.push_str(template);
    prompt.push_str(content);
    Ok(prompt)
}
