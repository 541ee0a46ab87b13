//! Tool inputs.

use serde::{Deserialize, Serialize};

use super::model::ToolKind;

/// The form fields a user submits to a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "kebab-case")]
pub enum ToolInput {
    KeywordResearch { keyword: String },
    SeoScore { url: String },
    Plagiarism { content: String },
    Grammar { text: String },
    Backlinks { domain: String },
    Content { content: String, keywords: String },
    Competitor { your_domain: String, competitors: String },
}

impl ToolInput {
    /// Builds an input from positional fields, as a command line supplies
    /// them. A missing secondary field is treated as empty.
    pub fn from_parts(kind: ToolKind, primary: impl Into<String>, secondary: Option<String>) -> Self {
        let primary = primary.into();
        let secondary = secondary.unwrap_or_default();
        match kind {
            ToolKind::KeywordResearch => ToolInput::KeywordResearch { keyword: primary },
            ToolKind::SeoScore => ToolInput::SeoScore { url: primary },
            ToolKind::Plagiarism => ToolInput::Plagiarism { content: primary },
            ToolKind::Grammar => ToolInput::Grammar { text: primary },
            ToolKind::Backlinks => ToolInput::Backlinks { domain: primary },
            ToolKind::Content => ToolInput::Content {
                content: primary,
                keywords: secondary,
            },
            ToolKind::Competitor => ToolInput::Competitor {
                your_domain: primary,
                competitors: secondary,
            },
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            ToolInput::KeywordResearch { .. } => ToolKind::KeywordResearch,
            ToolInput::SeoScore { .. } => ToolKind::SeoScore,
            ToolInput::Plagiarism { .. } => ToolKind::Plagiarism,
            ToolInput::Grammar { .. } => ToolKind::Grammar,
            ToolInput::Backlinks { .. } => ToolKind::Backlinks,
            ToolInput::Content { .. } => ToolKind::Content,
            ToolInput::Competitor { .. } => ToolKind::Competitor,
        }
    }

    /// False when a required field is empty. The content optimizer does not
    /// require keywords; the competitor tool requires both domains.
    pub fn is_complete(&self) -> bool {
        match self {
            ToolInput::KeywordResearch { keyword: field }
            | ToolInput::SeoScore { url: field }
            | ToolInput::Plagiarism { content: field }
            | ToolInput::Grammar { text: field }
            | ToolInput::Backlinks { domain: field }
            | ToolInput::Content { content: field, .. } => !field.is_empty(),
            ToolInput::Competitor {
                your_domain,
                competitors,
            } => !your_domain.is_empty() && !competitors.is_empty(),
        }
    }
}
