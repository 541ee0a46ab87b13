//! Tool catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{CreziaError, Result};

/// The seven analysis tools, identified by stable kebab-case ids.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ToolKind {
    KeywordResearch,
    SeoScore,
    Plagiarism,
    Grammar,
    Backlinks,
    Content,
    Competitor,
}

impl ToolKind {
    /// Parses a tool id such as `seo-score`.
    pub fn parse(id: &str) -> Result<Self> {
        Self::from_str(id.trim()).map_err(|_| CreziaError::not_found("tool", id))
    }

    /// Every tool in catalog order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToolKind::KeywordResearch => "Keyword Research",
            ToolKind::SeoScore => "Website SEO Score",
            ToolKind::Plagiarism => "Plagiarism Checker",
            ToolKind::Grammar => "Grammar Fixer",
            ToolKind::Backlinks => "Backlink Analysis",
            ToolKind::Content => "Content Optimizer",
            ToolKind::Competitor => "Competitor Analysis",
        }
    }

    /// Labels of the input fields, primary first.
    pub fn input_labels(&self) -> &'static [&'static str] {
        match self {
            ToolKind::KeywordResearch => &["keyword"],
            ToolKind::SeoScore => &["website url"],
            ToolKind::Plagiarism => &["content"],
            ToolKind::Grammar => &["text"],
            ToolKind::Backlinks => &["domain"],
            ToolKind::Content => &["content", "target keywords (comma separated)"],
            ToolKind::Competitor => &["your domain", "competitor domains (comma separated)"],
        }
    }
}
