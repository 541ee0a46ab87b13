//! Tool results.
//!
//! These are placeholder values shaped like real analysis output. Nothing is
//! actually analysed.

use serde::Serialize;

use super::model::ToolKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    pub keyword: String,
    pub volume: u32,
    /// 0-100
    pub difficulty: u32,
    pub cpc: f64,
    /// Monthly search volume, paired with `TREND_MONTHS`.
    pub trend: Vec<u32>,
}

impl KeywordReport {
    pub const TREND_MONTHS: [&'static str; 5] = ["Jan", "Feb", "Mar", "Apr", "May"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoScoreReport {
    pub url: String,
    pub overall: u32,
    pub technical: u32,
    pub content: u32,
    pub mobile: u32,
    pub speed: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlagiarismReport {
    pub plagiarized_percent: u32,
    pub unique_percent: u32,
    pub sources: Vec<String>,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarReport {
    pub errors: u32,
    pub score: u32,
    pub corrections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacklinkReport {
    pub domain: String,
    pub domain_authority: u32,
    pub total_backlinks: u32,
    pub referring_domains: u32,
    pub quality_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentReport {
    pub seo_score: u32,
    pub word_count: usize,
    /// Percentage, rounded to two decimals.
    pub keyword_density: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorReport {
    /// `(domain, authority)` with the user's own domain first.
    pub authority: Vec<(String, u32)>,
    pub gaps: Vec<String>,
}

/// Output of one tool run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", rename_all = "kebab-case")]
pub enum ToolReport {
    KeywordResearch(KeywordReport),
    SeoScore(SeoScoreReport),
    Plagiarism(PlagiarismReport),
    Grammar(GrammarReport),
    Backlinks(BacklinkReport),
    Content(ContentReport),
    Competitor(CompetitorReport),
}

impl ToolReport {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolReport::KeywordResearch(_) => ToolKind::KeywordResearch,
            ToolReport::SeoScore(_) => ToolKind::SeoScore,
            ToolReport::Plagiarism(_) => ToolKind::Plagiarism,
            ToolReport::Grammar(_) => ToolKind::Grammar,
            ToolReport::Backlinks(_) => ToolKind::Backlinks,
            ToolReport::Content(_) => ToolKind::Content,
            ToolReport::Competitor(_) => ToolKind::Competitor,
        }
    }
}
