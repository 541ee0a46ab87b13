//! Placeholder result generation.
//!
//! Four tools return fixed fixtures; backlinks, content and competitor draw
//! their numbers from the supplied RNG.

use rand::Rng;

use super::input::ToolInput;
use super::report::{
    BacklinkReport, CompetitorReport, ContentReport, GrammarReport, KeywordReport,
    PlagiarismReport, SeoScoreReport, ToolReport,
};

const CONTENT_SUGGESTIONS: [&str; 5] = [
    "Add more internal links",
    "Include target keywords in headings",
    "Optimize meta description",
    "Add alt text to images",
    "Improve content structure",
];

const COMPETITOR_GAPS: [&str; 4] = [
    "Competitors have more backlinks",
    "Missing opportunities in organic keywords",
    "Lower content freshness score",
    "Fewer social media mentions",
];

/// Number of suggestions / gaps shown per report.
const SHOWN_ITEMS: usize = 3;

/// Produces sample reports from tool inputs.
pub struct SampleGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns `None` when a required input field is empty.
    pub fn generate(&mut self, input: &ToolInput) -> Option<ToolReport> {
        if !input.is_complete() {
            return None;
        }

        let report = match input {
            ToolInput::KeywordResearch { keyword } => ToolReport::KeywordResearch(KeywordReport {
                keyword: keyword.clone(),
                volume: 15_000,
                difficulty: 68,
                cpc: 3.45,
                trend: vec![12_000, 13_500, 14_200, 15_000, 16_500],
            }),
            ToolInput::SeoScore { url } => ToolReport::SeoScore(SeoScoreReport {
                url: url.clone(),
                overall: 85,
                technical: 78,
                content: 92,
                mobile: 88,
                speed: 76,
                issues: to_strings(&[
                    "Missing meta descriptions",
                    "Slow image loading",
                    "Large image files",
                ]),
            }),
            ToolInput::Plagiarism { .. } => ToolReport::Plagiarism(PlagiarismReport {
                plagiarized_percent: 15,
                unique_percent: 85,
                sources: to_strings(&["wikipedia.org", "medium.com"]),
                grade: "Pass".to_string(),
            }),
            ToolInput::Grammar { .. } => ToolReport::Grammar(GrammarReport {
                errors: 3,
                score: 92,
                corrections: to_strings(&[
                    "Subject-verb agreement corrected",
                    "Spelling error fixed",
                    "Punctuation improved",
                ]),
            }),
            ToolInput::Backlinks { domain } => ToolReport::Backlinks(BacklinkReport {
                domain: domain.clone(),
                domain_authority: self.rng.gen_range(30..70),
                total_backlinks: self.rng.gen_range(5_000..55_000),
                referring_domains: self.rng.gen_range(100..600),
                quality_score: self.rng.gen_range(60..90),
            }),
            ToolInput::Content { content, keywords } => {
                let word_count = content.split(' ').count();
                let keyword_count = keywords.split(',').count();
                let density = keyword_count as f64 / word_count as f64 * 100.0;
                ToolReport::Content(ContentReport {
                    seo_score: self.rng.gen_range(65..95),
                    word_count,
                    keyword_density: (density * 100.0).round() / 100.0,
                    suggestions: to_strings(&CONTENT_SUGGESTIONS[..SHOWN_ITEMS]),
                })
            }
            ToolInput::Competitor {
                your_domain,
                competitors,
            } => {
                let domains = std::iter::once(your_domain.clone())
                    .chain(competitors.split(',').map(|c| c.trim().to_string()));
                let authority = domains
                    .map(|domain| (domain, self.rng.gen_range(30..70)))
                    .collect();
                ToolReport::Competitor(CompetitorReport {
                    authority,
                    gaps: to_strings(&COMPETITOR_GAPS[..SHOWN_ITEMS]),
                })
            }
        };

        Some(report)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
