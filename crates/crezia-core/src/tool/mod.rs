//! Analysis tool catalog, inputs, and placeholder reports.

mod input;
mod model;
mod report;
mod sample;

pub use input::ToolInput;
pub use model::ToolKind;
pub use report::{
    BacklinkReport, CompetitorReport, ContentReport, GrammarReport, KeywordReport,
    PlagiarismReport, SeoScoreReport, ToolReport,
};
pub use sample::SampleGenerator;
