//! Terminal rendering.

use colored::{ColoredString, Colorize};
use crezia_core::account::Account;
use crezia_core::notification::{Notification, NotificationLevel};
use crezia_core::tool::{
    BacklinkReport, CompetitorReport, ContentReport, GrammarReport, KeywordReport,
    PlagiarismReport, SeoScoreReport, ToolKind, ToolReport,
};

pub fn notification(n: &Notification) {
    let message = match n.level {
        NotificationLevel::Success => n.message.bright_green(),
        NotificationLevel::Info => n.message.bright_blue(),
        NotificationLevel::Warning => n.message.yellow(),
        NotificationLevel::Error => n.message.red(),
    };
    println!("{}", message);
}

pub fn pending(message: &str) {
    println!("{}", message.bright_black());
}

pub fn status(current: Option<&Account>) {
    let Some(account) = current else {
        println!("{}", "Not logged in".bright_black());
        return;
    };

    println!(
        "{} {}",
        account.display_name().bold(),
        format!("<{}>", account.email).bright_black()
    );
    let plan = if account.is_premium() {
        "Premium".bright_magenta().bold()
    } else {
        "Free".normal()
    };
    println!("  Plan:  {}", plan);
    println!("  Usage: {}", account.usage_label());
    if let Some(remaining) = account.remaining() {
        println!("  Left:  {}", remaining);
    }
}

/// Lists the catalog. Locked tools are dimmed.
pub fn catalog(unlocked: bool) {
    for kind in ToolKind::all() {
        let id = format!("{:<18}", kind.id());
        let id = if unlocked {
            id.bright_cyan()
        } else {
            id.bright_black()
        };
        println!(
            "  {} {} {}",
            id,
            kind.title(),
            format!("[{}]", kind.input_labels().join(" | ")).bright_black()
        );
    }
    if !unlocked {
        println!("{}", "Login to use the tools.".bright_black());
    }
}

pub fn report(report: &ToolReport) {
    println!("{}", report.kind().title().bold());
    match report {
        ToolReport::KeywordResearch(r) => keyword(r),
        ToolReport::SeoScore(r) => seo_score(r),
        ToolReport::Plagiarism(r) => plagiarism(r),
        ToolReport::Grammar(r) => grammar(r),
        ToolReport::Backlinks(r) => backlinks(r),
        ToolReport::Content(r) => content(r),
        ToolReport::Competitor(r) => competitor(r),
    }
}

pub fn incomplete_input(kind: ToolKind) {
    println!(
        "{}",
        format!("No result: {} needs {}", kind.id(), kind.input_labels().join(" and ")).yellow()
    );
}

fn keyword(r: &KeywordReport) {
    field("Keyword", &r.keyword);
    field("Search volume", &thousands(r.volume));
    field("Difficulty", &format!("{}/100", r.difficulty));
    field("CPC", &format!("${:.2}", r.cpc));
    let trend: Vec<String> = KeywordReport::TREND_MONTHS
        .iter()
        .zip(&r.trend)
        .map(|(month, volume)| format!("{} {}", month, thousands(*volume)))
        .collect();
    field("Trend", &trend.join(", "));
}

fn seo_score(r: &SeoScoreReport) {
    field("URL", &r.url);
    println!("  {:<16}{}", "Overall", score(r.overall));
    for (label, value) in [
        ("Technical", r.technical),
        ("Content", r.content),
        ("Mobile", r.mobile),
        ("Speed", r.speed),
    ] {
        println!("  {:<16}{}", label, score(value));
    }
    list("Issues", &r.issues);
}

fn plagiarism(r: &PlagiarismReport) {
    field("Unique", &format!("{}%", r.unique_percent));
    field("Plagiarized", &format!("{}%", r.plagiarized_percent));
    field("Grade", &r.grade);
    list("Sources", &r.sources);
}

fn grammar(r: &GrammarReport) {
    field("Errors", &r.errors.to_string());
    println!("  {:<16}{}", "Score", score(r.score));
    list("Corrections", &r.corrections);
}

fn backlinks(r: &BacklinkReport) {
    field("Domain", &r.domain);
    field("Domain authority", &r.domain_authority.to_string());
    field("Total backlinks", &thousands(r.total_backlinks));
    field("Referring", &r.referring_domains.to_string());
    println!("  {:<16}{}", "Quality", score(r.quality_score));
}

fn content(r: &ContentReport) {
    println!("  {:<16}{}", "SEO score", score(r.seo_score));
    field("Word count", &r.word_count.to_string());
    field("Keyword density", &format!("{:.2}%", r.keyword_density));
    list("Suggestions", &r.suggestions);
}

fn competitor(r: &CompetitorReport) {
    println!("  {}", "Domain authority".bright_black());
    for (domain, authority) in &r.authority {
        println!("    {:<24}{}", domain, authority);
    }
    list("Gaps", &r.gaps);
}

fn field(label: &str, value: &str) {
    println!("  {:<16}{}", label, value);
}

fn list(label: &str, items: &[String]) {
    println!("  {}", label.bright_black());
    for item in items {
        println!("    - {}", item);
    }
}

fn score(value: u32) -> ColoredString {
    let text = format!("{}/100", value);
    match value {
        80.. => text.bright_green(),
        60..=79 => text.yellow(),
        _ => text.red(),
    }
}

fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
