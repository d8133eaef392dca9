//! The suggestion engine.
//!
//! There is no AI here. Names come from three deterministic strategies
//! over the request's keywords, scored and merged, so the same request
//! always produces the same ranked list:
//! 1. Affixing: keywords combined with tone-flavored prefixes/suffixes
//! 2. Industry blends: keywords fused with industry root words
//! 3. Coined shorts: truncated keyword fragments for punchy labels
//!
//! Duplicate names from different strategies keep their best score.

use crate::request::SuggestionRequest;
use catalog::{Category, Extension, Listing, Tone};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Number of suggestions the assistant shows by default.
pub const DEFAULT_SUGGESTION_COUNT: usize = 6;

/// One ranked name suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Full domain name, extension included.
    pub name: String,
    /// Mock asking price in whole dollars.
    pub price: u64,
    /// False when the marketplace already lists this exact name.
    pub available: bool,
    /// Relevance score, 0–99.
    pub score: u32,
}

/// Generates ranked name suggestions against a catalog snapshot.
pub struct SuggestionEngine {
    /// Lowercased names already listed on the marketplace.
    taken: HashSet<String>,
}

impl SuggestionEngine {
    /// Build an engine over the current listing snapshot; the snapshot
    /// only feeds the availability check.
    pub fn new(existing: &[Listing]) -> Self {
        Self {
            taken: existing.iter().map(|l| l.name.to_lowercase()).collect(),
        }
    }

    /// Generate up to `limit` suggestions, best first.
    pub fn suggest(&self, request: &SuggestionRequest, limit: usize) -> Vec<Suggestion> {
        let keywords = extract_keywords(request);
        debug!(?keywords, "generating suggestions");

        let mut labels: Vec<(String, u32)> = Vec::new();
        labels.extend(affix_labels(&keywords, request.tone));
        labels.extend(industry_labels(&keywords, request.industry));
        labels.extend(coined_labels(&keywords));

        // Merge duplicate labels, keeping the best strategy score.
        let mut merged: HashMap<String, Suggestion> = HashMap::new();
        for (index, (label, base_score)) in labels.into_iter().enumerate() {
            let extension = pick_extension(request.extension, index);
            let score = self.score(&label, base_score, extension, request);
            let name = format!("{label}{}", extension.as_str());
            let suggestion = Suggestion {
                available: !self.taken.contains(&name),
                price: mock_price(&label, extension),
                name,
                score,
            };
            merged
                .entry(suggestion.name.clone())
                .and_modify(|existing| {
                    if suggestion.score > existing.score {
                        *existing = suggestion.clone();
                    }
                })
                .or_insert(suggestion);
        }

        let mut suggestions: Vec<Suggestion> = merged.into_values().collect();
        suggestions.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        suggestions.truncate(limit);

        debug!(count = suggestions.len(), "suggestions ready");
        suggestions
    }

    fn score(
        &self,
        label: &str,
        base_score: u32,
        extension: Extension,
        request: &SuggestionRequest,
    ) -> u32 {
        let mut score = base_score;
        if request.length.fits(label.chars().count()) {
            score += 10;
        }
        if extension == Extension::Com {
            score += 6;
        }
        if request.extension == Some(extension) {
            score += 4;
        }
        score.min(99)
    }
}

/// Keywords from the request: user keywords first, then the business
/// type, lowercased, stripped to alphanumerics, deduplicated, capped at
/// five. Empty input falls back to a generic seed list so the assistant
/// always has something to say.
fn extract_keywords(request: &SuggestionRequest) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    let raw = format!("{} {}", request.keywords, request.business_type);
    for word in raw.split([',', ' ']) {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if cleaned.chars().count() >= 2 && !keywords.contains(&cleaned) {
            keywords.push(cleaned);
        }
        if keywords.len() == 5 {
            break;
        }
    }
    if keywords.is_empty() {
        keywords = vec!["launch".to_string(), "nova".to_string(), "spark".to_string()];
    }
    keywords
}

/// Strategy 1: tone-flavored affixing.
fn affix_labels(keywords: &[String], tone: Option<Tone>) -> Vec<(String, u32)> {
    let (prefixes, suffixes) = tone_affixes(tone);
    let mut labels = Vec::new();
    for (ki, keyword) in keywords.iter().enumerate() {
        let seniority = (ki as u32) * 2;
        for (ai, suffix) in suffixes.iter().enumerate() {
            labels.push((
                format!("{keyword}{suffix}"),
                78u32.saturating_sub(seniority + ai as u32),
            ));
        }
        for (ai, prefix) in prefixes.iter().enumerate() {
            labels.push((
                format!("{prefix}{keyword}"),
                76u32.saturating_sub(seniority + ai as u32),
            ));
        }
    }
    labels
}

/// Strategy 2: blends with industry root words.
fn industry_labels(keywords: &[String], industry: Option<Category>) -> Vec<(String, u32)> {
    let Some(industry) = industry else {
        return Vec::new();
    };
    let roots = industry_roots(industry);
    let mut labels = Vec::new();
    for (ki, keyword) in keywords.iter().take(3).enumerate() {
        for (ri, root) in roots.iter().enumerate() {
            let penalty = (ki * 2 + ri) as u32;
            labels.push((format!("{keyword}{root}"), 72u32.saturating_sub(penalty)));
            labels.push((format!("{root}{keyword}"), 70u32.saturating_sub(penalty)));
        }
    }
    labels
}

/// Strategy 3: coined short labels from keyword fragments.
fn coined_labels(keywords: &[String]) -> Vec<(String, u32)> {
    let mut labels = Vec::new();
    for (ki, keyword) in keywords.iter().take(3).enumerate() {
        let fragment: String = keyword.chars().take(4).collect();
        let partner = keywords.get(ki + 1).or_else(|| keywords.first());
        if let Some(partner) = partner
            && partner != keyword
        {
            let tail: String = partner.chars().take(3).collect();
            labels.push((format!("{fragment}{tail}"), 66u32.saturating_sub(ki as u32)));
        }
        if keyword.chars().count() > 6 {
            let clipped: String = keyword.chars().take(5).collect();
            labels.push((clipped, 64u32.saturating_sub(ki as u32)));
        }
    }
    labels
}

/// Tone-specific affix pools; no tone gets a neutral pool.
fn tone_affixes(tone: Option<Tone>) -> (&'static [&'static str], &'static [&'static str]) {
    match tone {
        Some(Tone::Professional) => (&["pro", "prime"], &["solutions", "corp", "partners"]),
        Some(Tone::Creative) => (&["studio", "made"], &["lab", "works", "craft"]),
        Some(Tone::Modern) => (&["get", "try"], &["ly", "hub", "now"]),
        Some(Tone::Playful) => (&["hey", "go"], &["joy", "pop", "spark"]),
        Some(Tone::Elegant) => (&["maison", "fine"], &["luxe", "haus", "atelier"]),
        Some(Tone::Bold) => (&["max", "ultra"], &["force", "peak", "edge"]),
        Some(Tone::Minimalist) => (&["one", "just"], &["co", "io", "base"]),
        Some(Tone::TechFocused) => (&["byte", "cloud"], &["tech", "sys", "stack"]),
        None => (&["my", "the"], &["hq", "zone", "spot"]),
    }
}

/// Root words blended in per industry.
fn industry_roots(industry: Category) -> &'static [&'static str] {
    match industry {
        Category::Technology => &["tech", "byte", "stack"],
        Category::Business => &["venture", "trade", "corp"],
        Category::Health => &["care", "vital", "well"],
        Category::Finance => &["fund", "capital", "ledger"],
        Category::Education => &["learn", "academy", "mentor"],
        Category::Entertainment => &["play", "show", "stream"],
        Category::Food => &["plate", "taste", "kitchen"],
        Category::Travel => &["voyage", "trip", "roam"],
        Category::Fashion => &["style", "wear", "thread"],
        Category::RealEstate => &["estate", "dwell", "haven"],
    }
}

/// Preferred extension if given, otherwise rotate through the popular ones.
fn pick_extension(preferred: Option<Extension>, index: usize) -> Extension {
    const ROTATION: [Extension; 6] = [
        Extension::Com,
        Extension::Io,
        Extension::Co,
        Extension::App,
        Extension::Dev,
        Extension::Net,
    ];
    preferred.unwrap_or(ROTATION[index % ROTATION.len()])
}

/// Mock price: shorter labels and stronger extensions ask more.
fn mock_price(label: &str, extension: Extension) -> u64 {
    let len = label.chars().count().min(16) as u64;
    let base = 3600 - 150 * len;
    let extension_premium = match extension {
        Extension::Com => 600,
        Extension::Ai | Extension::Io => 300,
        _ => 0,
    };
    (base + extension_premium).max(800)
}
