//! Resume Field Extractor: rule-based recognition of profile fields in plain text.
//!
//! Every field is looked up independently over the whole text. Missing fields
//! come back as `None` or an empty list; extraction itself never fails.
//! Without a language analyzer the extractor returns an empty profile.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::language::{EntityLabel, HeuristicAnalyzer, LanguageAnalyzer, TaggedToken};
use crate::resume::vocabulary::{
    BULLET_PREFIXES, COMPETING_SECTION_HEADERS, DEGREE_KEYWORDS, EDUCATION_WINDOW_LINES,
    INTEREST_INDICATORS, INTEREST_SECTION_HEADERS, MAX_PREFERENCES, MAX_SKILLS,
    PREFERENCE_CONTACT_WORDS, SKILL_STOPLIST,
};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

// ASCII digits only: `f64::from_str` cannot parse other scripts' digits.
static DECIMAL_GPA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+\.[0-9]+)(?:/([0-9]+\.[0-9]+))?").expect("gpa pattern is valid")
});

static BARE_YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2})\b").expect("year pattern is valid"));

/// Year-range shapes, tried in order over the education window.
enum YearPattern {
    /// Two captured years, reported as `start-end`.
    Closed(Regex),
    /// One captured year; the matched text is reported verbatim.
    OpenEnded(Regex),
}

static YEAR_PATTERNS: Lazy<Vec<YearPattern>> = Lazy::new(|| {
    let re = |p: &str| Regex::new(p).expect("year range pattern is valid");
    vec![
        YearPattern::Closed(re(r"(?i)(\d{4})\s*-\s*(\d{4})")),
        YearPattern::OpenEnded(re(r"(?i)(\d{4})\s*-\s*Present")),
        YearPattern::OpenEnded(re(r"(?i)(\d{4})\s*-\s*Current")),
        YearPattern::Closed(re(r"(?i)(\d{4})\s*to\s*(\d{4})")),
    ]
});

/// Best-effort profile pulled from a resume. Absent fields are `None` / empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub degree: Option<String>,
    pub year_of_study: Option<String>,
    pub gpa: Option<f64>,
    pub skills: Vec<String>,
    pub preferences: Vec<String>,
}

pub struct ResumeFieldExtractor {
    analyzer: Option<Arc<dyn LanguageAnalyzer>>,
}

impl ResumeFieldExtractor {
    pub fn new(analyzer: Option<Arc<dyn LanguageAnalyzer>>) -> Self {
        Self { analyzer }
    }

    pub fn heuristic() -> Self {
        Self::new(Some(Arc::new(HeuristicAnalyzer)))
    }

    pub fn is_enabled(&self) -> bool {
        self.analyzer.is_some()
    }

    pub fn extract(&self, text: &str) -> ExtractedProfile {
        let Some(analyzer) = self.analyzer.as_deref() else {
            return ExtractedProfile::default();
        };

        let tokens = analyzer.tag_tokens(text);

        ExtractedProfile {
            full_name: extract_name(analyzer, text),
            email: extract_email(text),
            degree: extract_degree(&tokens),
            year_of_study: extract_year_of_study(text),
            gpa: naive_first_decimal_gpa(text),
            skills: extract_skills(&tokens),
            preferences: extract_preferences(analyzer, text),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field stages
// ────────────────────────────────────────────────────────────────────────────

fn extract_name(analyzer: &dyn LanguageAnalyzer, text: &str) -> Option<String> {
    analyzer
        .recognize_entities(text)
        .into_iter()
        .find(|e| e.label == EntityLabel::Person)
        .map(|e| e.text)
}

fn extract_degree(tokens: &[TaggedToken]) -> Option<String> {
    tokens
        .iter()
        .find(|t| DEGREE_KEYWORDS.contains(&t.text.to_lowercase().as_str()))
        .map(|t| t.text.clone())
}

/// First decimal number in the document, read as the GPA.
///
/// Known limitation: the pattern is not scoped to an education or GPA label,
/// so any earlier `X.Y` (a version number, a phone fragment) wins. Kept as is
/// so existing extraction results stay comparable.
pub fn naive_first_decimal_gpa(text: &str) -> Option<f64> {
    DECIMAL_GPA_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn extract_skills(tokens: &[TaggedToken]) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for token in tokens
        .iter()
        .filter(|t| t.pos.is_nominal() && t.text.chars().count() > 2)
    {
        let skill = token.text.to_lowercase();
        if !SKILL_STOPLIST.contains(&skill.as_str()) && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills.truncate(MAX_SKILLS);
    skills
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_year_of_study(text: &str) -> Option<String> {
    let window = education_window(text);

    for pattern in YEAR_PATTERNS.iter() {
        match pattern {
            YearPattern::Closed(re) => {
                if let Some(caps) = re.captures(&window) {
                    return Some(format!("{}-{}", &caps[1], &caps[2]));
                }
            }
            YearPattern::OpenEnded(re) => {
                if let Some(m) = re.find(&window) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    let years: Vec<&str> = BARE_YEAR_PATTERN
        .captures_iter(&window)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    match years.as_slice() {
        [] => None,
        [only] => Some(only.to_string()),
        _ => {
            let min = years.iter().min()?;
            let max = years.iter().max()?;
            Some(format!("{min}-{max}"))
        }
    }
}

/// The first "education" line and the nine after it, or the whole text.
fn education_window(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    match lines
        .iter()
        .position(|line| line.to_lowercase().contains("education"))
    {
        Some(start) => {
            let end = (start + EDUCATION_WINDOW_LINES).min(lines.len());
            lines[start..end].join("\n")
        }
        None => text.to_string(),
    }
}

fn extract_preferences(analyzer: &dyn LanguageAnalyzer, text: &str) -> Vec<String> {
    let mut raw = scan_interest_section(text);
    if raw.is_empty() {
        raw = interest_sentence_nouns(analyzer, text);
    }

    let mut preferences: Vec<String> = Vec::new();
    for pref in raw {
        if pref.chars().count() <= 2 || preferences.contains(&pref) {
            continue;
        }
        let lower = pref.to_lowercase();
        if PREFERENCE_CONTACT_WORDS.iter().any(|w| lower.contains(w)) {
            continue;
        }
        preferences.push(pref);
    }
    preferences.truncate(MAX_PREFERENCES);
    preferences
}

/// Collects lines under an interests-style header until another section starts.
fn scan_interest_section(text: &str) -> Vec<String> {
    let mut collected = Vec::new();
    let mut in_section = false;

    for line in text.split('\n') {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if INTEREST_SECTION_HEADERS.iter().any(|h| lower.contains(h)) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if COMPETING_SECTION_HEADERS.iter().any(|h| lower.contains(h)) {
            break;
        }
        if trimmed.is_empty() || trimmed.starts_with(BULLET_PREFIXES) {
            continue;
        }
        if trimmed.chars().count() > 3 {
            collected.push(trimmed.to_string());
        }
    }
    collected
}

/// Nouns from sentences that signal an interest ("passionate about", "enjoy", ...).
fn interest_sentence_nouns(analyzer: &dyn LanguageAnalyzer, text: &str) -> Vec<String> {
    let mut nouns = Vec::new();
    for sentence in analyzer.sentences(text) {
        let lower = sentence.to_lowercase();
        if !INTEREST_INDICATORS.iter().any(|k| lower.contains(k)) {
            continue;
        }
        nouns.extend(
            analyzer
                .tag_tokens(sentence)
                .into_iter()
                .filter(|t| t.pos.is_nominal() && t.text.chars().count() > 2)
                .map(|t| t.text.to_lowercase()),
        );
    }
    nouns
}
