//! Language analysis capability used by the field extractor.
//!
//! `LanguageAnalyzer` is the seam: extraction logic only needs entities,
//! part-of-speech tagged tokens, and sentence spans. `HeuristicAnalyzer` is
//! the shipped backend: lexicon and shape rules, no model files.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::resume::vocabulary::{
    ADJECTIVE_SUFFIXES, ADPOSITIONS, ADVERBS, AUXILIARIES, COMMON_VERBS, CONJUNCTIONS,
    DEGREE_KEYWORDS, DETERMINERS, HEADER_LINES, NON_NAME_WORDS, ORGANIZATION_MARKERS, PRONOUNS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    /// Possessive clitic split off a word (`'s`).
    Particle,
    Numeral,
    Punctuation,
}

impl PartOfSpeech {
    /// Common or proper noun.
    pub fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
    /// Byte offsets into the analyzed text.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Date,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

pub trait LanguageAnalyzer: Send + Sync {
    /// Named entities in document order.
    fn recognize_entities(&self, text: &str) -> Vec<Entity>;

    /// Every token of `text` with its part of speech, in order.
    fn tag_tokens(&self, text: &str) -> Vec<TaggedToken>;

    /// Sentence spans of `text`, trimmed, never empty.
    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        split_sentences(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenization and sentence splitting
// ────────────────────────────────────────────────────────────────────────────

/// Words keep inner `.`, `+`, `#`, `-` and `_` (`B.Tech`, `C++`, `2019-2023`).
/// A possessive `'s` is its own token (`Bachelor's` -> `Bachelor`, `'s`);
/// any other non-space character is a token of its own.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{L}\p{N}](?:[\p{L}\p{N}+#_.\-]*[\p{L}\p{N}+#])?|['\x{2019}][sS]\b|[^\s\p{L}\p{N}]",
    )
    .expect("token pattern is valid")
});

static DATE_RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:19|20)\d{2}\s*(?:-|–|to)\s*(?:(?:19|20)\d{2}|present|current)\b")
        .expect("date range pattern is valid")
});

/// Splits on newlines and on `.`, `!`, `?` followed by whitespace or end of text.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let boundary = match c {
            '\n' => true,
            '.' | '!' | '?' => chars.peek().map_or(true, |(_, next)| next.is_whitespace()),
            _ => false,
        };
        if boundary {
            let end = idx + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn tokenize(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str()))
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl LanguageAnalyzer for HeuristicAnalyzer {
    fn recognize_entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        let mut offset = 0;
        let mut non_empty_lines = 0;
        for line in text.split('\n') {
            let tokens: Vec<(usize, usize, &str)> = tokenize(line)
                .map(|(s, e, t)| (s + offset, e + offset, t))
                .collect();
            let in_header = non_empty_lines < HEADER_LINES;
            if !tokens.is_empty() {
                non_empty_lines += 1;
            }
            collect_people(text, &tokens, in_header, &mut entities);
            collect_organizations(text, &tokens, &mut entities);
            offset += line.len() + 1;
        }

        for m in DATE_RANGE_PATTERN.find_iter(text) {
            entities.push(Entity {
                text: m.as_str().to_string(),
                label: EntityLabel::Date,
                start: m.start(),
                end: m.end(),
            });
        }

        entities.sort_by_key(|e| e.start);
        entities
    }

    fn tag_tokens(&self, text: &str) -> Vec<TaggedToken> {
        tokenize(text)
            .map(|(start, end, word)| TaggedToken {
                text: word.to_string(),
                pos: tag_word(word),
                start,
                end,
            })
            .collect()
    }
}

fn tag_word(word: &str) -> PartOfSpeech {
    if word.starts_with(['\'', '\u{2019}']) {
        return PartOfSpeech::Particle;
    }
    if !word.chars().any(char::is_alphanumeric) {
        return PartOfSpeech::Punctuation;
    }
    if !word.chars().any(char::is_alphabetic) {
        return PartOfSpeech::Numeral;
    }

    let lower = word.to_lowercase();
    let l = lower.as_str();

    if DETERMINERS.contains(&l) {
        return PartOfSpeech::Determiner;
    }
    if PRONOUNS.contains(&l) {
        return PartOfSpeech::Pronoun;
    }
    if AUXILIARIES.contains(&l) {
        return PartOfSpeech::Auxiliary;
    }
    if ADPOSITIONS.contains(&l) {
        return PartOfSpeech::Adposition;
    }
    if CONJUNCTIONS.contains(&l) {
        return PartOfSpeech::Conjunction;
    }
    if ADVERBS.contains(&l) {
        return PartOfSpeech::Adverb;
    }
    if COMMON_VERBS.contains(&l) {
        return PartOfSpeech::Verb;
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        return PartOfSpeech::ProperNoun;
    }

    let len = l.chars().count();
    if len > 4 && l.ends_with("ly") {
        PartOfSpeech::Adverb
    } else if len > 4 && l.ends_with("ed") {
        PartOfSpeech::Verb
    } else if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| l.ends_with(s)) {
        PartOfSpeech::Adjective
    } else {
        PartOfSpeech::Noun
    }
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            chars.all(|c| c.is_lowercase() || c == '\'' || c == '-')
        }
        _ => false,
    }
}

/// `JANE`, `O'NEIL`; at least two letters, no lower case.
fn is_all_caps(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && word
            .chars()
            .all(|c| c.is_uppercase() || c == '\'' || c == '-')
}

fn is_function_word(lower: &str) -> bool {
    [DETERMINERS, PRONOUNS, AUXILIARIES, ADPOSITIONS, CONJUNCTIONS, ADVERBS]
        .iter()
        .any(|list| list.contains(&lower))
}

/// All-caps words only count inside the resume header.
fn is_name_part(word: &str, allow_all_caps: bool) -> bool {
    if !is_title_case(word) && !(allow_all_caps && is_all_caps(word)) {
        return false;
    }
    let lower = word.to_lowercase();
    let l = lower.as_str();
    !is_function_word(l)
        && !NON_NAME_WORDS.contains(&l)
        && !DEGREE_KEYWORDS.contains(&l)
        && !COMMON_VERBS.contains(&l)
}

/// Runs of 2–4 name parts on one line become `Person` entities.
fn collect_people(
    text: &str,
    tokens: &[(usize, usize, &str)],
    in_header: bool,
    out: &mut Vec<Entity>,
) {
    let mut run: Vec<(usize, usize)> = Vec::new();

    let flush = |run: &mut Vec<(usize, usize)>, out: &mut Vec<Entity>| {
        if (2..=4).contains(&run.len()) {
            let start = run[0].0;
            let end = run[run.len() - 1].1;
            out.push(Entity {
                text: text[start..end].to_string(),
                label: EntityLabel::Person,
                start,
                end,
            });
        }
        run.clear();
    };

    for &(start, end, word) in tokens {
        if is_name_part(word, in_header) {
            run.push((start, end));
        } else {
            flush(&mut run, out);
        }
    }
    flush(&mut run, out);
}

/// Capitalized spans containing an institution marker become `Organization`s.
/// `of`, `and` and `&` may join words inside the span.
fn collect_organizations(text: &str, tokens: &[(usize, usize, &str)], out: &mut Vec<Entity>) {
    let is_connector = |w: &str| matches!(w.to_lowercase().as_str(), "of" | "and" | "&" | "for");
    let is_capitalized = |w: &str| w.chars().next().is_some_and(char::is_uppercase);

    let mut i = 0;
    while i < tokens.len() {
        if !is_capitalized(tokens[i].2) {
            i += 1;
            continue;
        }

        let mut j = i;
        let mut last_word = i;
        let mut has_marker = false;
        while j < tokens.len() {
            let word = tokens[j].2;
            if is_capitalized(word) {
                has_marker |= ORGANIZATION_MARKERS.contains(&word.to_lowercase().as_str());
                last_word = j;
            } else if !is_connector(word) {
                break;
            }
            j += 1;
        }

        if has_marker {
            let start = tokens[i].0;
            let end = tokens[last_word].1;
            out.push(Entity {
                text: text[start..end].to_string(),
                label: EntityLabel::Organization,
                start,
                end,
            });
        }
        i = last_word + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos_of(tokens: &[TaggedToken], text: &str) -> PartOfSpeech {
        tokens
            .iter()
            .find(|t| t.text == text)
            .unwrap_or_else(|| panic!("token {text} missing"))
            .pos
    }

    #[test]
    fn test_tokenizer_keeps_compound_tokens() {
        let tokens = HeuristicAnalyzer.tag_tokens("B.Tech in C++, 2019-2023.");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["B.Tech", "in", "C++", ",", "2019-2023", "."]);
    }

    #[test]
    fn test_possessive_is_split_from_word() {
        let tokens = HeuristicAnalyzer.tag_tokens("Bachelor's and Master\u{2019}s degrees");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            words,
            vec!["Bachelor", "'s", "and", "Master", "\u{2019}s", "degrees"]
        );
        assert_eq!(pos_of(&tokens, "'s"), PartOfSpeech::Particle);
    }

    #[test]
    fn test_token_offsets_point_into_text() {
        let text = "Loves  Rust";
        for t in HeuristicAnalyzer.tag_tokens(text) {
            assert_eq!(&text[t.start..t.end], t.text);
        }
    }

    #[test]
    fn test_tagger_basic_classes() {
        let tokens = HeuristicAnalyzer.tag_tokens("I love robotics and the Python language quickly.");
        assert_eq!(pos_of(&tokens, "I"), PartOfSpeech::Pronoun);
        assert_eq!(pos_of(&tokens, "love"), PartOfSpeech::Verb);
        assert_eq!(pos_of(&tokens, "robotics"), PartOfSpeech::Noun);
        assert_eq!(pos_of(&tokens, "and"), PartOfSpeech::Conjunction);
        assert_eq!(pos_of(&tokens, "the"), PartOfSpeech::Determiner);
        assert_eq!(pos_of(&tokens, "Python"), PartOfSpeech::ProperNoun);
        assert_eq!(pos_of(&tokens, "quickly"), PartOfSpeech::Adverb);
        assert_eq!(pos_of(&tokens, "."), PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_numbers_are_numerals() {
        let tokens = HeuristicAnalyzer.tag_tokens("GPA 8.5 / 10");
        assert_eq!(pos_of(&tokens, "8.5"), PartOfSpeech::Numeral);
        assert_eq!(pos_of(&tokens, "10"), PartOfSpeech::Numeral);
    }

    #[test]
    fn test_person_from_header_line() {
        let text = "Jane Doe\njane.doe@example.com\nEducation\nStanford University";
        let entities = HeuristicAnalyzer.recognize_entities(text);
        let person = entities
            .iter()
            .find(|e| e.label == EntityLabel::Person)
            .expect("person entity");
        assert_eq!(person.text, "Jane Doe");
        assert_eq!(person.start, 0);
    }

    #[test]
    fn test_all_caps_header_name_is_person() {
        let text = "JANE DOE\njane@x.com\nSoftware Developer\nInterested in Machine Learning";
        let people: Vec<String> = HeuristicAnalyzer
            .recognize_entities(text)
            .into_iter()
            .filter(|e| e.label == EntityLabel::Person)
            .map(|e| e.text)
            .collect();
        assert_eq!(people, vec!["JANE DOE".to_string()]);
    }

    #[test]
    fn test_all_caps_outside_header_is_not_person() {
        let text = "Summary\nEducation\nSkills\nTOOLS USED DAILY";
        let entities = HeuristicAnalyzer.recognize_entities(text);
        assert!(entities.iter().all(|e| e.label != EntityLabel::Person));
    }

    #[test]
    fn test_field_of_study_is_not_a_name() {
        let entities = HeuristicAnalyzer.recognize_entities("Interested in Machine Learning");
        assert!(entities.iter().all(|e| e.label != EntityLabel::Person));
    }

    #[test]
    fn test_institution_is_organization_not_person() {
        let entities =
            HeuristicAnalyzer.recognize_entities("Indian Institute of Technology Delhi");
        assert!(entities.iter().all(|e| e.label != EntityLabel::Person));
        let org = entities
            .iter()
            .find(|e| e.label == EntityLabel::Organization)
            .expect("organization entity");
        assert_eq!(org.text, "Indian Institute of Technology Delhi");
    }

    #[test]
    fn test_section_headers_are_not_people() {
        let entities = HeuristicAnalyzer.recognize_entities("Professional Summary\nWork Experience");
        assert!(entities.iter().all(|e| e.label != EntityLabel::Person));
    }

    #[test]
    fn test_date_ranges_are_dates() {
        let entities = HeuristicAnalyzer.recognize_entities("B.Tech 2019 - Present");
        assert!(entities
            .iter()
            .any(|e| e.label == EntityLabel::Date && e.text == "2019 - Present"));
    }

    #[test]
    fn test_split_sentences() {
        let text = "I love robotics. B.Tech grad!\nEnjoy chess";
        assert_eq!(
            split_sentences(text),
            vec!["I love robotics.", "B.Tech grad!", "Enjoy chess"]
        );
    }

    #[test]
    fn test_split_sentences_empty_text() {
        assert!(split_sentences("  \n\n ").is_empty());
    }
}
