//! Fixed lexicons and compiled matchers for the feature extractor.
//!
//! Every table here is process-wide, read-only configuration data: defined
//! once, never mutated, shared by every extraction call. Word-level lists are
//! compiled into a single case-insensitive alternation each, anchored with
//! `\b` so entries never fire inside longer words ("secret" must not match
//! in "secretly"). Phrase lists match as plain substrings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sensationalist vocabulary. Normalized by one hit per 50 words.
pub(crate) const SENSATIONALIST_WORDS: &[&str] = &[
    "shocking",
    "bombshell",
    "explosive",
    "stunning",
    "unbelievable",
    "outrageous",
    "scandal",
    "secret",
    "breaking",
    "exclusive",
    "urgent",
];

/// Emotion-laden vocabulary. Normalized by one hit per 30 words.
pub(crate) const EMOTIONAL_WORDS: &[&str] = &[
    "angry",
    "furious",
    "outraged",
    "devastated",
    "thrilled",
    "excited",
    "terrified",
    "scared",
    "afraid",
    "happy",
    "sad",
    "disgusted",
    "hate",
    "love",
];

/// Clickbait phrasing. Presence of a phrase contributes a flat 0.2.
pub(crate) const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe",
    "mind blowing",
    "what happens next",
    "this is why",
    "here's why",
    "find out",
    "the truth about",
    "will shock you",
];

/// Partisan vocabulary. Normalized by one hit per 40 words.
pub(crate) const POLITICAL_TERMS: &[&str] = &[
    "liberal",
    "conservative",
    "democrat",
    "republican",
    "leftist",
    "right-wing",
    "radical",
    "socialist",
    "fascist",
    "communist",
    "trump",
    "biden",
];

/// Phrases that signal an attributed source. Every occurrence counts.
pub(crate) const SOURCE_PHRASES: &[&str] = &[
    "according to",
    "said that",
    "reported by",
    "study shows",
    "research indicates",
    "experts say",
    "sources confirm",
    "data shows",
    "evidence suggests",
];

/// Commonly misspelled words used as a spell-check proxy.
pub(crate) const MISSPELLED_WORDS: &[&str] = &[
    "definately",
    "seperate",
    "wierd",
    "recieve",
    "untill",
    "occured",
    "goverment",
    "suprise",
    "accomodate",
    "begining",
    "beleive",
    "concious",
    "foriegn",
];

/// Passive-construction phrases. Every occurrence counts.
pub(crate) const PASSIVE_PHRASES: &[&str] = &[
    "was made",
    "were made",
    "has been",
    "have been",
    "was done",
    "were done",
    "is being",
    "are being",
    "was given",
    "were given",
];

fn word_alternation(words: &[&str]) -> Regex {
    let alternatives = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).expect("word lexicon pattern is valid")
}

fn phrase_alternation(phrases: &[&str]) -> Regex {
    let alternatives = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(?:{alternatives})")).expect("phrase lexicon pattern is valid")
}

pub(crate) static SENSATIONALIST: Lazy<Regex> =
    Lazy::new(|| word_alternation(SENSATIONALIST_WORDS));
pub(crate) static EMOTIONAL: Lazy<Regex> = Lazy::new(|| word_alternation(EMOTIONAL_WORDS));
pub(crate) static POLITICAL: Lazy<Regex> = Lazy::new(|| word_alternation(POLITICAL_TERMS));
pub(crate) static MISSPELLED: Lazy<Regex> = Lazy::new(|| word_alternation(MISSPELLED_WORDS));
pub(crate) static CITATIONS: Lazy<Regex> = Lazy::new(|| phrase_alternation(SOURCE_PHRASES));
pub(crate) static PASSIVE: Lazy<Regex> = Lazy::new(|| phrase_alternation(PASSIVE_PHRASES));

/// Maximal runs of word characters; defines `total_words`.
pub(crate) static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word token pattern is valid"));

/// All-uppercase tokens of length >= 2, matched against original-case text.
pub(crate) static ALL_CAPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("all-caps pattern is valid"));

/// Sentence delimiters; consecutive delimiters collapse to one split.
pub(crate) static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern is valid"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_matchers_respect_boundaries() {
        // "secret" is a list entry; "secretly" must not fire it.
        assert_eq!(SENSATIONALIST.find_iter("acted secretly").count(), 0);
        assert_eq!(SENSATIONALIST.find_iter("a secret plan").count(), 1);
    }

    #[test]
    fn word_matchers_are_case_insensitive() {
        assert_eq!(SENSATIONALIST.find_iter("SHOCKING Shocking shocking").count(), 3);
    }

    #[test]
    fn hyphenated_terms_match_whole() {
        assert_eq!(POLITICAL.find_iter("a right-wing pundit").count(), 1);
        // The bare halves are not list entries.
        assert_eq!(POLITICAL.find_iter("turn right at the wing").count(), 0);
    }

    #[test]
    fn phrase_matchers_count_every_occurrence() {
        let text = "according to one study, according to another";
        assert_eq!(CITATIONS.find_iter(text).count(), 2);
    }

    #[test]
    fn all_caps_requires_two_letters_and_case() {
        assert_eq!(ALL_CAPS.find_iter("WOW this IS A BIG deal").count(), 3);
        assert_eq!(ALL_CAPS.find_iter("no caps here").count(), 0);
    }
}
