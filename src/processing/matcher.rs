//! Multi-phrase substring presence matching

use crate::error::Result;
use aho_corasick::{AhoCorasick, MatchKind};

/// Answers "which of these phrases occur anywhere in the text" in one pass.
///
/// A phrase is present when it appears as a contiguous substring; there is no
/// tokenization or word-boundary handling, so `"r"` is present in `"rust"`.
/// Results are always reported in phrase declaration order.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    phrases: Vec<String>,
    // Declared phrase index -> index of its (deduplicated) automaton pattern
    slots: Vec<usize>,
    pattern_count: usize,
}

impl PhraseMatcher {
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(|p| p.as_ref().to_string()).collect();

        let mut patterns: Vec<String> = Vec::new();
        let mut slots = Vec::with_capacity(phrases.len());
        for phrase in &phrases {
            let lowered = phrase.to_lowercase();
            let slot = match patterns.iter().position(|p| *p == lowered) {
                Some(existing) => existing,
                None => {
                    patterns.push(lowered);
                    patterns.len() - 1
                }
            };
            slots.push(slot);
        }

        // Standard semantics are required for overlapping search, which is what
        // lets "java" and "javascript" both register on the same text.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&patterns)?;

        Ok(Self {
            automaton,
            phrases,
            slots,
            pattern_count: patterns.len(),
        })
    }

    /// Presence flag for every declared phrase, in declaration order
    pub fn presence(&self, text: &str) -> Vec<bool> {
        let mut seen = vec![false; self.pattern_count];
        let mut remaining = self.pattern_count;

        if remaining > 0 {
            for mat in self.automaton.find_overlapping_iter(text) {
                let idx = mat.pattern().as_usize();
                if !seen[idx] {
                    seen[idx] = true;
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }

        self.slots.iter().map(|&slot| seen[slot]).collect()
    }

    /// Declared phrases present in the text
    pub fn matched(&self, text: &str) -> Vec<&str> {
        self.partition(text).0
    }

    /// Declared phrases absent from the text
    pub fn missing(&self, text: &str) -> Vec<&str> {
        self.partition(text).1
    }

    /// Split declared phrases into (present, absent), both in declaration order
    pub fn partition(&self, text: &str) -> (Vec<&str>, Vec<&str>) {
        let mut present = Vec::new();
        let mut absent = Vec::new();
        for (phrase, found) in self.phrases.iter().zip(self.presence(text)) {
            if found {
                present.push(phrase.as_str());
            } else {
                absent.push(phrase.as_str());
            }
        }
        (present, absent)
    }

    pub fn count(&self, text: &str) -> usize {
        self.presence(text).into_iter().filter(|&found| found).count()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_phrases_are_all_reported() {
        let matcher = PhraseMatcher::new(["java", "javascript", "script"]).unwrap();
        assert_eq!(matcher.presence("i write javascript"), vec![true, true, true]);
    }

    #[test]
    fn test_substring_semantics() {
        let matcher = PhraseMatcher::new(["r", "go"]).unwrap();
        let (present, absent) = matcher.partition("rust developer");
        assert_eq!(present, vec!["r"]);
        assert_eq!(absent, vec!["go"]);
    }

    #[test]
    fn test_case_insensitive_on_ascii() {
        let matcher = PhraseMatcher::new(["Node.js", "SQL"]).unwrap();
        assert_eq!(matcher.matched("NODE.JS and sql"), vec!["Node.js", "SQL"]);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let matcher = PhraseMatcher::new(["docker", "aws", "linux"]).unwrap();
        assert_eq!(matcher.matched("linux, aws and docker"), vec!["docker", "aws", "linux"]);
        assert_eq!(matcher.count("linux only"), 1);
    }

    #[test]
    fn test_duplicate_phrases() {
        let matcher = PhraseMatcher::new(["git", "sql", "git"]).unwrap();
        assert_eq!(matcher.presence("git"), vec![true, false, true]);
        assert_eq!(matcher.missing("git"), vec!["sql"]);
    }

    #[test]
    fn test_empty_matcher_and_text() {
        let matcher = PhraseMatcher::new(Vec::<String>::new()).unwrap();
        assert!(matcher.is_empty());
        assert!(matcher.presence("anything").is_empty());

        let matcher = PhraseMatcher::new(["python"]).unwrap();
        assert_eq!(matcher.presence(""), vec![false]);
    }
}
