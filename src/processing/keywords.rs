//! Technical keyword extraction against a fixed vocabulary

use crate::error::Result;
use crate::processing::matcher::PhraseMatcher;

/// Vocabulary scanned for on every resume, independent of the detected role
pub const TECHNICAL_VOCABULARY: &[&str] = &[
    "java", "python", "javascript", "c++", "c#", "sql",
    "spring", "react", "angular", "node.js", "git", "agile",
    "docker", "kubernetes", "aws", "azure", "linux",
    "machine learning", "data science", "artificial intelligence",
    "devops", "ci/cd", "microservices", "rest api", "graphql",
];

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    matcher: PhraseMatcher,
}

impl KeywordExtractor {
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(TECHNICAL_VOCABULARY)
    }

    pub fn with_vocabulary<I, S>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            matcher: PhraseMatcher::new(vocabulary)?,
        })
    }

    /// Every vocabulary term present in the text, in vocabulary order
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.matcher.matched(text).into_iter().map(str::to_string).collect()
    }

    pub fn vocabulary(&self) -> &[String] {
        self.matcher.phrases()
    }
}
