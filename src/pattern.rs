use once_cell::sync::Lazy;
use regex_automata::meta::{BuildError, Regex};
use regex_automata::{Anchored, Input};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A compiled regular expression matched from the start of the candidate.
///
/// The match is anchored at offset zero but does not need to consume the
/// whole input, so `^https://a\.test` accepts `https://a.test.evil`. Add a
/// trailing `$` to require a full match.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

static MATCH_EVERYTHING: Lazy<Pattern> = Lazy::new(|| Pattern {
    source: r"^.*$".to_string(),
    regex: Regex::new(r"^.*$").expect("static pattern compiles"),
});

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let regex = Regex::new(pattern).map_err(|err| PatternError::Build {
            pattern: pattern.to_string(),
            source: Box::new(err),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// `^.*$`, the default for the enabled-URL pattern.
    pub fn match_everything() -> Self {
        MATCH_EVERYTHING.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches_prefix(&self, candidate: &str) -> bool {
        self.regex
            .is_match(Input::new(candidate).anchored(Anchored::Yes))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
