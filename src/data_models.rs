use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ResultError;

pub type Fields = HashMap<String, String>;

/// A half-open `[beginning, end)` span of characters to be highlighted.
///
/// Indices count chars, not bytes. On the wire either
/// `{"beginning": 0, "end": 2}` or `[0, 2]` is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "RawHighlightRange")]
pub struct HighlightRange {
    pub beginning: usize,
    pub end: usize,
}

impl HighlightRange {
    pub fn new(beginning: usize, end: usize) -> HighlightRange {
        HighlightRange { beginning, end }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHighlightRange {
    Object { beginning: usize, end: usize },
    Pair(usize, usize),
}

impl From<RawHighlightRange> for HighlightRange {
    fn from(raw: RawHighlightRange) -> Self {
        match raw {
            RawHighlightRange::Object { beginning, end } | RawHighlightRange::Pair(beginning, end) => {
                HighlightRange { beginning, end }
            }
        }
    }
}

/// Absent and `null` both mean "no ranges".
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub fields: Fields,
}

impl Entry {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Entry {
        Entry {
            url: url.into(),
            title: title.into(),
            fields: Fields::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Excerpt {
    pub text: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub highlight_ranges: Vec<HighlightRange>,
    #[serde(default)]
    pub score: f64,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub internal_annotations: Vec<serde_json::Value>,
    #[serde(default)]
    pub fields: Fields,
}

impl Excerpt {
    pub fn new(text: impl Into<String>, highlight_ranges: Vec<HighlightRange>) -> Excerpt {
        Excerpt {
            text: text.into(),
            highlight_ranges,
            score: 0.0,
            internal_annotations: Vec::new(),
            fields: Fields::new(),
        }
    }
}

/// One matched document as produced by the upstream search stage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub entry: Entry,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub excerpts: Vec<Excerpt>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub title_highlight_ranges: Vec<HighlightRange>,
    #[serde(default)]
    pub score: f64,
}

impl SearchResult {
    pub fn new(entry: Entry) -> SearchResult {
        SearchResult {
            entry,
            excerpts: Vec::new(),
            title_highlight_ranges: Vec::new(),
            score: 0.0,
        }
    }

    pub fn with_title_ranges(mut self, ranges: Vec<HighlightRange>) -> SearchResult {
        self.title_highlight_ranges = ranges;
        self
    }

    pub fn with_excerpt(mut self, excerpt: Excerpt) -> SearchResult {
        self.excerpts.push(excerpt);
        self
    }

    /// Checks the invariants the renderer assumes but never enforces.
    pub fn validate(&self) -> Result<(), ResultError> {
        if self.entry.url.is_empty() {
            return Err(ResultError::EmptyUrl);
        }
        validate_ranges("title", &self.entry.title, &self.title_highlight_ranges)?;
        for (idx, excerpt) in self.excerpts.iter().enumerate() {
            validate_ranges(
                &format!("excerpt {idx}"),
                &excerpt.text,
                &excerpt.highlight_ranges,
            )?;
        }
        Ok(())
    }
}

fn validate_ranges(location: &str, text: &str, ranges: &[HighlightRange]) -> Result<(), ResultError> {
    let len = text.chars().count();
    let mut previous_end = 0usize;
    for range in ranges {
        if range.beginning > range.end {
            return Err(ResultError::InvertedRange {
                location: location.to_string(),
                beginning: range.beginning,
                end: range.end,
            });
        }
        if range.end > len {
            return Err(ResultError::RangeOutOfBounds {
                location: location.to_string(),
                beginning: range.beginning,
                end: range.end,
                len,
            });
        }
        if range.beginning < previous_end {
            return Err(ResultError::UnorderedRange {
                location: location.to_string(),
                beginning: range.beginning,
                previous_end,
            });
        }
        previous_end = range.end;
    }
    Ok(())
}

/// The full response of a search, as handed to the UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SearchOutput {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_hit_count: usize,
    #[serde(default)]
    pub url_prefix: String,
}

impl SearchOutput {
    /// Results with `url_prefix` prepended to every entry url.
    pub fn into_prefixed_results(self) -> Vec<SearchResult> {
        let prefix = self.url_prefix;
        self.results
            .into_iter()
            .map(|mut result| {
                if !prefix.is_empty() {
                    result.entry.url.insert_str(0, &prefix);
                }
                result
            })
            .collect()
    }
}
