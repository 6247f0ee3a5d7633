use crate::error::{Error, Result};

/// One validated search, built after the input gate has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-form keyword, sent verbatim (already trimmed by the caller)
    pub query: String,
    /// Maximum number of results the API should return
    pub limit: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: u32) -> Result<Self> {
        let query = query.into();
        if query.is_empty() {
            return Err(Error::Input("keyword must not be empty".to_string()));
        }
        if limit == 0 {
            return Err(Error::Input("result count must be a positive number".to_string()));
        }

        Ok(Self { query, limit })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// GIF title; untitled GIFs come back as an empty string
    pub title: String,
    /// Link to the GIF's page
    pub url: String,
}

/// Decoded response for one query. `results` keeps the API's array as-is,
/// `null` slots included; they count toward `count` and item numbering but
/// are never printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub query: String,
    pub count: usize,
    pub results: Vec<Option<ResultItem>>,
}

impl SearchResult {
    pub fn new(query: impl Into<String>, results: Vec<Option<ResultItem>>) -> Self {
        Self {
            query: query.into(),
            count: results.len(),
            results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Non-null items with their 1-based position in the response array.
    pub fn items(&self) -> impl Iterator<Item = (usize, &ResultItem)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_ref().map(|item| (i + 1, item)))
    }
}
