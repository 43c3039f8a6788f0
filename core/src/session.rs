use crate::error::{Error, Result};
use crate::index::SearchIndex;
use crate::rank::{QueryVector, RankedResult};

/// Outcome of the most recent query.
#[derive(Debug, Clone)]
pub struct LastQuery {
    pub query: QueryVector,
    pub results: Vec<RankedResult>,
}

/// Read-only index plus the result list of the last query.
pub struct Session<'a> {
    index: &'a SearchIndex,
    last: Option<LastQuery>,
}

impl<'a> Session<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self { index, last: None }
    }

    pub fn index(&self) -> &'a SearchIndex {
        self.index
    }

    /// Run a query and replace the previous results. On error the previous
    /// results are left as they were.
    pub fn query(&mut self, text: &str) -> Result<&LastQuery> {
        let query = self.index.vectorize_query(text)?;
        let results = self.index.rank_vector(&query.vector)?;
        Ok(&*self.last.insert(LastQuery { query, results }))
    }

    /// `None` until the first successful query.
    pub fn last(&self) -> Option<&LastQuery> {
        self.last.as_ref()
    }

    /// Result at `index` of the last query; `Ok(None)` when nothing was queried yet.
    pub fn result(&self, index: usize) -> Result<Option<&RankedResult>> {
        let Some(last) = &self.last else {
            return Ok(None);
        };
        last.results
            .get(index)
            .map(Some)
            .ok_or_else(|| Error::ResultOutOfRange { index, len: last.results.len() })
    }
}
