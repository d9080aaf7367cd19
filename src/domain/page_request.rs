use std::fmt;

/// A validated, 1-based page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i64,
    size: i64,
    offset: i64,
}

impl PageRequest {
    /// Build a page request from a 1-based page number and a page size
    pub fn new(number: i64, size: i64) -> Result<Self, String> {
        if number < 1 {
            return Err("pageNumber must be at least 1".into());
        }
        if size < 1 {
            return Err("pageSize must be at least 1".into());
        }
        let offset = (number - 1)
            .checked_mul(size)
            .ok_or_else(|| String::from("Requested page is out of range"))?;

        Ok(Self {
            number,
            size,
            offset,
        })
    }

    /// Interpret the optional `pageNumber`/`pageSize` query pair.
    /// Paging is only requested when both are present.
    pub fn from_query(number: Option<i64>, size: Option<i64>) -> Result<Option<Self>, String> {
        match (number, size) {
            (None, None) => Ok(None),
            (Some(number), Some(size)) => Self::new(number, size).map(Some),
            _ => Err("pageNumber and pageSize must be provided together".into()),
        }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// Maximum number of rows in the page
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Number of rows preceding the page
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} (size {})", self.number, self.size)
    }
}
