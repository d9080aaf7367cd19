use serde::Deserialize;

use crate::domain::PageRequest;
use crate::error::{RestError, RestResult};

pub mod companies;
pub mod employees;

/// Optional `pageNumber`/`pageSize` query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    page_number: Option<i64>,
    page_size: Option<i64>,
}

impl PageQuery {
    /// The requested page, `None` when the whole listing is requested
    pub fn page(&self) -> RestResult<Option<PageRequest>> {
        PageRequest::from_query(self.page_number, self.page_size).map_err(RestError::BadRequest)
    }
}
