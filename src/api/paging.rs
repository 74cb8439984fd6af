//! Response envelopes and paged results.

use serde::{Deserialize, Serialize};

/// One page of items plus the total across all pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_records: u64,
}

impl<T> PagedResult<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether more records exist beyond this page
    pub fn has_more(&self) -> bool {
        (self.items.len() as u64) < self.total_records
    }
}

/// `{ "data": [...] }`; a missing or null `data` reads as no items
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// `{ "data": [...], "totalRecords": N }`
#[derive(Debug, Deserialize)]
pub(crate) struct PagedEnvelope<T> {
    pub data: Vec<T>,
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
}

impl<T> PagedEnvelope<T> {
    /// Enforce `items <= total_records`
    pub fn into_result(self) -> Result<PagedResult<T>, String> {
        if self.data.len() as u64 > self.total_records {
            return Err(format!(
                "page holds {} items but totalRecords is {}",
                self.data.len(),
                self.total_records
            ));
        }

        Ok(PagedResult {
            items: self.data,
            total_records: self.total_records,
        })
    }
}
