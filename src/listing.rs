//! Envelopes that accompany every listing response.

use serde::{Deserialize, Serialize};

/// Echo of the parameters a listing was run with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reverse: bool,
    #[serde(default)]
    pub limit: u32,
}

/// Pagination metadata of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInfo {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub returned_count: u32,
}

impl ResultInfo {
    /// Whether entries remain past the ones returned.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.returned_count) < self.total_count
    }

    /// Offset to request the following page with, if there is one.
    ///
    /// ```
    /// use ultradns::listing::ResultInfo;
    ///
    /// let info = ResultInfo { total_count: 25, offset: 0, returned_count: 10 };
    /// assert_eq!(info.next_offset(), Some(10));
    /// ```
    pub fn next_offset(&self) -> Option<u32> {
        self.has_more()
            .then(|| self.offset.saturating_add(self.returned_count))
    }
}
