//! DNS resource record sets.

use serde::{Deserialize, Serialize};

use crate::listing::{QueryInfo, ResultInfo};

/// A group of records sharing an owner name and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RrSet {
    #[serde(default)]
    pub owner_name: String,
    /// Record type as rendered by the API, e.g. `"A (1)"`.
    #[serde(default)]
    pub rrtype: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub rdata: Vec<String>,
}

/// Response of the record-set listing endpoint of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RrSetList {
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub query_info: QueryInfo,
    #[serde(default)]
    pub result_info: ResultInfo,
    #[serde(default)]
    pub rr_sets: Vec<RrSet>,
}
