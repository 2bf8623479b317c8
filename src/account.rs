//! Account and API version records.

use serde::{Deserialize, Serialize};

use crate::listing::ResultInfo;
use crate::utils::deserialize_to_i64;

/// Version of the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

/// One account the authenticated user has access to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub account_holder_user_name: String,
    #[serde(default)]
    pub account_owner_user_name: String,
    #[serde(default, deserialize_with = "deserialize_to_i64")]
    pub number_of_users: i64,
    #[serde(default, deserialize_with = "deserialize_to_i64")]
    pub number_of_groups: i64,
}

/// Response of the account listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountList {
    #[serde(default)]
    pub result_info: ResultInfo,
    #[serde(default)]
    pub accounts: Vec<AccountInfo>,
}
