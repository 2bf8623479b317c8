//! Zones and their registrar health.

use serde::{Deserialize, Serialize};

use crate::listing::{QueryInfo, ResultInfo};

/// Metadata of a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account_name: String,
    /// Zone type, e.g. `PRIMARY`.
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub dnssec_status: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub resource_record_count: u32,
    #[serde(default)]
    pub last_modified_date_time: String,
}

/// Name servers of a zone grouped by the state the registrar reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameServers {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ok: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incorrect: Vec<String>,
}

impl NameServers {
    pub fn is_empty(&self) -> bool {
        self.ok.is_empty()
            && self.unknown.is_empty()
            && self.missing.is_empty()
            && self.incorrect.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarInfo {
    #[serde(default)]
    pub registrar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whois_expiration: Option<String>,
    #[serde(default, skip_serializing_if = "NameServers::is_empty")]
    pub name_servers: NameServers,
}

/// An address or address range allowed to transfer the zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictIp {
    #[serde(rename = "singleIP", default, skip_serializing_if = "Option::is_none")]
    pub single_ip: Option<String>,
    #[serde(rename = "startIP", default, skip_serializing_if = "Option::is_none")]
    pub start_ip: Option<String>,
    #[serde(
        rename = "EndIP",
        alias = "endIP",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end_ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(default)]
    pub properties: ZoneProperties,
    #[serde(default)]
    pub registrar_info: RegistrarInfo,
    #[serde(
        rename = "restrictIpList",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub restrict_ips: Vec<RestrictIp>,
}

/// Response of the zone listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneList {
    #[serde(default)]
    pub query_info: QueryInfo,
    #[serde(default)]
    pub result_info: ResultInfo,
    #[serde(default)]
    pub zones: Vec<Zone>,
}
