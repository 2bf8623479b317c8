use log::{debug, error, warn};
use reqwest::StatusCode;
use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::account::{AccountInfo, AccountList, VersionInfo};
use crate::listing::ResultInfo;
use crate::record::{RrSet, RrSetList};
use crate::session::{AuthResponse, Session};
use crate::utils::truncate_for_log;
use crate::zone::{Zone, ZoneList};
use crate::{ApiError, ClientBuilderError, ClientError, Payload};

/// Endpoint used when none is set on the builder.
pub const DEFAULT_ENDPOINT: &str = "https://restapi.ultradns.com/";

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    http_client: Option<reqwest::blocking::Client>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            http_client: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// API paths are appended to the path of the endpoint.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Uses the given HTTP client instead of a default one.
    pub fn http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used.
    ///
    /// # Errors
    /// - `InvalidEndpoint` if the endpoint can't have path segments appended to it.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        if endpoint.cannot_be_a_base() {
            return Err(ClientBuilderError::InvalidEndpoint(endpoint.to_string()));
        }
        let http_client = self.http_client.unwrap_or_default();

        Ok(Client::with_parts(endpoint, http_client))
    }
}

/// API client.
///
/// Holds the [Session] of the logged-in user. Calls other than
/// [authenticate](Client::authenticate) and [get_version](Client::get_version)
/// need a prior successful login.
pub struct Client {
    endpoint: Url,
    session: Session,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client for [DEFAULT_ENDPOINT] with an empty session.
    pub fn new() -> Self {
        let endpoint = DEFAULT_ENDPOINT
            .parse()
            .expect("default endpoint is a valid base URL");
        Self::with_parts(endpoint, reqwest::blocking::Client::new())
    }

    fn with_parts(endpoint: Url, client: reqwest::blocking::Client) -> Self {
        Self {
            endpoint,
            session: Session::default(),
            client,
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Creates a [Url] from the endpoint and the path segments, percent-encoding each segment.
    ///
    /// # Errors
    /// - `InvalidPathSegment` for `.` and `..`, which a URL path can't carry as plain segments.
    fn build_url(&self, path: &[&str]) -> Result<Url, ClientError> {
        if let Some(segment) = path.iter().find(|p| matches!(**p, "." | "..")) {
            return Err(ClientError::InvalidPathSegment(segment.to_string()));
        }

        let mut url = self.endpoint.clone();
        // Checked by the builder.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        Ok(url)
    }

    /// Sends the request, returning the body of a `200 OK` response.
    fn execute(&self, request: RequestBuilder, label: &str) -> Result<String, ClientError> {
        let resp = request.send()?;
        let status = resp.status();
        debug!("{label}: response status {status}");

        if status != StatusCode::OK {
            let err = ApiError::from_response(resp);
            warn!("{label}: {err}");
            return Err(err.into());
        }

        Ok(resp.text()?)
    }

    fn decode<T: DeserializeOwned>(text: &str, label: &str) -> Result<T, ClientError> {
        serde_json::from_str(text).map_err(|e| {
            error!("{label}: unable to decode response: {e}");
            ClientError::from(e)
        })
    }

    /// Sends a GET request to the given url, attaching the bearer token if `authorized`.
    fn get<T: DeserializeOwned>(&self, url: Url, authorized: bool) -> Result<T, ClientError> {
        let label = format!("GET {url}");
        debug!("{label}");

        let mut request = self.client.get(url);
        if authorized && self.session.is_authenticated() {
            request = request.header(reqwest::header::AUTHORIZATION, self.session.auth_header());
        }

        let text = self.execute(request, &label)?;
        debug!("{label}: response body {}", truncate_for_log(&text));
        Self::decode(&text, &label)
    }

    /// Logs in with the given credentials and stores the returned tokens.
    ///
    /// The session is only replaced once the whole exchange succeeded, so a
    /// failed login keeps any earlier tokens.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let url = self.build_url(&["v1", "authorization", "token"])?;
        let label = format!("POST {url}");
        debug!("{label}");

        let payload = Payload::password_grant(username, password);
        let request = self.client.post(url).form(payload.fields());

        // The token response is never logged.
        let text = self.execute(request, &label)?;
        let auth: AuthResponse = Self::decode(&text, &label)?;

        self.session = Session::from_auth(username, password, auth);
        debug!("authenticated as {username:?}");
        Ok(())
    }

    /// Returns the version of the API. Doesn't need a login.
    pub fn get_version(&self) -> Result<VersionInfo, ClientError> {
        let url = self.build_url(&["v1", "version"])?;
        self.get(url, false)
    }

    /// Returns the accounts of the logged-in user.
    pub fn get_account_details(&self) -> Result<Vec<AccountInfo>, ClientError> {
        Ok(self.get_account_list()?.accounts)
    }

    /// Like [get_account_details](Client::get_account_details), but keeps the pagination metadata.
    pub fn get_account_list(&self) -> Result<AccountList, ClientError> {
        let url = self.build_url(&["v1", "accounts"])?;
        self.get(url, true)
    }

    /// Returns the zones visible to the logged-in user.
    pub fn get_all_zones(&self) -> Result<Vec<Zone>, ClientError> {
        Ok(self.get_zone_list()?.zones)
    }

    /// Like [get_all_zones](Client::get_all_zones), but keeps the query and pagination metadata.
    pub fn get_zone_list(&self) -> Result<ZoneList, ClientError> {
        let url = self.build_url(&["v1", "zones"])?;
        self.get(url, true)
    }

    /// Returns one page of the record sets of a zone, along with its pagination metadata.
    ///
    /// Further pages are fetched by calling again with the offset from
    /// [ResultInfo::next_offset].
    pub fn get_rrsets(
        &self,
        zone_name: &str,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<RrSet>, ResultInfo), ClientError> {
        let list = self.get_rrset_list(zone_name, offset, limit)?;
        Ok((list.rr_sets, list.result_info))
    }

    /// Like [get_rrsets](Client::get_rrsets), but returns the whole response.
    pub fn get_rrset_list(
        &self,
        zone_name: &str,
        offset: u32,
        limit: u32,
    ) -> Result<RrSetList, ClientError> {
        let mut url = self.build_url(&["v1", "zones", zone_name, "rrsets"])?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        self.get(url, true)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
