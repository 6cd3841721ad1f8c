// ASA REST API HTTP client
//
// Wraps `reqwest::Client` with basic auth, URL construction and response
// decoding. Endpoint groups (objects, commands) are implemented as inherent
// methods in separate files to keep this module focused on transport
// mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::DeviceResponse;
use crate::transport::TransportConfig;

/// Username and password for the ASA's HTTP basic auth.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Raw HTTP client for the ASA REST API.
///
/// Every call returns a [`DeviceResponse`] regardless of status code; only
/// failures to complete the exchange are reported as [`Error`].
pub struct AsaClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl AsaClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the device root, e.g. `https://10.0.0.1`.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// The device authority (`host` or `host:port`) as it appears in the
    /// `refLink`/`selfLink` fields of object bodies.
    pub fn host(&self) -> String {
        let host = self.base_url.host_str().unwrap_or_default();
        match self.base_url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a device API path: `{base}/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        self.url_with(path, None)
    }

    /// Build an item URL: `{base}/{collection}/{id}`.
    ///
    /// `id` is percent-encoded as a single path segment, so names holding
    /// `/`, `#` or `?` still address the object.
    pub(crate) fn item_url(&self, collection: &str, id: &str) -> Result<Url, Error> {
        self.url_with(collection, Some(id))
    }

    fn url_with(&self, path: &str, id: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(
            &self.credentials.username,
            Some(self.credentials.password.expose_secret()),
        )
    }

    /// Send a GET request.
    pub(crate) async fn get(&self, url: Url) -> Result<DeviceResponse, Error> {
        debug!("GET {}", url);
        let resp = self.authed(self.http.get(url)).send().await?;
        Self::decode(resp).await
    }

    /// Send a POST request with a JSON body.
    pub(crate) async fn post(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<DeviceResponse, Error> {
        debug!("POST {}", url);
        let resp = self.authed(self.http.post(url).json(body)).send().await?;
        Self::decode(resp).await
    }

    /// Send a PUT request with a JSON body.
    pub(crate) async fn put(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<DeviceResponse, Error> {
        debug!("PUT {}", url);
        let resp = self.authed(self.http.put(url).json(body)).send().await?;
        Self::decode(resp).await
    }

    /// Send a PATCH request with a JSON body.
    pub(crate) async fn patch(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<DeviceResponse, Error> {
        debug!("PATCH {}", url);
        let resp = self.authed(self.http.patch(url).json(body)).send().await?;
        Self::decode(resp).await
    }

    /// Send a DELETE request.
    pub(crate) async fn delete(&self, url: Url) -> Result<DeviceResponse, Error> {
        debug!("DELETE {}", url);
        let resp = self.authed(self.http.delete(url)).send().await?;
        Self::decode(resp).await
    }

    /// Read the status and decode the body as JSON.
    ///
    /// A 200 response must carry valid JSON; any other status keeps a
    /// non-JSON body out of the way, since only the status matters there.
    async fn decode(resp: reqwest::Response) -> Result<DeviceResponse, Error> {
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        trace!(status, body = %text, "response received");

        if text.trim().is_empty() {
            return Ok(DeviceResponse::empty(status));
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(DeviceResponse::new(status, Some(value))),
            Err(e) if status == 200 => Err(Error::Deserialization {
                message: e.to_string(),
                body: text,
            }),
            Err(_) => Ok(DeviceResponse::empty(status)),
        }
    }
}
