// Discourse API HTTP client.
// Handles authentication and response status checking.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{DiscliError, Result};
use crate::identity::Identity;

/// Discourse API client bound to one server and user.
pub struct DiscourseClient {
    client: Client,
    base_url: String,
    username: String,
    api_key: String,
}

impl DiscourseClient {
    /// Create a client authenticated as `identity`.
    pub fn new(identity: &Identity) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("discli/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: identity.base_url().to_string(),
            username: identity.username.clone(),
            api_key: identity.api_key.clone(),
        })
    }

    /// Absolute URL for an API endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn auth_params(&self) -> [(&'static str, &str); 2] {
        [
            ("api_key", self.api_key.as_str()),
            ("api_username", self.username.as_str()),
        ]
    }

    /// Make an authenticated GET request; credentials go in the query string.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(&self.auth_params())
            .send()
            .await?;

        check_response(response)
    }

    /// Make an authenticated PUT request; credentials go in the form body.
    pub async fn put_form(&self, endpoint: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = self.url(endpoint);
        debug!(%url, "PUT");

        let mut form: Vec<(&str, &str)> = self.auth_params().to_vec();
        form.extend_from_slice(fields);

        let response = self.client.put(&url).form(&form).send().await?;

        check_response(response)
    }
}

/// Anything but 200 is a failure carrying the actual status.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => Err(DiscliError::Remote {
            status,
            url: strip_query(response.url().as_str()).to_string(),
        }),
    }
}

/// Drop the query string so credentials never reach error messages.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
