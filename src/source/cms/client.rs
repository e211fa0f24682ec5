//! Thin HTTP client for the Sanity query API.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::CmsConfig;
use crate::error::{CmsError, ConfigError};

/// Envelope every query response arrives in.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Issues GROQ queries against one project/dataset.
///
/// Wraps a [`reqwest::Client`]; cheap to clone.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl CmsClient {
    /// Builds a client from configuration.
    ///
    /// Returns `Ok(None)` when the CMS is not configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CmsClient`] if the HTTP client cannot be
    /// built (e.g. TLS backend initialisation fails).
    pub fn from_config(config: &CmsConfig) -> Result<Option<Self>, ConfigError> {
        let Some((project_id, dataset)) = config.credentials() else {
            return Ok(None);
        };
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::CmsClient)?;

        let host = config.api_host.clone().unwrap_or_else(|| {
            let sub = if config.use_cdn { "apicdn" } else { "api" };
            format!("https://{project_id}.{sub}.sanity.io")
        });
        let version = config.api_version.trim_start_matches('v');
        let endpoint = format!(
            "{}/v{version}/data/query/{dataset}",
            host.trim_end_matches('/')
        );

        Ok(Some(Self {
            http,
            endpoint,
            token: config.token.clone(),
        }))
    }

    /// Returns the query endpoint (without query string).
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the full request URL. Parameter values are JSON-encoded and
    /// their names prefixed with `$`, as the query API expects.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Endpoint`] or [`CmsError::Param`] when the URL
    /// cannot be assembled.
    pub fn query_url(&self, groq: &str, params: &[(&str, &str)]) -> Result<Url, CmsError> {
        let mut pairs = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), groq.to_string()));
        for (name, value) in params {
            let encoded = serde_json::to_string(value).map_err(|source| CmsError::Param {
                name: (*name).to_string(),
                source,
            })?;
            pairs.push((format!("${name}"), encoded));
        }
        Url::parse_with_params(&self.endpoint, &pairs).map_err(|source| CmsError::Endpoint {
            url: self.endpoint.clone(),
            source,
        })
    }

    /// Runs `groq` with `params` and decodes `result` as `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport failure, a non-success status,
    /// or a body that does not decode as `T`.
    #[instrument(skip(self, groq), fields(endpoint = %self.endpoint))]
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CmsError> {
        let url = self.query_url(groq, params)?;
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| CmsError::Http {
            url: self.endpoint.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::UnexpectedStatus {
                url: self.endpoint.clone(),
                status,
            });
        }

        let body: QueryResponse<T> = response.json().await.map_err(|source| CmsError::Decode {
            url: self.endpoint.clone(),
            source,
        })?;
        tracing::debug!("cms query succeeded");
        Ok(body.result)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn configured(use_cdn: bool, api_host: Option<&str>) -> CmsConfig {
        CmsConfig {
            project_id: Some("proj42".to_string()),
            dataset: Some("production".to_string()),
            use_cdn,
            api_host: api_host.map(str::to_string),
            ..CmsConfig::default()
        }
    }

    fn client(config: &CmsConfig) -> CmsClient {
        match CmsClient::from_config(config) {
            Ok(Some(client)) => client,
            other => panic!("expected client, got {other:?}"),
        }
    }

    #[test]
    fn unconfigured_yields_no_client() {
        assert!(matches!(CmsClient::from_config(&CmsConfig::default()), Ok(None)));
    }

    #[test]
    fn endpoint_uses_live_or_cdn_host() {
        assert_eq!(
            client(&configured(false, None)).endpoint(),
            "https://proj42.api.sanity.io/v2024-01-01/data/query/production"
        );
        assert_eq!(
            client(&configured(true, None)).endpoint(),
            "https://proj42.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn host_override_wins() {
        let c = client(&configured(true, Some("http://127.0.0.1:4000/")));
        assert_eq!(
            c.endpoint(),
            "http://127.0.0.1:4000/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn params_are_json_encoded_and_prefixed() {
        let c = client(&configured(false, None));
        let Ok(url) = c.query_url("*[slug.current == $slug][0]", &[("slug", "summer-gala")]) else {
            panic!("url builds");
        };
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("$slug".to_string(), "\"summer-gala\"".to_string())));
        assert!(pairs.iter().any(|(k, _)| k == "query"));
    }
}
