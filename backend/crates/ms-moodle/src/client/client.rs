use crate::{MoodleError, MoodleResult, RawResponse, form_params};

use ms_config::{MoodleConfig, SsoConfig};
use ms_core::RemoteFunction;

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::SET_COOKIE;
use reqwest::{Client as ReqwestClient, Method, StatusCode, redirect};
use serde_json::Value;

/// REST entry point, relative to the site root
pub const REST_SERVER_PATH: &str = "/webservice/rest/server.php";
const REST_FORMAT: &str = "json";

/// HTTP client for a Moodle site
pub struct MoodleClient {
    pub base_url: String,
    token: String,
    client: ReqwestClient,
    custom_client: ReqwestClient,
}

impl MoodleClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Site root (e.g., "https://lms.example.com")
    /// * `token` - Web-service token
    /// * `timeout` - Per-request timeout
    /// * `accept_invalid_certs` - Skip certificate checks on custom endpoints
    pub fn new(
        base_url: &str,
        token: &str,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> MoodleResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        // Custom endpoints answer with cookies that must not be lost to a redirect.
        let custom_client = ReqwestClient::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .tls_danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
            client,
            custom_client,
        })
    }

    pub fn from_config(moodle: &MoodleConfig, sso: &SsoConfig) -> MoodleResult<Self> {
        Self::new(
            &moodle.url,
            &moodle.token,
            Duration::from_secs(moodle.timeout_secs),
            sso.accept_invalid_certs,
        )
    }

    /// Both a site URL and a token are present.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.token.is_empty()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Call a web-service function.
    ///
    /// `params` must be a JSON object; it is sent PHP-style form encoded.
    /// An empty successful body decodes to `Value::Null`.
    pub async fn request(&self, function: RemoteFunction, params: &Value) -> MoodleResult<Value> {
        if !self.is_configured() {
            return Err(MoodleError::not_configured());
        }

        let mut form = vec![
            (String::from("wstoken"), self.token.clone()),
            (String::from("wsfunction"), String::from(function.as_str())),
            (String::from("moodlewsrestformat"), String::from(REST_FORMAT)),
        ];
        form.extend(form_params::flatten(params));

        debug!("Moodle request: {}", function.as_str());

        let response = self
            .client
            .post(self.url(REST_SERVER_PATH))
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        let result = decode_response(status, &text);
        if let Err(MoodleError::Remote { code, message, .. }) = &result {
            warn!(
                "Moodle function {} failed: {} ({})",
                function.as_str(),
                message,
                code
            );
        }

        result
    }

    /// Call a non web-service endpoint on the site.
    ///
    /// GET sends `form` as the query string, every other method as a
    /// urlencoded body. Redirects are not followed.
    pub async fn custom_request(
        &self,
        path: &str,
        form: &[(&str, &str)],
        method: Method,
    ) -> MoodleResult<RawResponse> {
        if self.base_url.is_empty() {
            return Err(MoodleError::not_configured());
        }

        let url = self.url(path);
        debug!("Moodle custom request: {} {}", method, url);

        let request = if method == Method::GET {
            self.custom_client.get(url).query(form)
        } else {
            self.custom_client.request(method, url).form(form)
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(String::from)
            .collect();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            set_cookies,
            body,
        })
    }
}

/// Turn an HTTP status and body into a web-service result.
pub(crate) fn decode_response(status: StatusCode, text: &str) -> MoodleResult<Value> {
    if text.trim().is_empty() {
        if status.is_success() {
            return Ok(Value::Null);
        }
        return Err(MoodleError::unexpected(format!(
            "HTTP {} with empty body",
            status
        )));
    }

    let body: Value = serde_json::from_str(text)?;

    if let Some(error) = remote_error(&body) {
        return Err(error);
    }

    if !status.is_success() {
        return Err(MoodleError::unexpected(format!("HTTP {}", status)));
    }

    Ok(body)
}

/// Moodle reports failures as a 200 with `{exception, errorcode, message}`.
fn remote_error(body: &Value) -> Option<MoodleError> {
    let object = body.as_object()?;

    if !object.contains_key("exception") && !object.contains_key("errorcode") {
        return None;
    }

    let code = object
        .get("errorcode")
        .or_else(|| object.get("exception"))
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    let message = object
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error");

    Some(MoodleError::remote(code, message))
}
