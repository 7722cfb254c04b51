//! Admin diagnostic: which user functions the configured Moodle token may call.

use crate::MoodleApi;

use ms_core::{CapabilityFlags, RemoteFunction};
use ms_moodle::MoodleError;

use log::{info, warn};
use serde::Serialize;
use serde_json::{Value, json};

pub const NOT_CONFIGURED_MESSAGE: &str = "Can't make a request to Moodle";
pub const NO_RESPONSE_MESSAGE: &str = "There is no Moodle host response";
pub const WRONG_RESPONSE_MESSAGE: &str = "Moodle return wrong response";
const LOCAL_ERROR_CODE: &str = "400";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CapabilityReport {
    Available {
        sitename: String,
        #[serde(flatten)]
        flags: CapabilityFlags,
    },
    Error {
        code: String,
        message: String,
    },
}

impl CapabilityReport {
    fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Ask Moodle for its site info and derive the capability flags.
pub async fn check_capabilities(moodle: &dyn MoodleApi) -> CapabilityReport {
    if !moodle.is_configured() {
        return CapabilityReport::error(LOCAL_ERROR_CODE, NOT_CONFIGURED_MESSAGE);
    }

    let site_info = match moodle
        .request(RemoteFunction::GetSiteInfo, &json!({}))
        .await
    {
        Ok(site_info) => site_info,
        Err(MoodleError::Remote { code, message, .. }) => {
            warn!("Moodle refused site info: {} ({})", message, code);
            return CapabilityReport::error(code, message);
        }
        Err(MoodleError::NotConfigured { .. }) => {
            return CapabilityReport::error(LOCAL_ERROR_CODE, NOT_CONFIGURED_MESSAGE);
        }
        Err(err) => {
            warn!("Moodle site info request failed: {}", err);
            return CapabilityReport::error(LOCAL_ERROR_CODE, NO_RESPONSE_MESSAGE);
        }
    };

    if is_empty_response(&site_info) {
        return CapabilityReport::error(LOCAL_ERROR_CODE, NO_RESPONSE_MESSAGE);
    }

    let sitename = site_info
        .get("sitename")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if sitename.is_empty() {
        return CapabilityReport::error(LOCAL_ERROR_CODE, WRONG_RESPONSE_MESSAGE);
    }

    let names = site_info
        .get("functions")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|function| function.get("name").and_then(Value::as_str));
    let flags = CapabilityFlags::from_function_names(names);

    info!(
        "Moodle '{}' capabilities: create={}, update={}, delete={}",
        sitename, flags.create_users, flags.update_users, flags.delete_users
    );

    CapabilityReport::Available {
        sitename: sitename.to_string(),
        flags,
    }
}

fn is_empty_response(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Render the report as an admin HTML fragment.
pub fn render_html(report: &CapabilityReport) -> String {
    match report {
        CapabilityReport::Error { code, message } => format!(
            concat!(
                r#"<div class="alert alert-danger row">"#,
                r#"<div class="col-2 h1">{}</div>"#,
                r#"<div class="col-10">{}</div>"#,
                "</div>"
            ),
            escape_html(code),
            escape_html(message)
        ),
        CapabilityReport::Available { flags, .. } => {
            let mut html = String::from(r#"<ul class="list-group list-group-flush">"#);
            for (function, available) in flags.entries() {
                html.push_str(&render_entry(function, available));
            }
            html.push_str("</ul>");
            html
        }
    }
}

fn render_entry(function: RemoteFunction, available: bool) -> String {
    let (badge, verb, state) = if available {
        (
            r#"<span class="badge bg-success me-3"><i class="fa-solid fa-check"></i></span>"#,
            "can",
            "available",
        )
    } else {
        (
            r#"<span class="badge bg-danger me-3"><i class="fa-solid fa-xmark"></i></span>"#,
            "cannot",
            "not available",
        )
    };

    format!(
        r#"<li class="list-group-item">{}<code>{}</code> is {}: this service {} {}</li>"#,
        badge,
        function.as_str(),
        state,
        verb,
        action_phrase(function)
    )
}

fn action_phrase(function: RemoteFunction) -> &'static str {
    match function {
        RemoteFunction::CreateUsers => "create Moodle users",
        RemoteFunction::UpdateUsers => "update Moodle users",
        RemoteFunction::DeleteUsers => "delete Moodle users",
        RemoteFunction::GetSiteInfo => "read site info",
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
