use serde::{Deserialize, Serialize};

/// A cookie received from the LMS login endpoint, rescoped for the end user's browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
}

impl RelayCookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// Render as a session-scoped `Set-Cookie` header value.
    pub fn to_set_cookie_header(&self) -> String {
        let mut header = format!("{}={}; Path={}", self.name, self.value, self.path);
        if !self.domain.is_empty() {
            header.push_str("; Domain=");
            header.push_str(&self.domain);
        }
        header
    }
}
