use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where relayed SSO cookies are read from.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CookieSource {
    /// `Set-Cookie` headers of the login response
    #[default]
    Headers,
    /// Legacy: a temporary Netscape cookie-jar file
    CookieJar,
}

impl CookieSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headers => "headers",
            Self::CookieJar => "cookie_jar",
        }
    }
}

impl fmt::Display for CookieSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CookieSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "headers" => Ok(Self::Headers),
            "cookie_jar" | "jar" => Ok(Self::CookieJar),
            other => Err(format!("unknown cookie source '{other}'")),
        }
    }
}
