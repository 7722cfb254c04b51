use crate::JarCookie;

use chrono::NaiveDateTime;

/// Date layouts seen in `Expires`, after the weekday is stripped.
const EXPIRES_FORMATS: [&str; 3] = [
    "%d %b %Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%y %H:%M:%S",
];

/// A parsed `Set-Cookie` response header.
///
/// Only the attributes needed to relay or store the cookie are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub max_age: Option<i64>,
    /// `Expires` as a unix timestamp.
    pub expires: Option<i64>,
}

impl SetCookie {
    pub fn parse(header: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut cookie = Self {
            name: name.to_string(),
            value: value.trim().trim_matches('"').to_string(),
            domain: None,
            path: None,
            secure: false,
            http_only: false,
            max_age: None,
            expires: None,
        };

        for attribute in parts {
            let (key, val) = match attribute.split_once('=') {
                Some((key, val)) => (key.trim(), Some(val.trim())),
                None => (attribute.trim(), None),
            };

            match (key.to_ascii_lowercase().as_str(), val) {
                ("domain", Some(domain)) if !domain.is_empty() => {
                    cookie.domain = Some(domain.to_string())
                }
                ("path", Some(path)) if !path.is_empty() => cookie.path = Some(path.to_string()),
                ("max-age", Some(age)) => cookie.max_age = age.parse().ok(),
                ("expires", Some(date)) => cookie.expires = parse_expires(date),
                ("secure", _) => cookie.secure = true,
                ("httponly", _) => cookie.http_only = true,
                _ => {}
            }
        }

        Some(cookie)
    }

    /// Unix time the cookie stops being valid, `None` for a session cookie.
    ///
    /// `Max-Age` wins over `Expires`.
    pub fn expires_at(&self, now: i64) -> Option<i64> {
        match self.max_age {
            Some(age) => Some(now.saturating_add(age)),
            None => self.expires,
        }
    }

    /// A cookie sent with `Max-Age <= 0` or a past `Expires` deletes the
    /// cookie instead of setting it.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at(now).is_some_and(|at| at <= now)
    }

    /// Convert to a jar entry. `default_domain` is recorded for cookies whose
    /// header carries no `Domain` attribute.
    pub fn to_jar_cookie(&self, default_domain: &str, now: i64) -> JarCookie {
        let domain = self
            .domain
            .clone()
            .unwrap_or_else(|| default_domain.to_string());

        JarCookie {
            include_subdomains: domain.starts_with('.'),
            domain,
            path: self.path.clone().unwrap_or_else(|| String::from("/")),
            secure: self.secure,
            expires: self.expires_at(now).unwrap_or(0),
            name: self.name.clone(),
            value: self.value.clone(),
            http_only: self.http_only,
        }
    }
}

/// Parse `Set-Cookie` headers the way a cookie store applies them, in order.
///
/// A cookie replaces an earlier one with the same name, domain and path.
/// An expired cookie only removes its earlier namesake. Unparsable headers
/// are skipped.
pub fn collect<'a, I>(headers: I, now: i64) -> Vec<SetCookie>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut cookies: Vec<SetCookie> = Vec::new();
    for cookie in headers.into_iter().filter_map(SetCookie::parse) {
        cookies.retain(|kept| {
            !(kept.name == cookie.name && kept.domain == cookie.domain && kept.path == cookie.path)
        });
        if !cookie.is_expired(now) {
            cookies.push(cookie);
        }
    }
    cookies
}

fn parse_expires(date: &str) -> Option<i64> {
    let date = date.trim();
    // Weekday names vary ("Thu", "Thursday") and are redundant
    let date = date.split_once(',').map_or(date, |(_, rest)| rest.trim());
    let date = date
        .strip_suffix("GMT")
        .or_else(|| date.strip_suffix("UTC"))
        .unwrap_or(date)
        .trim();

    EXPIRES_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
        .map(|datetime| datetime.and_utc().timestamp())
}
