//! Netscape cookie-jar text format, as written by curl.
//!
//! One cookie per line, seven tab-separated fields:
//! `domain  include_subdomains  path  secure  expires  name  value`.
//! Lines starting with `#` are comments, except the `#HttpOnly_` domain
//! prefix curl uses to flag HTTP-only cookies.

use std::io::{self, BufRead};

/// Domain prefix curl writes for HTTP-only cookies.
pub const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

const NAME_FIELD: usize = 5;
const VALUE_FIELD: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarCookie {
    pub domain: String,
    pub include_subdomains: bool,
    pub path: String,
    pub secure: bool,
    /// Unix timestamp, 0 for a session cookie.
    pub expires: i64,
    pub name: String,
    pub value: String,
    pub http_only: bool,
}

impl JarCookie {
    /// Parse one jar line. Blank, comment and short lines yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let (http_only, body) = match line.strip_prefix(HTTP_ONLY_PREFIX) {
            Some(rest) => (true, rest),
            None if line.starts_with('#') => return None,
            None => (false, line),
        };

        let fields: Vec<&str> = body.split('\t').collect();
        if fields.len() <= VALUE_FIELD {
            return None;
        }

        Some(Self {
            domain: fields[0].to_string(),
            include_subdomains: fields[1].eq_ignore_ascii_case("TRUE"),
            path: fields[2].to_string(),
            secure: fields[3].eq_ignore_ascii_case("TRUE"),
            expires: fields[4].trim().parse().unwrap_or(0),
            name: fields[NAME_FIELD].to_string(),
            value: fields[VALUE_FIELD].trim().to_string(),
            http_only,
        })
    }

    /// Session cookies (`expires == 0`) never expire here.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires != 0 && self.expires <= now
    }

    /// Render as a jar line, without trailing newline.
    pub fn to_line(&self) -> String {
        let prefix = if self.http_only { HTTP_ONLY_PREFIX } else { "" };
        format!(
            "{prefix}{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.domain,
            flag(self.include_subdomains),
            self.path,
            flag(self.secure),
            self.expires,
            self.name,
            self.value
        )
    }
}

fn flag(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

/// Parse a whole jar held in memory.
pub fn parse(text: &str) -> Vec<JarCookie> {
    text.lines().filter_map(JarCookie::parse_line).collect()
}

/// Parse a jar line by line from a reader.
pub fn read<R: BufRead>(reader: R) -> io::Result<Vec<JarCookie>> {
    let mut cookies = Vec::new();
    for line in reader.lines() {
        if let Some(cookie) = JarCookie::parse_line(&line?) {
            cookies.push(cookie);
        }
    }
    Ok(cookies)
}
