/// Unprocessed reply from a custom endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Every `Set-Cookie` header value, in arrival order
    pub set_cookies: Vec<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}
