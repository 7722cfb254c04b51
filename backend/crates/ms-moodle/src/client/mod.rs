pub(crate) mod client;
pub(crate) mod raw_response;
