pub mod cookie_jar;
pub mod set_cookie;
