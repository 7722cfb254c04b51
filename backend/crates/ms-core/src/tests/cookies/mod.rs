mod cookie_jar;
mod set_cookie;
