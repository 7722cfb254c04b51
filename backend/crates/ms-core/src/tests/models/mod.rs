mod capability_flags;
mod relay_cookie;
mod remote_user;
