pub mod capability_flags;
pub mod identity_pair;
pub mod local_user;
pub mod relay_cookie;
pub mod remote_function;
pub mod remote_user;
