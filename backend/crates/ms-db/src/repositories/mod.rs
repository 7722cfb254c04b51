pub mod identity_map_repository;
pub mod session_repository;
