pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{MIGRATOR, connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::identity_map_repository::IdentityMapRepository;
pub use repositories::session_repository::{FRONTEND_CLIENT_ID, SessionRepository};
