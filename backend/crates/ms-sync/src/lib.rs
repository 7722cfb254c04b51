pub mod adapters;
pub mod capabilities;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod ports;
pub mod session_check;
pub mod sso;


pub use capabilities::{CapabilityReport, check_capabilities, render_html};
pub use context::SyncContext;
pub use dispatcher::Dispatcher;
pub use error::{Result as SyncResult, SyncError};
pub use handlers::{
    AfterDeleteHandler, AfterLoginHandler, AfterSaveHandler, BeforeSaveHandler, EventHandler,
    NoopHandler,
};
pub use ports::{IdentityMap, MoodleApi, SessionLookup};
pub use session_check::{
    CHECK_SESSION_ACTION, SessionCheckRequest, SessionCheckResponse, check_session,
    check_session_at,
};
