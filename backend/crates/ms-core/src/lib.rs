pub mod cookies;
pub mod error;
pub mod events;
pub mod models;
pub mod secret;


pub use cookies::cookie_jar::{self, HTTP_ONLY_PREFIX, JarCookie};
pub use cookies::set_cookie::{self, SetCookie};
pub use error::{CoreError, Result as CoreResult};
pub use events::event_kind::EventKind;
pub use events::event_outcome::{EventOutcome, MessageLevel, UserMessage};
pub use events::user_event::{
    AfterDeleteEvent, AfterLoginEvent, AfterSaveEvent, BeforeSaveEvent, UserEvent,
};
pub use models::capability_flags::CapabilityFlags;
pub use models::identity_pair::IdentityPair;
pub use models::local_user::LocalUser;
pub use models::relay_cookie::RelayCookie;
pub use models::remote_function::RemoteFunction;
pub use models::remote_user::{
    CreatedRemoteUser, DeleteUsersPayload, NewRemoteUser, RemoteUserUpdate, UsersPayload,
};
pub use secret::tokens_match;

pub use error_location::ErrorLocation;
