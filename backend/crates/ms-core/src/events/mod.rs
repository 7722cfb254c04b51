pub mod event_kind;
pub mod event_outcome;
pub mod user_event;
