pub mod callback;
pub mod capabilities;
pub mod error;
pub mod events;
pub mod extractors;
