// Transient editing sessions: the entry list each form session accumulates.

pub mod entries;
pub mod handlers;
pub mod store;

pub use entries::{Entry, EntryView};
pub use store::SessionStore;
