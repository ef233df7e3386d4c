pub mod actions;
pub mod classify;
pub mod config;
pub mod error;
pub mod host;
pub mod note;
pub mod ui;

pub use error::{ReleaseNoteError, Result};
