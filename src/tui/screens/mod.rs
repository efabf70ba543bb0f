//! Screens: one module per view, each exposing a state type and a draw fn.

pub mod entry;
pub mod help;
pub mod submissions;

pub use entry::{EntryState, draw_entry};
pub use help::draw_help;
pub use submissions::{SubmissionsState, draw_submissions};
