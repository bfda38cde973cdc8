//! Incremental context: fragment patching and the live-edit feed.

pub mod patcher;
pub mod live;

pub use live::{LiveEdit, LiveEditError, LiveEditor};
pub use patcher::{anchor_id, PatchError, PatchOutcome, Patcher, StyleDocument};
