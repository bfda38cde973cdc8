//! # screensheet
//!
//! Breakpoint-aware stylesheet composition with incremental live patching.
//!
//! Declarations (style rules and CSS custom properties) are grouped by named
//! responsive breakpoints ("screens") and rendered in two contexts that must
//! agree byte for byte: a full [`compose`](css::compose()) of the whole
//! stylesheet, and per-declaration [fragments](css::fragment) that a
//! [`Patcher`](patch::Patcher) writes into an already-rendered document.
//!
//! ## Core Systems
//!
//! - **[`screen`]** — Screen registry, breakpoint widths and ordering
//! - **[`css`]** — Declaration model, store, shared formatting, composer, fragment renderer
//! - **[`context`]** — The owned registry + store passed to both contexts
//! - **[`dom`]** — Slotmap-backed document that receives patched fragments
//! - **[`patch`]** — Patcher, document seam, live-edit feed
//! - **[`manager`]** — Handle-bound stylesheet markup and preview document
//! - **[`config`]** — Handle, anchor naming, preview block class

// Foundation
pub mod config;
pub mod screen;

// Rendering
pub mod context;
pub mod css;

// Incremental context
pub mod dom;
pub mod patch;

// Host surface
pub mod manager;

pub use config::StylesConfig;
pub use context::StyleContext;
pub use manager::StyleManager;
pub use screen::{Screen, ScreenRegistry, Width, DEFAULT_SCREEN};
