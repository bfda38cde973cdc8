//! Stylesheet engine: declaration model, store, shared formatting, composer, fragments.

pub mod model;
pub mod store;
pub mod format;
pub mod compose;
pub mod fragment;

pub use compose::{compose, styleblock};
pub use fragment::{Fragment, FragmentAction};
pub use model::{CustomPropertyDeclaration, DeclarationError, Properties, StyleDeclaration};
pub use store::DeclarationStore;
