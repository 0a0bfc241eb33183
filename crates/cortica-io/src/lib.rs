//! # cortica-io
//!
//! On-disk template repository.
//!
//! A template is a finalized mesh plus an optional left/right
//! hemisphere split index, saved under a name. A small set of built-in
//! names is protected from deletion.

pub mod templates;

pub use templates::{FsTemplateStore, TemplateRecord, TemplateStore, PROTECTED_TEMPLATES};
