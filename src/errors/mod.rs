//! Error types shared by the store, the application context and the API.
//!
//! - **CoreError**: what an operation reports to its caller. Its
//!   [`CoreErrorKind`] is the whole taxonomy the API exposes.
//! - **StoreError**: why a backend could not load or save the document. Every
//!   store failure surfaces as [`CoreErrorKind::StorageUnavailable`].

mod core_error;
mod store;

pub use core_error::{CoreError, CoreErrorKind};
pub use store::StoreError;
