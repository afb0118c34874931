//! Shared, UI-framework-agnostic core for the Empowering the Nation site.
//!
//! Everything in this crate is pure data and pure functions: form field
//! validation, the notification lifecycle model, the course catalogue,
//! quote calculation and site configuration. The `frontend` crate binds
//! these to the DOM; nothing here may depend on a browser environment.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
