//! Core domain logic for Shellcase
//!
//! This crate contains the command tree model, the manifest model and the
//! error types shared by the loader and the script generator.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::CompletionError;
