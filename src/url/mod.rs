//! URL handling module for Ladle
//!
//! This module provides domain extraction and the heuristic domain collapse
//! used to group output documents per second-level domain.

mod domain;

// Re-export main functions
pub use domain::{collapse_domain, domain_of};
