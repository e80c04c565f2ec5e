//! Utility functions used across the application:
//!
//! - [`code_generator`] - Random short codes with collision checks
//! - [`url_normalizer`] - Destination URL normalization

pub mod code_generator;
pub mod url_normalizer;
