//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is kept in separate structs:
//!
//! - [`ShortLink`] - A stored code to destination mapping with its visit counter
//! - [`NewShortLink`] - Insert payload for the store
//! - [`CreateShortLink`] - Creation request accepted by the service

pub mod short_link;

pub use short_link::{
    CreateShortLink, MAX_CODE_LENGTH, MAX_DESTINATION_LENGTH, NewShortLink, ShortLink,
};
