//! Service library

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
