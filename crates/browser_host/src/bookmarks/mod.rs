//! Bookmark tree models and the bookmark backend service contract.

pub mod model;
pub mod service;
