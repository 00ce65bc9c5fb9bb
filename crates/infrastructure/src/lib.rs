//! Pardot Embed Infrastructure Layer
pub mod cache;
pub mod pardot;
