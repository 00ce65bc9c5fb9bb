//! Pardot API (v3/v4) client implementing [`EntityFetcher`].
//!
//! [`EntityFetcher`]: pardot_embed_application::ports::EntityFetcher

mod client;
mod response;

pub use client::PardotApiClient;
pub use response::{parse_login, parse_query, QueryPage};
