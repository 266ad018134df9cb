//! Clients for non-chat remote APIs.

pub mod news;

pub use news::{Headline, NewsClient, NewsSettings};
