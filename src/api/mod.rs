//! Feed API integration.
//!
//! This module fetches the narrative and alerts feeds over HTTP and converts
//! their JSON payloads into state types.

mod client;
mod converter;

pub use client::{FeedClient, FeedClientBuilder, FeedSource};
pub use converter::{AlertPayload, DataConverter, NarrativePayload};

#[cfg(test)]
pub use client::MockFeedSource;
