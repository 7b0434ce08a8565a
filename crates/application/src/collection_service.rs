//! Collection retrieval and projection service.
//!
//! Fetches one collection through the [`crate::CollectionSource`] port,
//! normalizes the payload and projects it into the response shape the caller
//! asked for.

mod config;
mod projection;
mod service;

#[cfg(test)]
mod tests;

pub use config::WindowSelectionMissPolicy;
pub use projection::CollectionProjection;
pub use service::CollectionService;
