pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{KnowledgeBase, WikiClient};
pub use config::WikiConfig;
pub use error::WikiError;
pub use model::{Coordinate, ItemId};
