pub mod batch;
pub mod error;
pub mod resolve;
pub mod table;

pub use batch::{GeotagOptions, OUTPUT_SUFFIX, geotag, load_locations, output_path_for};
pub use error::GeotagError;
pub use resolve::{Resolution, resolve_location};
pub use table::{GeoRow, GeoTable, TableSummary};

// Re-export the client types callers need to drive a batch
pub use geotag_wiki::{Coordinate, KnowledgeBase, WikiClient, WikiConfig};
