pub mod points;
pub mod search;

pub use points::{AddPointRequest, AddPointResponse, DeleteCollectionRequest, StatusResponse};
pub use search::{ScoredPointResponse, SearchParams};
