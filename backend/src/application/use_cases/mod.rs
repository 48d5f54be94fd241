pub mod add_point;
pub mod delete_collection;
pub mod error;
pub mod search;

pub use add_point::AddPoint;
pub use delete_collection::DeleteCollection;
pub use error::{BridgeError, BridgeResult};
pub use search::SearchSimilarPoints;
