pub mod vector_store;

pub use vector_store::{
    StoreError, StoreResult, VectorStore, SEARCH_LIMIT, SEARCH_PAYLOAD_FIELDS,
};
