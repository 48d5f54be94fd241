mod qdrant_store;

pub use qdrant_store::QdrantVectorStore;
