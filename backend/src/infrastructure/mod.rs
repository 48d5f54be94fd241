pub mod embeddings;
pub mod http;
pub mod persistence;
