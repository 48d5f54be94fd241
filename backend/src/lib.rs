/// HTTP bridge that turns search/add/delete requests into Qdrant calls,
/// embedding text through a configurable provider first.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
