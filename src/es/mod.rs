pub mod client;
pub mod indexer;
pub mod mapping;
pub mod search;
