//! Storage backend implementations.

mod json_file_repository;
mod sqlite_link_repository;

pub use json_file_repository::JsonFileRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
