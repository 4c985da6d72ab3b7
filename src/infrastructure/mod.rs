pub mod document;
pub mod json_repo;
pub mod storage;
