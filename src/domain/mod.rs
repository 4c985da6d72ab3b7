pub mod error;
pub mod id;
pub mod item;
pub mod repository;
