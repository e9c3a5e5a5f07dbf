pub mod dto;
pub mod error;
pub mod input;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use store::{Database, MemoryStore, SharedStore, Store};
