pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod store;
