//! Configuration management for template loaders
//!
//! - `loader`: the [`LoaderConfig`] type and config file parsing

pub mod loader;


pub use loader::LoaderConfig;
