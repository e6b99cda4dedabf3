pub mod config;
pub mod controller;
pub mod engine;
pub mod table;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
