//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and owns configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use plzmap_kernel::config::load_map_config;
//!
//! let cfg = load_map_config(Some("config/plzmap.toml")).unwrap();
//! println!("reading tables from {}", cfg.data.root.display());
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use plzmap_domain as domain;
