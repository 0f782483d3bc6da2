//! # Domain Models
//!
//! This crate contains the pure domain types of the zone map with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod ids;
pub mod mode;
pub mod style;

pub use ids::{Color, GebietId, PostalCode, ZoneId};
pub use mode::{DisplayMode, ParseModeError};
pub use style::{AreaStyle, GebietAttributes, Legend, LegendEntry, ResolvedAttributes, ZoneAttributes};
