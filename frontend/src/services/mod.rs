//! Backend services.
//!
//! # Services
//!
//! - [`predict`] - CSV upload to the scoring endpoint
//! - [`health`] - backend liveness probe for the landing page

pub mod predict;
pub mod health;

pub use predict::*;
pub use health::*;
