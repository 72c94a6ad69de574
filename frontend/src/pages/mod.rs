//! Routed pages.
//!
//! - [`LandingPage`] - `/`
//! - [`PredictPage`] - `/predict`

mod landing;
mod predict;

pub use landing::*;
pub use predict::*;
