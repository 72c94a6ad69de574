//! UI Components for the FraudGuard application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] / [`FeatureCards`] - Landing page content
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV selection and submission
//! - [`ErrorBanner`] - Message of the last failed submission
//! - [`ResultsSection`] - Summary counts, predictions table and reset
//! - [`BackendStatusBadge`] - Model API liveness

mod header;
mod hero;
mod upload;
mod results;
mod status;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use status::*;
pub use footer::*;

/// Workflow driven by the browser's file input.
pub type BrowserWorkflow = crate::Workflow<web_sys::File>;
