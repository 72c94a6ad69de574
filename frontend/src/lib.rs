//! FraudGuard - Frontend Rust/Leptos Application
//!
//! A WebAssembly client that uploads a CSV file of transactions to a
//! fraud-scoring backend and displays the returned probabilities.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  /         LandingPage       │  /predict   PredictPage       │
//! │  ├── Hero, FeatureCards      │  ├── UploadSection            │
//! │  └── BackendStatusBadge      │  └── ResultsSection           │
//! └──────────────────────────────┴──────────────────────────────┘
//!                                        │ Workflow<File>
//!                                        ▼
//!                          POST {backend}/predict (multipart)
//! ```
//!
//! # Modules
//!
//! - [`config`] - Injected configuration and display constants
//! - [`types`] - Rows, API payloads and errors
//! - [`workflow`] - Upload-and-classify state machine
//! - [`report`] - Display derivation for results
//! - [`routes`] - Route table
//! - [`services`] - Backend communication
//! - [`components`] / [`pages`] - Leptos views

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod workflow;
pub mod report;
pub mod routes;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Predictions
    PredictionRow, PredictionSummary, RiskLevel,
    // API
    PredictResponse, ServerSummary, HttpReply,
    // Status
    BackendStatus,
    // Errors
    ConfigError, SubmitRejected, WorkflowError,
};

// Workflow
pub use workflow::{SubmitTicket, UploadSelection, Workflow, WorkflowState};

// Routing
pub use routes::Page;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and the panic hook, then mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛡️ FraudGuard - Starting Leptos App");

    match AppConfig::from_build_env() {
        Ok(config) => {
            log::info!("Using backend at {}", config.backend_base_url());
            mount_to_body(move || view! { <App config=config/> });
        }
        Err(e) => {
            log::error!("Invalid configuration ({}): {}", BACKEND_URL_ENV, e);
            let message = e.to_string();
            mount_to_body(move || view! { <ConfigErrorView message=message/> });
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path=Page::Landing.path() view=pages::LandingPage/>
                    <Route path=Page::Predict.path() view=pages::PredictPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Shown instead of the router when startup configuration is invalid.
#[component]
fn ConfigErrorView(message: String) -> impl IntoView {
    view! {
        <div class="container">
            <div class="error-message">
                <p class="error-title">"Configuration error"</p>
                <p class="error-text">{message}</p>
            </div>
        </div>
    }
}
