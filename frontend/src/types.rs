//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Prediction Types** - rows and summaries shown to the user
//! - **API Types** - backend response structures
//! - **Status Types** - risk buckets and backend liveness
//! - **Error Types** - configuration, validation and submission failures

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::{GENERIC_ERROR_MESSAGE, HIGH_RISK_THRESHOLD};

// =============================================================================
// Prediction Types
// =============================================================================

/// One scored transaction as displayed.
///
/// `transaction` is the 1-based position of the score in the backend's
/// sequence, so row order always matches the uploaded file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRow {
    #[serde(rename = "Transaction")]
    pub transaction: usize,
    #[serde(rename = "FraudProbability")]
    pub fraud_probability: f64,
}

impl PredictionRow {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_probability(self.fraud_probability)
    }
}

/// Bucket counts derived from a prediction sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictionSummary {
    pub total: usize,
    pub high_risk: usize,
    pub low_risk: usize,
}

impl PredictionSummary {
    pub fn from_rows(rows: &[PredictionRow]) -> Self {
        let high_risk = rows
            .iter()
            .filter(|row| row.risk() == RiskLevel::High)
            .count();
        Self {
            total: rows.len(),
            high_risk,
            low_risk: rows.len() - high_risk,
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body returned by `POST /predict`.
///
/// Only `predictions` is required on success. `fraud_flags` and `summary`
/// are informational; they are kept as raw JSON so a malformed value
/// never fails the decode of an otherwise valid response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub predictions: Option<Vec<f64>>,
    #[serde(default)]
    pub fraud_flags: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
}

impl PredictResponse {
    /// Server-side counts, if present and well formed.
    pub fn server_summary(&self) -> Option<ServerSummary> {
        let raw = self.summary.as_ref().filter(|v| !v.is_null())?;
        match ServerSummary::deserialize(raw) {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::warn!("Ignoring malformed backend summary: {}", e);
                None
            }
        }
    }

    /// Number of fraud flags, if `fraud_flags` is an array.
    pub fn fraud_flag_count(&self) -> Option<usize> {
        let raw = self.fraud_flags.as_ref().filter(|v| !v.is_null())?;
        match raw.as_array() {
            Some(flags) => Some(flags.len()),
            None => {
                log::warn!("Ignoring non-array fraud_flags: {}", raw);
                None
            }
        }
    }
}

/// Server-side bucket counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ServerSummary {
    pub total_transactions: usize,
    pub high_risk: usize,
    pub low_risk: usize,
}

impl ServerSummary {
    /// Whether the server agrees with the locally derived counts.
    pub fn matches(&self, local: &PredictionSummary) -> bool {
        self.total_transactions == local.total
            && self.high_risk == local.high_risk
            && self.low_risk == local.low_risk
    }
}

/// Status line and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Status Types
// =============================================================================

/// Risk bucket of a single probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    /// Probability strictly above the threshold.
    High,
    /// Everything else, including exactly the threshold.
    Low,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    /// Get CSS class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "risk-badge risk-high",
            RiskLevel::Low => "risk-badge risk-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Low => "Low Risk",
        }
    }
}

/// Result of the backend liveness probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "status-dot checking",
            BackendStatus::Online => "status-dot online",
            BackendStatus::Offline => "status-dot offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "Checking model API...",
            BackendStatus::Online => "Model API online",
            BackendStatus::Offline => "Model API unreachable",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Startup configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Backend URL is not configured (set FRAUDGUARD_BACKEND_URL at build time)")]
    MissingBackendUrl,
}

/// Reasons a submission is refused before any request is made.
///
/// These never move the workflow into its error state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("Please select a CSV file")]
    NoFileSelected,
    #[error("A submission is already in progress")]
    AlreadyLoading,
}

/// Failure of a single submission attempt.
///
/// All variants are shown to the user as one message, see
/// [`WorkflowError::message`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WorkflowError {
    /// Non-2xx response.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// 2xx response whose body carries an `error` field.
    #[error("{}", or_generic(.0))]
    Backend(String),

    /// Body could not be read or did not have the expected shape.
    #[error("{}", or_generic(.0))]
    Decode(String),

    /// Request could not be built or sent.
    #[error("{}", or_generic(.0))]
    Transport(String),
}

impl WorkflowError {
    /// Message shown in the error banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn or_generic(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE
    } else {
        message
    }
}
