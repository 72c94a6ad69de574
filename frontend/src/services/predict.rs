//! HTTP service for scoring a CSV file against the model backend.
//!
//! [`classify`] is the single request path used by the workflow: it posts
//! the file through a [`PredictionBackend`] and turns the reply into
//! display rows with [`interpret_reply`].

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{AppConfig, UPLOAD_FIELD};
use crate::types::{HttpReply, PredictResponse, PredictionRow, PredictionSummary, WorkflowError};

/// Transport seam between the workflow and the network.
///
/// The browser uses [`HttpBackend`]; tests plug in canned replies.
#[allow(async_fn_in_trait)]
pub trait PredictionBackend {
    /// File handle this backend knows how to upload.
    type File;

    /// Send one multipart request carrying `file` and return the raw reply.
    async fn post_file(&self, file: &Self::File) -> Result<HttpReply, WorkflowError>;
}

/// `POST {backend_base_url}/predict` over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.predict_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionBackend for HttpBackend {
    type File = File;

    async fn post_file(&self, file: &File) -> Result<HttpReply, WorkflowError> {
        let form_data = FormData::new()
            .map_err(|e| WorkflowError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| WorkflowError::Transport(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| WorkflowError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| WorkflowError::Transport(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            // Error bodies are never shown, only the status code.
            return Ok(HttpReply {
                status,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WorkflowError::Decode(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}

/// Upload `file` and project the scores into display rows.
pub async fn classify<B: PredictionBackend>(
    backend: &B,
    file: &B::File,
) -> Result<Vec<PredictionRow>, WorkflowError> {
    let reply = backend.post_file(file).await?;
    interpret_reply(&reply)
}

/// Map a raw reply to rows or to the failure the user sees.
///
/// Checked in order: HTTP status, body shape, `error` field, `predictions`.
pub fn interpret_reply(reply: &HttpReply) -> Result<Vec<PredictionRow>, WorkflowError> {
    if !reply.is_success() {
        return Err(WorkflowError::Http {
            status: reply.status,
        });
    }

    let response: PredictResponse =
        serde_json::from_str(&reply.body).map_err(|e| WorkflowError::Decode(e.to_string()))?;

    into_rows(response)
}

fn into_rows(mut response: PredictResponse) -> Result<Vec<PredictionRow>, WorkflowError> {
    // An empty error string is falsy for the backend too.
    if let Some(message) = response.error.take().filter(|message| !message.is_empty()) {
        return Err(WorkflowError::Backend(message));
    }

    let probabilities = response.predictions.take().ok_or_else(|| {
        WorkflowError::Decode("Response is missing the predictions field".to_string())
    })?;

    let rows: Vec<PredictionRow> = probabilities
        .into_iter()
        .enumerate()
        .map(|(idx, fraud_probability)| PredictionRow {
            transaction: idx + 1,
            fraud_probability,
        })
        .collect();

    if let Some(server) = response.server_summary() {
        let local = PredictionSummary::from_rows(&rows);
        if !server.matches(&local) {
            log::warn!(
                "Backend summary {:?} disagrees with derived counts {:?}",
                server,
                local
            );
        }
    }

    if let Some(flag_count) = response.fraud_flag_count() {
        if flag_count != rows.len() {
            log::warn!(
                "Backend returned {} fraud flags for {} predictions",
                flag_count,
                rows.len()
            );
        }
    }

    Ok(rows)
}
