//! One-shot delivery of a validated lead to the automation webhook.

use thiserror::Error;

use crate::config;
use crate::lead::Lead;

/// Why a dispatch failed. Both variants are handled identically by the
/// form (alert + back to editing); the split exists for the console log.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("falha de rede ao enviar a indicação: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook recusou a indicação: status {0}")]
    Rejected(reqwest::StatusCode),
}

/// POST the lead as JSON to the webhook. Exactly one attempt, no retry,
/// no timeout; the caller keeps the submit button disabled while this is
/// in flight.
pub async fn send_lead(lead: &Lead) -> Result<(), SubmitError> {
    let response = reqwest::Client::new()
        .post(config::WEBHOOK_URL)
        .json(lead)
        .send()
        .await?;

    // Any non-success status counts as failure; the webhook's body is opaque.
    if !response.status().is_success() {
        return Err(SubmitError::Rejected(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_names_the_status() {
        let err = SubmitError::Rejected(reqwest::StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("502"));
    }
}
