//! Delivery of contact-form messages through the EmailJS REST API.

use contracts::domain::hire_me::EmailTemplateParams;
use contracts::shared::config::EmailJsConfig;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(String),
    #[error("email service rejected the message (status {status})")]
    Rejected { status: u16 },
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailTemplateParams,
}

pub async fn send_email(
    config: &EmailJsConfig,
    params: &EmailTemplateParams,
) -> Result<(), SendError> {
    if !config.is_configured() {
        return Err(SendError::NotConfigured);
    }

    let body = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: params,
    };

    let response = Request::post(&config.endpoint)
        .json(&body)
        .map_err(|e| SendError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SendError::Network(e.to_string()))?;

    if response.ok() {
        log::info!("contact message delivered");
        Ok(())
    } else {
        Err(SendError::Rejected {
            status: response.status(),
        })
    }
}
