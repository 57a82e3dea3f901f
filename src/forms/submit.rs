use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validation::FieldSource;
use crate::config::SubmissionMode;

pub const GENERIC_FAILURE: &str = "Something went wrong sending your message. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll respond within 2 hours.";

/// The lead payload, field names as the endpoint expects them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl Lead {
    pub const FIELDS: [&'static str; 7] = [
        "firstName", "lastName", "email", "phone", "company", "service", "message",
    ];

    pub fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "firstName" => Some(&mut self.first_name),
            "lastName" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "company" => Some(&mut self.company),
            "service" => Some(&mut self.service),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        let mut lead = self.clone();
        for key in Self::FIELDS {
            if let Some(value) = lead.field_mut(key) {
                *value = value.trim().to_string();
            }
        }
        lead
    }
}

impl FieldSource for Lead {
    fn value(&self, key: &str) -> Option<&str> {
        let value = match key {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "company" => &self.company,
            "service" => &self.service,
            "message" => &self.message,
            _ => return None,
        };
        Some(value.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("server rejected submission ({status})")]
    Server { status: u16, reason: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode submission: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Server { reason: Some(reason), .. } if !reason.trim().is_empty() => {
                reason.clone()
            }
            SubmitError::Server { .. } | SubmitError::Encode(_) => GENERIC_FAILURE.to_string(),
            SubmitError::Transport(text) => format!("Request failed: {}", text),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: String,
}

/// Body the endpoint answers with, on success or failure.
#[derive(Debug, Default, Deserialize)]
struct EndpointResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl EndpointResponse {
    fn reason(self) -> Option<String> {
        self.error.or(self.message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submitter {
    Simulated { delay_ms: u32 },
    Remote {
        endpoint: String,
        token_header: String,
        token: String,
    },
}

impl Submitter {
    pub fn from_mode(mode: &SubmissionMode, simulated_delay_ms: u32) -> Self {
        match mode {
            SubmissionMode::Simulated => Submitter::Simulated {
                delay_ms: simulated_delay_ms,
            },
            SubmissionMode::Remote { endpoint, token_header, token } => Submitter::Remote {
                endpoint: endpoint.clone(),
                token_header: token_header.clone(),
                token: token.clone(),
            },
        }
    }

    pub async fn submit(&self, lead: &Lead) -> Result<SubmitReceipt, SubmitError> {
        match self {
            Submitter::Simulated { delay_ms } => {
                info!("Simulating lead submission ({} ms)", delay_ms);
                TimeoutFuture::new(*delay_ms).await;
                Ok(SubmitReceipt {
                    message: SUCCESS_MESSAGE.to_string(),
                })
            }
            Submitter::Remote { endpoint, token_header, token } => {
                let request = Request::post(endpoint)
                    .header(token_header, token)
                    .json(lead)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?;

                let response = request
                    .send()
                    .await
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;

                let status = response.status();
                let body = response.json::<EndpointResponse>().await.unwrap_or_default();

                if response.ok() {
                    info!("Lead accepted with status {}", status);
                    Ok(SubmitReceipt {
                        message: body.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
                    })
                } else {
                    warn!("Lead rejected with status {}", status);
                    Err(SubmitError::Server {
                        status,
                        reason: body.reason(),
                    })
                }
            }
        }
    }
}
