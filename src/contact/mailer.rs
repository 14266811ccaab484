use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::config::MailConfig;

use super::form::{FormField, FormState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&FormState> for ContactPayload {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.value(FormField::Name).trim().to_string(),
            email: form.value(FormField::Email).trim().to_string(),
            subject: form.value(FormField::Subject).trim().to_string(),
            message: form.value(FormField::Message).trim().to_string(),
        }
    }
}

/// Acknowledgement sent back to the person who filled in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoReplyPayload {
    /// First word of the submitted name.
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl AutoReplyPayload {
    pub fn new(contact: &ContactPayload, submitted_at: DateTime<Utc>) -> Self {
        let first_name = contact
            .name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            name: first_name,
            email: contact.email.clone(),
            subject: contact.subject.clone(),
            message: contact.message.clone(),
            timestamp: submitted_at,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Mail delivery is not configured")]
    NotConfigured,
    #[error("Mail request failed: {0}")]
    Transport(String),
    #[error("Mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Mail service did not answer in time")]
    Timeout,
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// The external mail-delivery collaborator.
#[async_trait(?Send)]
pub trait Mailer {
    /// Notifies the site owner.
    async fn send_primary(&self, payload: &ContactPayload) -> Result<(), DeliveryError>;

    /// Acknowledges the submitter. Best effort.
    async fn send_auto_reply(&self, payload: &AutoReplyPayload) -> Result<(), DeliveryError>;

    fn sends_auto_reply(&self) -> bool {
        true
    }
}

#[derive(Serialize)]
struct EmailJsRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
}

/// Sends through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl EmailJsMailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn send<P: Serialize>(&self, template_id: &str, params: &P) -> Result<(), DeliveryError> {
        if !self.config.is_complete() {
            return Err(DeliveryError::NotConfigured);
        }
        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait(?Send)]
impl Mailer for EmailJsMailer {
    async fn send_primary(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        self.send(&self.config.template_id, payload).await
    }

    async fn send_auto_reply(&self, payload: &AutoReplyPayload) -> Result<(), DeliveryError> {
        match &self.config.auto_reply_template_id {
            Some(template_id) => self.send(template_id, payload).await,
            None => Err(DeliveryError::NotConfigured),
        }
    }

    fn sends_auto_reply(&self) -> bool {
        self.config.auto_reply_template_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn contact() -> ContactPayload {
        ContactPayload {
            name: "Grace Brewster Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            subject: "Compilers".to_string(),
            message: "Found a moth in the relay.".to_string(),
        }
    }

    #[test]
    fn test_payload_from_form_trims() {
        let mut form = FormState::new();
        form.set_value(FormField::Name, "  Grace ");
        form.set_value(FormField::Email, "grace@navy.mil ");
        form.set_value(FormField::Subject, "Compilers");
        form.set_value(FormField::Message, "\nFound a moth in the relay.\n");
        let payload = ContactPayload::from(&form);
        assert_eq!(payload.name, "Grace");
        assert_eq!(payload.email, "grace@navy.mil");
        assert_eq!(payload.message, "Found a moth in the relay.");
    }

    #[test]
    fn test_auto_reply_uses_first_name() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let reply = AutoReplyPayload::new(&contact(), at);
        assert_eq!(reply.name, "Grace");
        assert_eq!(reply.email, "grace@navy.mil");
        assert_eq!(reply.timestamp, at);
    }

    #[test]
    fn test_emailjs_request_shape() {
        let payload = contact();
        let body = EmailJsRequest {
            service_id: "service_1",
            template_id: "template_1",
            user_id: "public_1",
            template_params: &payload,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "service_1");
        assert_eq!(json["user_id"], "public_1");
        assert_eq!(json["template_params"]["subject"], "Compilers");
        assert_eq!(json["template_params"]["name"], "Grace Brewster Hopper");
    }

    #[test]
    fn test_unconfigured_mailer() {
        let mailer = EmailJsMailer::new(MailConfig {
            endpoint: "http://localhost".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            auto_reply_template_id: None,
            public_key: String::new(),
        });
        assert!(!mailer.sends_auto_reply());
        let res = futures::executor::block_on(mailer.send_primary(&contact()));
        assert_eq!(res, Err(DeliveryError::NotConfigured));
    }
}
