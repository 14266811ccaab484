pub const SITE_OWNER: &str = "Rushikesh Patil";
pub const BUILD_TIME: &str = env!("BUILD_TIME");

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account settings, baked in at compile time.
///
/// These are the same public identifiers the EmailJS browser SDK takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub auto_reply_template_id: Option<String>,
    pub public_key: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or_default().to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or_default().to_string(),
            auto_reply_template_id: option_env!("EMAILJS_AUTO_REPLY_TEMPLATE_ID")
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or_default().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}
