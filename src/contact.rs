mod form;
mod mailer;
mod submission;

pub use form::{FormField, FormState, InputKind};
pub use mailer::{AutoReplyPayload, ContactPayload, DeliveryError, EmailJsMailer, Mailer};
pub use submission::{
    ContactError, ContactForm, Executor, FailureReason, FormStore, Generation,
    SubmissionController, SubmissionState, RESET_DELAY, SEND_TIMEOUT,
};
