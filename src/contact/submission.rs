use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::{Rc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::{select, Either};
use thiserror::Error;

use super::form::{FormField, FormState};
use super::mailer::{AutoReplyPayload, ContactPayload, DeliveryError, Mailer};

pub const RESET_DELAY: Duration = Duration::from_millis(3000);
pub const SEND_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Validation,
    Delivery(String),
}

impl FailureReason {
    /// Summary shown under the form.
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::Validation => "Please fix the highlighted fields and try again.",
            FailureReason::Delivery(_) => "Failed to send message. Please try again later.",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            FailureReason::Validation => "validation",
            FailureReason::Delivery(_) => "delivery",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(FailureReason),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("invalid fields: {0:?}")]
    Validation(Vec<FormField>),
    #[error("a submission is already in flight")]
    Busy,
    #[error("form instance is gone")]
    Detached,
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Identifies one submit attempt. Completions and timers carrying an older
/// generation are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Form fields plus the submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: FormState,
    state: SubmissionState,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match &self.state {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set_value(field, value);
    }

    pub fn mark_touched(&mut self, field: FormField) {
        self.fields.mark_touched(field);
    }

    /// Validates everything and moves to `Pending`, or records the validation
    /// failure. Returns what needs to be sent.
    pub fn begin_submit(&mut self) -> Result<(Generation, ContactPayload), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::Busy);
        }
        self.generation += 1;
        if !self.fields.validate_all() {
            self.state = SubmissionState::Failed(FailureReason::Validation);
            return Err(ContactError::Validation(self.fields.invalid_fields()));
        }
        self.state = SubmissionState::Pending;
        Ok((Generation(self.generation), ContactPayload::from(&self.fields)))
    }

    /// Applies the primary send result. Returns false when the attempt is stale.
    pub fn finish_submit(
        &mut self,
        generation: Generation,
        result: &Result<(), DeliveryError>,
    ) -> bool {
        if generation.0 != self.generation || !self.is_submitting() {
            return false;
        }
        self.state = match result {
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed(FailureReason::Delivery(e.to_string())),
        };
        true
    }

    /// Clears the form after a success, unless a newer attempt has started.
    pub fn reset_after_success(&mut self, generation: Generation) -> bool {
        if generation.0 != self.generation || self.state != SubmissionState::Succeeded {
            return false;
        }
        self.fields.reset();
        self.state = SubmissionState::Idle;
        true
    }
}

/// Shared access to the one form instance a controller drives.
///
/// `update` returns `None` once the instance has been dropped or unmounted.
pub trait FormStore: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormStore for Rc<RefCell<ContactForm>> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormStore for Weak<RefCell<ContactForm>> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        let form = self.upgrade()?;
        let mut form = form.borrow_mut();
        Some(f(&mut form))
    }
}

/// The event loop the controller runs on.
pub trait Executor: Clone + 'static {
    /// Runs a detached task.
    fn spawn(&self, fut: impl Future<Output = ()> + 'static);

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static;

    fn now(&self) -> DateTime<Utc>;
}

/// Drives a [`ContactForm`] through one submission.
pub struct SubmissionController<M, E, S> {
    mailer: Rc<M>,
    executor: E,
    store: S,
}

impl<M, E: Clone, S: Clone> Clone for SubmissionController<M, E, S> {
    fn clone(&self) -> Self {
        Self {
            mailer: self.mailer.clone(),
            executor: self.executor.clone(),
            store: self.store.clone(),
        }
    }
}

impl<M, E, S> SubmissionController<M, E, S>
where
    M: Mailer + 'static,
    E: Executor,
    S: FormStore,
{
    pub fn new(mailer: Rc<M>, executor: E, store: S) -> Self {
        Self {
            mailer,
            executor,
            store,
        }
    }

    /// Starts a submission.
    ///
    /// Validation and the move to `Pending` happen before this returns; the
    /// returned future performs the primary send and must be awaited or spawned.
    pub fn submit(
        &self,
    ) -> Result<impl Future<Output = Result<(), ContactError>> + 'static, ContactError> {
        let (generation, payload) = self
            .store
            .update(ContactForm::begin_submit)
            .ok_or(ContactError::Detached)??;
        let submitted_at = self.executor.now();
        log::debug!("contact form accepted, sending (attempt {})", generation.0);

        let this = self.clone();
        Ok(async move { this.deliver(generation, payload, submitted_at).await })
    }

    async fn deliver(
        self,
        generation: Generation,
        payload: ContactPayload,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), ContactError> {
        let result = {
            let send = pin!(self.mailer.send_primary(&payload));
            let timeout = pin!(self.executor.sleep(SEND_TIMEOUT));
            match select(send, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => Err(DeliveryError::Timeout),
            }
        };

        let applied = self
            .store
            .update(|form| form.finish_submit(generation, &result))
            .unwrap_or(false);
        if !applied {
            log::debug!("dropping stale contact result (attempt {})", generation.0);
            return result.map_err(ContactError::from);
        }

        if let Err(e) = result {
            log::error!("contact message delivery failed: {e}");
            return Err(e.into());
        }
        log::info!("contact message delivered");

        if self.mailer.sends_auto_reply() {
            let mailer = self.mailer.clone();
            let reply = AutoReplyPayload::new(&payload, submitted_at);
            self.executor.spawn(async move {
                if let Err(e) = mailer.send_auto_reply(&reply).await {
                    log::warn!("auto-reply to {} failed: {e}", reply.email);
                }
            });
        }

        let store = self.store.clone();
        let sleep = self.executor.sleep(RESET_DELAY);
        self.executor.spawn(async move {
            sleep.await;
            store.update(|form| form.reset_after_success(generation));
        });
        Ok(())
    }
}
