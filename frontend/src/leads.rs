//! Lead capture: validation, the remote store call, and the form state the
//! registration modal renders from.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::timing::{Clock, Delay};

pub const GENERIC_ERROR: &str = "Что-то пошло не так. Попробуйте еще раз.";
pub const INVALID_INPUT: &str = "Укажи корректный email и Telegram.";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LeadError {
    #[error("email must be non-empty and contain '@'")]
    InvalidEmail,
    #[error("contact handle must be non-empty")]
    MissingHandle,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("request failed: {0}")]
    Network(String),
    #[error("lead store answered {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// One row of `project_leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    email: String,
    #[serde(rename = "telegram")]
    contact_handle: String,
}

impl LeadRecord {
    /// Surrounding whitespace is dropped before checking.
    pub fn new(email: &str, contact_handle: &str) -> Result<Self, LeadError> {
        let email = email.trim();
        let contact_handle = contact_handle.trim();

        if email.is_empty() || !email.contains('@') {
            return Err(LeadError::InvalidEmail);
        }
        if contact_handle.is_empty() {
            return Err(LeadError::MissingHandle);
        }

        Ok(Self {
            email: email.to_string(),
            contact_handle: contact_handle.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[cfg(test)]
    pub fn contact_handle(&self) -> &str {
        &self.contact_handle
    }
}

pub trait LeadStore {
    fn insert(&self, record: &LeadRecord) -> LocalBoxFuture<'static, Result<(), LeadError>>;
}

/// Supabase REST (PostgREST) table insert.
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseStore {
    base_url: String,
    api_key: String,
    table: String,
}

#[derive(Deserialize)]
struct StoreErrorBody {
    message: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_lead_store_url(),
            config::get_lead_store_key(),
            config::LEADS_TABLE,
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl LeadStore for SupabaseStore {
    fn insert(&self, record: &LeadRecord) -> LocalBoxFuture<'static, Result<(), LeadError>> {
        let request = Request::post(&self.endpoint())
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&[record]);

        async move {
            let request = request.map_err(|e| LeadError::Network(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| LeadError::Network(e.to_string()))?;

            if response.ok() {
                return Ok(());
            }

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StoreErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            Err(LeadError::Rejected { status, message })
        }
        .boxed_local()
    }
}

/// Sends one record. One attempt, no retry.
pub async fn submit_lead<S: LeadStore>(store: &S, record: LeadRecord) -> Result<(), LeadError> {
    info!("Submitting lead for {}", record.email());
    match store.insert(&record).await {
        Ok(()) => {
            info!("Lead stored");
            Ok(())
        }
        Err(e) => {
            error!("Lead submission failed: {}", e);
            Err(e)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Editing,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    pub email: String,
    pub telegram: String,
    status: SubmitStatus,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            telegram: String::new(),
            status: SubmitStatus::Editing,
        }
    }
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and moves to `Submitting`. Nothing should be sent when this
    /// returns an error.
    pub fn begin_submit(&mut self) -> Result<LeadRecord, LeadError> {
        if self.status == SubmitStatus::Submitting {
            return Err(LeadError::InFlight);
        }

        match LeadRecord::new(&self.email, &self.telegram) {
            Ok(record) => {
                self.status = SubmitStatus::Submitting;
                Ok(record)
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(INVALID_INPUT.to_string());
                Err(e)
            }
        }
    }

    /// Fields stay as typed on failure so the user can retry.
    pub fn finish(&mut self, result: Result<(), LeadError>) {
        self.status = match result {
            Ok(()) => SubmitStatus::Succeeded,
            Err(_) => SubmitStatus::Failed(GENERIC_ERROR.to_string()),
        };
    }

    /// After the success acknowledgment has been shown.
    pub fn reset_after_success(&mut self) {
        if self.status == SubmitStatus::Succeeded {
            self.email.clear();
            self.telegram.clear();
            self.status = SubmitStatus::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmitStatus::Succeeded
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A [`LeadForm`] plus the one-shot timer that clears it and closes the
/// modal once a success has been on screen for `close_after_ms`.
pub struct LeadFlow<C: Clock, D: Delay> {
    form: LeadForm,
    close_after_ms: u32,
    clock: C,
    delay: D,
    close_at: Option<f64>,
    on_due: Option<Rc<dyn Fn()>>,
    timer: Option<D::Handle>,
}

impl<C: Clock, D: Delay> LeadFlow<C, D> {
    pub fn new(close_after_ms: u32, clock: C, delay: D) -> Self {
        Self {
            form: LeadForm::new(),
            close_after_ms,
            clock,
            delay,
            close_at: None,
            on_due: None,
            timer: None,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    /// Records the store's answer. A success arms the close timer; `on_due`
    /// runs when it fires and should lead back to [`LeadFlow::poll_close`].
    pub fn finish(&mut self, result: Result<(), LeadError>, on_due: impl Fn() + 'static) {
        let succeeded = result.is_ok();
        self.form.finish(result);
        self.timer = None;
        self.close_at = None;
        self.on_due = None;

        if succeeded {
            self.close_at = Some(self.clock.now_ms() + f64::from(self.close_after_ms));
            let on_due: Rc<dyn Fn()> = Rc::new(on_due);
            self.on_due = Some(on_due);
            self.arm(self.close_after_ms);
        }
    }

    /// True exactly once, when the acknowledgment window is over. The fields
    /// are cleared by then and the caller closes the modal. A timer that
    /// fires early is re-armed for what is left.
    pub fn poll_close(&mut self) -> bool {
        let close_at = match self.close_at {
            Some(at) => at,
            None => return false,
        };

        let now = self.clock.now_ms();
        if now < close_at {
            let remaining = (close_at - now).ceil().max(1.0) as u32;
            self.arm(remaining);
            return false;
        }

        self.close_at = None;
        self.on_due = None;
        self.timer = None;
        self.form.reset_after_success();
        true
    }

    fn arm(&mut self, delay_ms: u32) {
        if let Some(on_due) = self.on_due.clone() {
            self.timer = Some(self.delay.after(delay_ms, Box::new(move || on_due())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct StubStore {
        result: Result<(), LeadError>,
        inserted: RefCell<Vec<LeadRecord>>,
    }

    impl StubStore {
        fn answering(result: Result<(), LeadError>) -> Self {
            Self {
                result,
                inserted: RefCell::new(Vec::new()),
            }
        }
    }

    impl LeadStore for StubStore {
        fn insert(&self, record: &LeadRecord) -> LocalBoxFuture<'static, Result<(), LeadError>> {
            self.inserted.borrow_mut().push(record.clone());
            let result = self.result.clone();
            async move { result }.boxed_local()
        }
    }

    #[derive(Clone, Default)]
    struct FakeClock(Rc<Cell<f64>>);

    impl Clock for FakeClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[derive(Clone, Default)]
    struct FakeDelay {
        armed: Rc<RefCell<Vec<u32>>>,
        live: Rc<Cell<usize>>,
        pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
    }

    impl FakeDelay {
        fn fire(&self) {
            let pending = self.pending.borrow_mut().take();
            if let Some(fire) = pending {
                fire();
            }
        }
    }

    struct FakeHandle(Rc<Cell<usize>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl Delay for FakeDelay {
        type Handle = FakeHandle;

        fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> FakeHandle {
            self.armed.borrow_mut().push(delay_ms);
            self.live.set(self.live.get() + 1);
            *self.pending.borrow_mut() = Some(fire);
            FakeHandle(self.live.clone())
        }
    }

    fn flow() -> (LeadFlow<FakeClock, FakeDelay>, FakeClock, FakeDelay) {
        let clock = FakeClock::default();
        let delay = FakeDelay::default();
        let mut flow =
            LeadFlow::new(config::LEAD_SUCCESS_CLOSE_MS, clock.clone(), delay.clone());
        flow.form_mut().email = "a@b.com".into();
        flow.form_mut().telegram = "@x".into();
        (flow, clock, delay)
    }

    fn submit_through(
        flow: &mut LeadFlow<FakeClock, FakeDelay>,
        store: &StubStore,
        on_due: impl Fn() + 'static,
    ) {
        let record = flow.form_mut().begin_submit().unwrap();
        let result = block_on(submit_lead(store, record));
        flow.finish(result, on_due);
    }

    fn filled(email: &str, telegram: &str) -> LeadForm {
        LeadForm {
            email: email.to_string(),
            telegram: telegram.to_string(),
            ..LeadForm::new()
        }
    }

    fn run(form: &mut LeadForm, store: &StubStore) {
        if let Ok(record) = form.begin_submit() {
            assert!(form.is_submitting());
            let result = block_on(submit_lead(store, record));
            form.finish(result);
        }
    }

    #[test]
    fn success_clears_fields_after_acknowledgment() {
        let store = StubStore::answering(Ok(()));
        let mut form = filled("a@b.com", "@x");

        run(&mut form, &store);
        assert!(form.is_success());
        assert_eq!(form.email, "a@b.com");

        form.reset_after_success();
        assert_eq!(form.email, "");
        assert_eq!(form.telegram, "");
        assert!(!form.is_success());
        assert_eq!(form.error(), None);
        assert_eq!(store.inserted.borrow().len(), 1);
    }

    #[test]
    fn failure_keeps_fields_and_shows_error() {
        let store = StubStore::answering(Err(LeadError::Rejected {
            status: 409,
            message: "duplicate key".into(),
        }));
        let mut form = filled("a@b.com", "@x");

        run(&mut form, &store);
        assert_eq!(form.error(), Some(GENERIC_ERROR));
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.telegram, "@x");

        // only a success resets the form
        form.reset_after_success();
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let failing = StubStore::answering(Err(LeadError::Network("offline".into())));
        let working = StubStore::answering(Ok(()));
        let mut form = filled("a@b.com", "@x");

        run(&mut form, &failing);
        run(&mut form, &working);
        assert!(form.is_success());
    }

    #[test]
    fn empty_email_never_reaches_the_store() {
        let store = StubStore::answering(Ok(()));
        let mut form = filled("", "@x");

        assert_eq!(form.begin_submit(), Err(LeadError::InvalidEmail));
        run(&mut form, &store);
        assert!(store.inserted.borrow().is_empty());
        assert_eq!(form.error(), Some(INVALID_INPUT));
    }

    #[test]
    fn record_validation() {
        assert_eq!(LeadRecord::new("nobody", "@x"), Err(LeadError::InvalidEmail));
        assert_eq!(LeadRecord::new("a@b.com", "   "), Err(LeadError::MissingHandle));

        let record = LeadRecord::new("  a@b.com ", " @x").unwrap();
        assert_eq!(record.email(), "a@b.com");
        assert_eq!(record.contact_handle(), "@x");
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled("a@b.com", "@x");
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(LeadError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn record_serializes_with_store_column_names() {
        let record = LeadRecord::new("a@b.com", "@x").unwrap();
        let json = serde_json::to_value([&record]).unwrap();
        assert_eq!(json, serde_json::json!([{ "email": "a@b.com", "telegram": "@x" }]));
    }

    #[test]
    fn endpoint_points_at_table() {
        let store = SupabaseStore::new("https://abc.supabase.co/", "key", "project_leads");
        assert_eq!(store.endpoint(), "https://abc.supabase.co/rest/v1/project_leads");
    }

    #[test]
    fn success_stays_on_screen_until_the_close_delay() {
        let store = StubStore::answering(Ok(()));
        let (mut flow, clock, delay) = flow();
        let due = Rc::new(Cell::new(0));
        let counter = due.clone();

        submit_through(&mut flow, &store, move || counter.set(counter.get() + 1));
        assert_eq!(*delay.armed.borrow(), vec![2000]);
        assert_eq!(delay.live.get(), 1);

        clock.0.set(1999.0);
        assert!(!flow.poll_close());
        assert!(flow.form().is_success());
        assert_eq!(flow.form().email, "a@b.com");
        assert_eq!(flow.form().telegram, "@x");
        // woken a millisecond early, so it waits out the rest
        assert_eq!(*delay.armed.borrow(), vec![2000, 1]);
        assert_eq!(delay.live.get(), 1);

        clock.0.set(2000.0);
        delay.fire();
        assert_eq!(due.get(), 1);
        assert!(flow.poll_close());
        assert_eq!(flow.form().email, "");
        assert_eq!(flow.form().telegram, "");
        assert!(!flow.form().is_success());
        assert_eq!(delay.live.get(), 0);

        // closes once
        assert!(!flow.poll_close());
    }

    #[test]
    fn failure_arms_no_close_timer() {
        let store = StubStore::answering(Err(LeadError::Network("offline".into())));
        let (mut flow, clock, delay) = flow();

        submit_through(&mut flow, &store, || {});
        assert!(delay.armed.borrow().is_empty());

        clock.0.set(5000.0);
        assert!(!flow.poll_close());
        assert_eq!(flow.form().error(), Some(GENERIC_ERROR));
        assert_eq!(flow.form().email, "a@b.com");
    }

    #[test]
    fn dropping_flow_cancels_pending_close() {
        let store = StubStore::answering(Ok(()));
        let (mut flow, _clock, delay) = flow();

        submit_through(&mut flow, &store, || {});
        assert_eq!(delay.live.get(), 1);
        drop(flow);
        assert_eq!(delay.live.get(), 0);
    }
}
