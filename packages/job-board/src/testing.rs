//! Testing utilities including mock implementations.
//!
//! Useful for exercising the board without network calls or wall-clock time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, RwLock};
use std::time::Duration;
use tokio::sync::oneshot;

use remotive_client::{Job, ListingPage, ListingRequest, RemotiveError};

use crate::cache::{Clock, Sleeper};
use crate::source::JobSource;

/// A clock that only moves when told to.
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.write().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

/// Retry waits that return at once and remember what they were asked for.
#[derive(Default)]
pub struct InstantSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl InstantSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

type Response = Result<ListingPage, RemotiveError>;

/// A scripted job source.
///
/// Each request answers from its own queue; the last answer repeats.
/// Unscripted requests fail with a 404 so a missing fixture is loud.
#[derive(Default)]
pub struct MockJobSource {
    responses: Mutex<HashMap<ListingRequest, VecDeque<Response>>>,
    gates: Mutex<HashMap<ListingRequest, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<ListingRequest>>,
}

impl MockJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `request` with `response` every time it is asked.
    pub fn with_response(self, request: ListingRequest, response: Response) -> Self {
        self.set_response(request, response);
        self
    }

    /// Answer `request` with `responses` in order, repeating the last one.
    pub fn with_responses(self, request: ListingRequest, responses: Vec<Response>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(request, responses.into());
        self
    }

    pub fn set_response(&self, request: ListingRequest, response: Response) {
        self.responses
            .lock()
            .unwrap()
            .insert(request, VecDeque::from([response]));
    }

    /// Hold the next answer to `request` until the returned sender fires
    /// (or is dropped).
    pub fn hold(&self, request: ListingRequest) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(request, rx);
        tx
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ListingRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl JobSource for MockJobSource {
    async fn fetch_listing(&self, request: &ListingRequest) -> Result<ListingPage, RemotiveError> {
        self.calls.lock().unwrap().push(request.clone());

        let gate = self.gates.lock().unwrap().remove(request);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let mut responses = self.responses.lock().unwrap();
        let next = responses.get_mut(request).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        });
        next.unwrap_or_else(|| {
            Err(RemotiveError::Api {
                status: 404,
                message: format!("no scripted response for {request:?}"),
            })
        })
    }
}

/// A job with the required fields filled in and everything optional empty.
pub fn job(id: u64, title: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        company_name: "Acme".to_string(),
        url: format!("https://remotive.com/remote-jobs/{id}"),
        company_logo: None,
        company_logo_url: None,
        category: None,
        candidate_required_location: None,
        salary: None,
        tags: None,
        job_type: None,
        publication_date: None,
    }
}

/// A listing page with one generated job per title.
pub fn listing(total_job_count: u64, titles: &[&str]) -> ListingPage {
    ListingPage {
        total_job_count,
        jobs: titles
            .iter()
            .enumerate()
            .map(|(i, title)| job(i as u64 + 1, title))
            .collect(),
    }
}
