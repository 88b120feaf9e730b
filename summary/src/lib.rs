use wasm_bindgen::prelude::*;

pub mod client;

pub use crate::client::{summarize, FALLBACK_EMPTY, FALLBACK_ERROR};

/// Set up the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Module version.
#[wasm_bindgen]
pub fn version() -> String {
    "1.2.0".to_string()
}

//===== Request state =====

/// Observable lifecycle of one summary request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryState {
    /// Nothing requested for this view yet.
    Idle,
    /// A request is in flight.
    Pending,
    /// A displayable string arrived (possibly a fallback).
    Succeeded(String),
    /// The attempt was abandoned before any result applied.
    Failed,
}

/// Per-article-view holder for the summary request. At most one request
/// can be outstanding; starting another while pending is a no-op. Results
/// carry the epoch their request started with, so anything arriving after
/// a reset or a newer request is ignored rather than cancelled.
#[derive(Debug)]
pub struct SummaryTask {
    state: SummaryState,
    epoch: u32,
}

impl SummaryTask {
    pub fn new() -> SummaryTask {
        SummaryTask {
            state: SummaryState::Idle,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    /// The summary text, once one has arrived.
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            SummaryState::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    /// Move to Pending and hand out the epoch for this attempt. `None`
    /// while a request is already outstanding.
    pub fn begin(&mut self) -> Option<u32> {
        if self.state == SummaryState::Pending {
            return None;
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.state = SummaryState::Pending;
        Some(self.epoch)
    }

    /// Deliver a result for the attempt started with `epoch`. Stale
    /// results (wrong epoch, or the task was reset) are ignored; the
    /// return value says whether the result applied.
    pub fn resolve(&mut self, epoch: u32, text: String) -> bool {
        if self.state != SummaryState::Pending || epoch != self.epoch {
            return false;
        }
        self.state = SummaryState::Succeeded(text);
        true
    }

    /// Mark the attempt started with `epoch` as failed, under the same
    /// staleness rule as `resolve`.
    pub fn fail(&mut self, epoch: u32) -> bool {
        if self.state != SummaryState::Pending || epoch != self.epoch {
            return false;
        }
        self.state = SummaryState::Failed;
        true
    }

    /// The view moved on (closed, or switched article): forget everything.
    /// A request still in flight keeps running; its result just no longer
    /// applies.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.state = SummaryState::Idle;
    }
}

impl Default for SummaryTask {
    fn default() -> Self {
        SummaryTask::new()
    }
}

//===== JS interface =====

/// The summary request holder exposed to the page. The page calls
/// `begin()` before firing `summarize(...)`, then reports the outcome
/// back with the epoch it was given.
#[wasm_bindgen]
pub struct SummaryTaskJS {
    task: SummaryTask,
}

#[wasm_bindgen]
impl SummaryTaskJS {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SummaryTaskJS {
        console_error_panic_hook::set_once();
        SummaryTaskJS {
            task: SummaryTask::new(),
        }
    }

    /// `"idle" | "pending" | "succeeded" | "failed"`.
    pub fn state(&self) -> String {
        match self.task.state() {
            SummaryState::Idle => "idle",
            SummaryState::Pending => "pending",
            SummaryState::Succeeded(_) => "succeeded",
            SummaryState::Failed => "failed",
        }
        .to_string()
    }

    /// The summary text once available, otherwise `null`.
    pub fn text(&self) -> Option<String> {
        self.task.text().map(|t| t.to_string())
    }

    /// Epoch for a new attempt, or `null` while one is outstanding.
    pub fn begin(&mut self) -> Option<u32> {
        self.task.begin()
    }

    pub fn resolve(&mut self, epoch: u32, text: String) -> bool {
        self.task.resolve(epoch, text)
    }

    pub fn fail(&mut self, epoch: u32) -> bool {
        self.task.fail(epoch)
    }

    pub fn reset(&mut self) {
        self.task.reset();
    }
}

impl Default for SummaryTaskJS {
    fn default() -> Self {
        SummaryTaskJS::new()
    }
}
