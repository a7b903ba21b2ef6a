//! View state for the repository page.
//!
//! All of the page's mutable data lives in a single [`ViewState`] value that
//! is replaced on each transition. Transitions are expressed as events applied
//! through [`ViewState::apply`], so the whole lifecycle can be unit tested
//! without a rendering environment.

use crate::github::{Issue, IssueFilter, Repository};

/// Page lifecycle. `Loading` transitions to `Ready` at most once; a failed
/// initial load lands in `Failed` and can be retried.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    LoadSucceeded {
        seq: u64,
        repository: Repository,
        issues: Vec<Issue>,
    },
    LoadFailed {
        seq: u64,
        message: String,
    },
    IssuesSucceeded {
        seq: u64,
        filter: IssueFilter,
        page: u32,
        issues: Vec<Issue>,
    },
    IssuesFailed {
        seq: u64,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub phase: Phase,
    pub repository: Option<Repository>,
    pub issues: Vec<Issue>,
    pub filter: IssueFilter,
    pub page: u32,
    /// Banner message for a failed re-fetch after the page is ready.
    pub error: Option<String>,
    latest: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            repository: None,
            issues: Vec::new(),
            filter: IssueFilter::Open,
            page: 1,
            error: None,
            latest: 0,
        }
    }

    /// Tag a new request. Responses carry the tag back in their event; only
    /// the most recently issued tag is accepted, so a late completion for an
    /// older page or filter never overwrites a newer one.
    pub fn begin_request(&mut self) -> u64 {
        self.latest += 1;
        self.error = None;
        self.latest
    }

    pub fn next_page(&self) -> u32 {
        self.page + 1
    }

    /// `None` at the first page: page 0 is never requested upstream.
    pub fn previous_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn target_page(&self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Next => Some(self.next_page()),
            Direction::Previous => self.previous_page(),
        }
    }

    fn is_stale(&self, seq: u64) -> bool {
        seq != self.latest
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::LoadSucceeded {
                seq,
                repository,
                issues,
            } => {
                if self.is_stale(seq) {
                    return;
                }
                // Repository and issues arrive together; Ready is never
                // entered partially populated.
                self.repository = Some(repository);
                self.issues = issues;
                self.phase = Phase::Ready;
            }
            Event::LoadFailed { seq, message } => {
                if self.is_stale(seq) {
                    return;
                }
                self.phase = Phase::Failed(message);
            }
            Event::IssuesSucceeded {
                seq,
                filter,
                page,
                issues,
            } => {
                if self.is_stale(seq) {
                    return;
                }
                self.issues = issues;
                self.filter = filter;
                self.page = page;
            }
            Event::IssuesFailed { seq, message } => {
                if self.is_stale(seq) {
                    return;
                }
                self.error = Some(message);
            }
        }
    }
}
