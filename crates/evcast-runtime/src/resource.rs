/// Lifecycle phase of a remote fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one issued request. Tokens are monotone per resource;
/// resolving with anything but the latest token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Async-fetch state container for one remote endpoint.
///
/// Exactly one of data/error is populated, in Success/Error respectively;
/// Idle and Loading hold neither, so a pending request never renders stale
/// results. Out-of-order completions are discarded by the token sequence:
/// the observable state always reflects the most recently issued request
/// (last write wins).
#[derive(Debug)]
pub struct RemoteResource<T> {
    phase: Phase,
    data: Option<T>,
    error: Option<String>,
    seq: u64,
}

impl<T> RemoteResource<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
            seq: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Successful payload, present only in the Success phase.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Failure message, present only in the Error phase.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a new request cycle: Loading phase, previous data and error
    /// dropped. The returned token must accompany the eventual outcome.
    pub fn begin(&mut self) -> RequestToken {
        self.seq += 1;
        self.phase = Phase::Loading;
        self.data = None;
        self.error = None;
        RequestToken(self.seq)
    }

    /// Apply a completed request. Returns false, changing nothing, when
    /// `token` has been superseded by a newer `begin`.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<T, String>) -> bool {
        if token.0 != self.seq {
            return false;
        }

        match outcome {
            Ok(data) => {
                self.phase = Phase::Success;
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => {
                self.phase = Phase::Error;
                self.error = Some(message);
                self.data = None;
            }
        }
        true
    }

    /// Drop a surfaced error and return to Idle (banner dismissal). No-op
    /// in any other phase.
    pub fn dismiss_error(&mut self) {
        if self.phase == Phase::Error {
            self.phase = Phase::Idle;
            self.error = None;
        }
    }
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::new()
    }
}
