//! Fetch lifecycle primitives
//!
//! Provides the building blocks the application uses to run section fetches
//! off the UI thread: a per-section loading/error/data state, generation
//! tokens that let stale responses be discarded, a cancellable debounce
//! timer for the sol input, and the message type fetch tasks send back over
//! the tokio channel.

use std::time::{Duration, Instant};

use crate::data::{Apod, MarsPhoto, NasaApiError, NeoFeed};

/// Lifecycle phase of a section's data, derived from [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// Data is present
    Success,
    /// The last request failed
    Failed,
}

/// Loading/error/data triple for one data section.
///
/// `begin` keeps any previous data visible while the new request runs;
/// `fail` replaces the whole state rather than merging, so a failed section
/// never shows data from an earlier success.
#[derive(Debug)]
pub struct FetchState<T> {
    /// The most recently resolved payload
    pub data: Option<T>,
    /// Whether a request is currently in flight
    pub loading: bool,
    /// User-facing message from the last failure
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    /// Creates a state with nothing requested yet.
    pub fn new() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Marks a request as started, clearing any prior error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a successful payload.
    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    /// Applies a failure, dropping any previously shown data.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.data = None;
        self.loading = false;
    }

    /// Derives the lifecycle phase. An in-flight request reads as
    /// `Loading` even while stale data is still displayed.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Monotonic token distinguishing the current fetch from superseded ones.
///
/// Each trigger takes `next()` and tags its spawned task with the returned
/// value; a completed task's message is applied only if `accepts` still
/// holds. Bumping the generation is therefore also how an in-flight fetch
/// is cancelled, without touching the task itself.
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    /// Creates a generation counter at zero.
    pub fn new() -> Self {
        Self(0)
    }

    /// The value in-flight work must carry to be applied.
    pub fn current(&self) -> u64 {
        self.0
    }

    /// Starts a new generation, invalidating all earlier ones.
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Whether a result tagged with `generation` is still current.
    pub fn accepts(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Cancellable quiet-period timer for coalescing rapid input.
///
/// Every `touch` pushes the deadline out by the full delay; `ready` fires
/// at most once per armed deadline. The owner polls `ready` from its event
/// loop rather than sleeping on the timer.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a disarmed debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms the timer, restarting the quiet period from now.
    pub fn touch(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Disarms the timer without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once the quiet period has elapsed, disarming the timer.
    pub fn ready(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Messages sent from fetch tasks back to the application.
///
/// Each message carries the generation it was spawned under and the cache
/// key its parameters hashed to, so the receiver can discard stale results
/// and cache current ones without recomputing either.
#[derive(Debug)]
pub enum FetchMessage {
    /// An astronomy picture fetch finished
    Apod {
        generation: u64,
        key: String,
        result: Result<Apod, NasaApiError>,
    },
    /// A Mars rover photo fetch finished
    MarsPhotos {
        generation: u64,
        key: String,
        result: Result<Vec<MarsPhoto>, NasaApiError>,
    },
    /// A near-Earth object feed fetch finished
    NeoFeed {
        generation: u64,
        key: String,
        result: Result<NeoFeed, NasaApiError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fetch_state_starts_idle() {
        let state: FetchState<Vec<u32>> = FetchState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.data.is_none());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut state: FetchState<u32> = FetchState::new();
        state.fail("something broke");
        assert_eq!(state.phase(), Phase::Failed);

        state.begin();

        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.error.is_none(), "Begin should clear the prior error");
    }

    #[test]
    fn test_begin_keeps_existing_data_visible() {
        let mut state: FetchState<u32> = FetchState::new();
        state.resolve(7);

        state.begin();

        assert_eq!(state.data, Some(7), "Stale data should stay while loading");
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn test_resolve_reaches_success() {
        let mut state: FetchState<u32> = FetchState::new();
        state.begin();
        state.resolve(42);

        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.data, Some(42));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fail_clears_data_and_sets_message() {
        let mut state: FetchState<u32> = FetchState::new();
        state.resolve(42);
        state.begin();
        state.fail("Failed to load Mars photos.");

        assert_eq!(state.phase(), Phase::Failed);
        assert!(state.data.is_none(), "Failure should drop earlier data");
        assert_eq!(state.error.as_deref(), Some("Failed to load Mars photos."));
    }

    #[test]
    fn test_state_is_reentrant_after_failure() {
        let mut state: FetchState<u32> = FetchState::new();
        state.begin();
        state.fail("first attempt failed");
        state.begin();
        state.resolve(1);

        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.data, Some(1));
    }

    #[test]
    fn test_loading_phase_takes_precedence_over_data() {
        let mut state: FetchState<u32> = FetchState::new();
        state.resolve(1);
        state.begin();

        assert_eq!(
            state.phase(),
            Phase::Loading,
            "In-flight request should read as Loading even with data present"
        );
    }

    #[test]
    fn test_generation_accepts_only_current() {
        let mut generation = Generation::new();
        let first = generation.next();
        assert!(generation.accepts(first));

        let second = generation.next();
        assert!(!generation.accepts(first), "Old generation should be stale");
        assert!(generation.accepts(second));
    }

    #[test]
    fn test_generation_bump_without_new_work_invalidates() {
        let mut generation = Generation::new();
        let in_flight = generation.next();

        // Leaving a section bumps the generation with no new fetch
        generation.next();

        assert!(!generation.accepts(in_flight));
    }

    #[test]
    fn test_debouncer_not_ready_before_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        debouncer.touch();

        assert!(debouncer.is_pending());
        assert!(!debouncer.ready(), "Should not fire before the quiet period");
        assert!(debouncer.is_pending(), "Unfired deadline should stay armed");
    }

    #[test]
    fn test_debouncer_ready_after_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(20));
        debouncer.touch();

        thread::sleep(Duration::from_millis(40));

        assert!(debouncer.ready(), "Should fire after the quiet period");
        assert!(!debouncer.is_pending(), "Firing should disarm the timer");
        assert!(!debouncer.ready(), "Should fire at most once per touch");
    }

    #[test]
    fn test_touch_restarts_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(80));
        debouncer.touch();
        thread::sleep(Duration::from_millis(40));

        // A second touch pushes the deadline out again
        debouncer.touch();
        thread::sleep(Duration::from_millis(40));
        assert!(
            !debouncer.ready(),
            "Deadline should restart from the latest touch"
        );

        thread::sleep(Duration::from_millis(60));
        assert!(debouncer.ready());
    }

    #[test]
    fn test_cancel_discards_pending_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.touch();
        debouncer.cancel();

        thread::sleep(Duration::from_millis(20));

        assert!(!debouncer.ready(), "Cancelled deadline should never fire");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_disarmed_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1));
        thread::sleep(Duration::from_millis(5));
        assert!(!debouncer.ready());
    }
}
