use ratatui_carousel_core::store::CarouselStore;
use ratatui_carousel_core::store::PlayDirection;
use std::time::Duration;
use std::time::Instant;

/// Interval-based autoplay, polled by the host event loop.
///
/// The carousel library owns no timers and spawns nothing; call
/// [`Autoplay::poll`] from your loop (on a tick or after `event::poll`
/// times out) and redraw when it returns true. The store's
/// pause-on-interaction rule does the rest: any manual navigation clears
/// `is_playing`, `poll` goes idle, and the countdown re-arms from scratch
/// when playback resumes.
#[derive(Clone, Copy, Debug)]
pub struct Autoplay {
    pub interval: Duration,
    pub direction: PlayDirection,
    next_due: Option<Instant>,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            direction: PlayDirection::Forward,
            next_due: None,
        }
    }
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: PlayDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Advance the carousel if playback is on and the interval has elapsed.
    /// Returns true when a tick fired (redraw hint).
    pub fn poll(&mut self, now: Instant, store: &mut CarouselStore) -> bool {
        if !store.state().is_playing {
            self.next_due = None;
            return false;
        }
        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                false
            }
            Some(due) if now >= due => {
                store.auto_advance(self.direction);
                self.next_due = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }

    /// Drop the pending countdown; the next poll while playing re-arms it.
    pub fn reset(&mut self) {
        self.next_due = None;
    }
}
