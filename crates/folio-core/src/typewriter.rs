//! Typewriter text-cycling state machine.
//!
//! Types a phrase one character at a time, dwells, deletes it, dwells again
//! and moves on to the next phrase, forever. The machine itself never
//! touches a timer: each [`Typewriter::tick`] returns what to render and how
//! long to wait before the next tick, and the caller arms a single-shot
//! timer with that delay (see [`crate::scheduler::TimerSlot`]).
//!
//! ```text
//!            offset < len                         offset > 0
//!          ┌──────────────┐                    ┌──────────────┐
//!          ▼              │                    ▼              │
//!       Typing ───────────┘  offset == len  Deleting ─────────┘
//!          ▲ ────────────────────────────────▶ │
//!          │        PausedAfterTyping          │ offset == 0
//!          └───────────────────────────────────┘
//!                  PausedAfterDeleting (index + 1)
//! ```

use std::time::Duration;

use rand::Rng;

use crate::config::TypewriterConfig;
use crate::error::{FolioError, FolioResult};

/// What the most recent tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Added a character
    Typing,
    /// Removed a character
    Deleting,
    /// Reached the end of the phrase; dwelling before deleting
    PausedAfterTyping,
    /// Emptied the phrase and advanced the index; dwelling before typing.
    /// The start delay counts as this phase too.
    PausedAfterDeleting,
}

/// Cursor presentation for a tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cursor {
    Visible,
    Hidden,
}

/// Output of a single tick.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tick {
    /// Text to render in place of the previous one
    pub text: String,
    pub cursor: Cursor,
    /// Wait before the next tick
    pub delay: Duration,
}

/// Delay ranges and dwell times, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypewriterTimings {
    pub type_min_ms: u64,
    pub type_max_ms: u64,
    pub delete_min_ms: u64,
    pub delete_max_ms: u64,
    pub dwell_after_typing_ms: u64,
    pub dwell_after_deleting_ms: u64,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self::from(&TypewriterConfig::default())
    }
}

impl From<&TypewriterConfig> for TypewriterTimings {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_min_ms: config.type_min_ms,
            type_max_ms: config.type_max_ms,
            delete_min_ms: config.delete_min_ms,
            delete_max_ms: config.delete_max_ms,
            dwell_after_typing_ms: config.dwell_after_typing_ms,
            dwell_after_deleting_ms: config.dwell_after_deleting_ms,
        }
    }
}

/// Draw from `[min, max)`; a collapsed range yields `min`.
fn jitter<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> Duration {
    let ms = if max > min { rng.random_range(min..max) } else { min };
    Duration::from_millis(ms)
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    /// Characters (not bytes) of the current phrase already shown
    offset: usize,
    deleting: bool,
    phase: Phase,
    timings: TypewriterTimings,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timings: TypewriterTimings) -> FolioResult<Self> {
        if phrases.is_empty() {
            return Err(FolioError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            offset: 0,
            deleting: false,
            phase: Phase::PausedAfterDeleting,
            timings,
        })
    }

    pub fn from_config(config: &TypewriterConfig) -> FolioResult<Self> {
        Self::new(config.phrases.clone(), TypewriterTimings::from(config))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// Length of the current phrase in characters.
    pub fn current_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// The currently visible prefix.
    pub fn visible_text(&self) -> String {
        self.current_phrase().chars().take(self.offset).collect()
    }

    /// Render the current prefix, then advance one step.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        let text = self.visible_text();
        let len = self.current_len();
        let t = self.timings;

        let (cursor, delay) = if !self.deleting && self.offset < len {
            self.offset += 1;
            self.phase = Phase::Typing;
            (Cursor::Visible, jitter(rng, t.type_min_ms, t.type_max_ms))
        } else if self.deleting && self.offset > 0 {
            self.offset -= 1;
            self.phase = Phase::Deleting;
            (Cursor::Visible, jitter(rng, t.delete_min_ms, t.delete_max_ms))
        } else {
            self.deleting = !self.deleting;
            if self.deleting {
                self.phase = Phase::PausedAfterTyping;
                (Cursor::Hidden, Duration::from_millis(t.dwell_after_typing_ms))
            } else {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::PausedAfterDeleting;
                (Cursor::Visible, Duration::from_millis(t.dwell_after_deleting_ms))
            }
        };

        tracing::trace!(
            index = self.index,
            offset = self.offset,
            deleting = self.deleting,
            "typewriter tick"
        );
        Tick {
            text,
            cursor,
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn machine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            TypewriterTimings::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert!(matches!(
            Typewriter::new(Vec::new(), TypewriterTimings::default()),
            Err(FolioError::EmptyPhrases)
        ));
    }

    #[test]
    fn types_then_dwells_then_deletes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tw = machine(&["Hi"]);

        let t = tw.tick(&mut rng);
        assert_eq!(t.text, "");
        assert_eq!(tw.phase(), Phase::Typing);
        assert!(t.delay >= Duration::from_millis(100) && t.delay < Duration::from_millis(200));

        assert_eq!(tw.tick(&mut rng).text, "H");
        assert_eq!(tw.offset(), 2);

        let dwell = tw.tick(&mut rng);
        assert_eq!(dwell.text, "Hi");
        assert_eq!(dwell.cursor, Cursor::Hidden);
        assert_eq!(dwell.delay, Duration::from_millis(1500));
        assert!(tw.is_deleting());
        assert_eq!(tw.phase(), Phase::PausedAfterTyping);

        let del = tw.tick(&mut rng);
        assert_eq!(del.text, "Hi");
        assert_eq!(del.cursor, Cursor::Visible);
        assert!(del.delay >= Duration::from_millis(50) && del.delay < Duration::from_millis(100));
        assert_eq!(tw.offset(), 1);
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tw = machine(&["a", "b"]);
        // "a": type(1), dwell, delete(1), dwell -> index 1
        for _ in 0..4 {
            tw.tick(&mut rng);
        }
        assert_eq!(tw.index(), 1);
        for _ in 0..4 {
            tw.tick(&mut rng);
        }
        assert_eq!(tw.index(), 0);
    }

    #[test]
    fn pause_after_deleting_uses_short_dwell() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tw = machine(&["x", "y"]);
        for _ in 0..3 {
            tw.tick(&mut rng);
        }
        let t = tw.tick(&mut rng);
        assert_eq!(t.delay, Duration::from_millis(500));
        assert_eq!(tw.phase(), Phase::PausedAfterDeleting);
        assert!(!tw.is_deleting());
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut tw = machine(&["héllo"]);
        for _ in 0..3 {
            tw.tick(&mut rng);
        }
        assert_eq!(tw.visible_text(), "hél");
        assert_eq!(tw.current_len(), 5);
    }

    #[test]
    fn empty_phrase_flips_immediately() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tw = machine(&["", "z"]);
        let t = tw.tick(&mut rng);
        assert_eq!(t.text, "");
        assert!(tw.is_deleting());
        tw.tick(&mut rng);
        assert_eq!(tw.index(), 1);
    }

    #[test]
    fn collapsed_range_uses_minimum() {
        let mut rng = StdRng::seed_from_u64(9);
        let timings = TypewriterTimings {
            type_min_ms: 80,
            type_max_ms: 80,
            ..TypewriterTimings::default()
        };
        let mut tw = Typewriter::new(vec!["ok".to_string()], timings).unwrap();
        assert_eq!(tw.tick(&mut rng).delay, Duration::from_millis(80));
    }
}
