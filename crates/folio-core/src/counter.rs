//! Stats counter ramp.
//!
//! Counts linearly from zero to the target over a fixed duration, one step
//! per animation frame. Intermediate frames round up; the last frame always
//! shows the target itself so accumulated float error never leaks.

use std::time::Duration;

use crate::config::AnimationConfig;
use crate::error::{FolioError, FolioResult};

/// Parsed `data-target` of a counter element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget(f64);

impl CounterTarget {
    pub fn parse(raw: &str) -> FolioResult<Self> {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && !trimmed.is_empty() => Ok(Self(value)),
            _ => Err(FolioError::InvalidCounterTarget(raw.to_string())),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Text for the final frame.
    pub fn display(&self) -> String {
        format_number(self.0)
    }
}

/// Whole numbers print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Intermediate(String),
    Final(String),
}

impl Frame {
    pub fn text(&self) -> &str {
        match self {
            Frame::Intermediate(text) | Frame::Final(text) => text,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Frame::Final(_))
    }
}

#[derive(Clone, Debug)]
pub struct CounterRamp {
    target: CounterTarget,
    steps: u32,
    increment: f64,
    accumulated: f64,
    step: u32,
}

impl CounterRamp {
    pub fn new(target: CounterTarget, duration: Duration, frame: Duration) -> Self {
        let frame_ms = frame.as_millis().max(1) as f64;
        let steps = ((duration.as_millis() as f64) / frame_ms).ceil().max(1.0) as u32;
        Self {
            target,
            steps,
            increment: target.value() / steps as f64,
            accumulated: 0.0,
            step: 0,
        }
    }

    pub fn from_config(target: CounterTarget, config: &AnimationConfig) -> Self {
        Self::new(
            target,
            Duration::from_millis(config.counter_duration_ms),
            Duration::from_millis(config.counter_frame_ms),
        )
    }

    /// Total number of frames, the final one included.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one frame. `None` once the final frame has been produced.
    pub fn next_frame(&mut self) -> Option<Frame> {
        if self.is_finished() {
            return None;
        }
        self.accumulated += self.increment;
        self.step += 1;
        if self.step < self.steps {
            Some(Frame::Intermediate(format_number(self.accumulated.ceil())))
        } else {
            Some(Frame::Final(self.target.display()))
        }
    }
}
