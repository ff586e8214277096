//! Timer engine for the session/break clock.
//!
//! This module provides the core countdown functionality:
//! - Total commands (toggle, adjust, reset) over the clock state machine
//! - Mode flip at the zero-crossing tick
//! - Event firing for the sound collaborator and logging
//! - A scoped 1 Hz tick source that exists only while the clock runs

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex, Notify};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::types::{ClockState, StepDirection, TimerMode};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for the sound collaborator and external observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started advancing
    Started,
    /// Countdown paused
    Paused,
    /// A duration was adjusted
    Adjusted {
        /// Which mode's duration changed
        target: TimerMode,
        /// The new value in minutes
        minutes: u32,
    },
    /// Everything restored to defaults; any playing tone must stop
    Reset,
    /// A duration expired; the completion tone should play
    Expired {
        /// The mode being entered
        entered: TimerMode,
    },
    /// One second elapsed
    Tick {
        /// Remaining seconds after the tick
        remaining_seconds: u32,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the clock state and publishes events.
///
/// Every command is total: there is no reachable state in which any of them
/// fails. The only error path is the event channel closing, which means the
/// daemon is shutting down.
pub struct TimerEngine {
    /// Current clock state
    state: ClockState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    /// Wakes the ticker task when the clock starts running
    wake: Arc<Notify>,
}

impl TimerEngine {
    /// Creates a new engine with the given event channel.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: ClockState::new(),
            event_tx,
            wake: Arc::new(Notify::new()),
        }
    }

    /// Starts or pauses the countdown.
    pub fn toggle(&mut self) -> Result<()> {
        self.state.toggle_running();

        if self.state.running {
            // notify_one stores a permit, so a wakeup sent before the ticker
            // task awaits is not lost.
            self.wake.notify_one();
            self.event_tx
                .send(TimerEvent::Started)
                .context("Failed to send started event")?;
        } else {
            self.event_tx
                .send(TimerEvent::Paused)
                .context("Failed to send paused event")?;
        }

        Ok(())
    }

    /// Steps the target mode's duration by one minute.
    ///
    /// At-bound requests change nothing and emit nothing.
    pub fn adjust(&mut self, target: TimerMode, direction: StepDirection) -> Result<()> {
        if self.state.adjust(target, direction) {
            self.event_tx
                .send(TimerEvent::Adjusted {
                    target,
                    minutes: self.state.config.duration_secs(target) / 60,
                })
                .context("Failed to send adjusted event")?;
        }

        Ok(())
    }

    /// Restores all state to defaults and asks collaborators to stop.
    pub fn reset(&mut self) -> Result<()> {
        self.state.reset();

        self.event_tx
            .send(TimerEvent::Reset)
            .context("Failed to send reset event")?;

        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// On the zero-crossing tick the completion event is emitted before the
    /// tick event that carries the entered mode's full duration.
    pub fn tick(&mut self) -> Result<()> {
        let crossed = self.state.tick();

        if crossed {
            self.event_tx
                .send(TimerEvent::Expired {
                    entered: self.state.mode,
                })
                .context("Failed to send expired event")?;
        }

        self.event_tx
            .send(TimerEvent::Tick {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send tick event")?;

        Ok(())
    }

    /// Returns a reference to the current clock state.
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Returns true if the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Returns the handle the ticker task waits on while the clock is idle.
    pub fn wake_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.wake)
    }

    /// Returns a mutable reference to the clock state (for testing).
    #[cfg(any(test, feature = "test-utils"))]
    pub fn state_mut(&mut self) -> &mut ClockState {
        &mut self.state
    }
}

// ============================================================================
// Ticker task
// ============================================================================

/// Drives the engine with one tick per second while it is running.
///
/// The interval is created on the transition to running and dropped on the
/// transition back to idle (or on task teardown), so exactly one tick source
/// exists while the clock counts down and none exists otherwise. Ticks are
/// serialized through the engine mutex; a new tick cannot start before the
/// previous one completes.
pub async fn run_ticker(engine: Arc<Mutex<TimerEngine>>) -> Result<()> {
    let wake = engine.lock().await.wake_handle();

    loop {
        // Idle: no tick source exists until the clock is started.
        while !engine.lock().await.is_running() {
            wake.notified().await;
        }

        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it so the
        // first countdown tick lands a full second after starting.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let mut eng = engine.lock().await;
            if !eng.is_running() {
                // Leaving the loop drops the interval.
                break;
            }
            eng.tick()?;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
