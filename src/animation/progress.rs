use crate::{
    animation::ease::{AnimSpec, lerp},
    foundation::core::{FrameIndex, Fps},
    notifier::{collector::Collector, emitter::Emitter},
};

/// Phase of an [`AnimationProgress`] cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Step {
    /// Values are pinned to their start value.
    StartIdle,
    /// Values are interpolating toward their end value.
    Running,
    /// Values are pinned to their end value.
    EndIdle,
}

/// Plain state of the progress machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressState {
    /// Current phase.
    pub step: Step,
    /// A cycle was requested and has not reported completion yet.
    pub started: bool,
    /// Frame on which the current `Running` phase began.
    pub running_since: Option<FrameIndex>,
}

/// Input to [`ProgressState::reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Request a new cycle. Ignored while one is already started.
    Start,
    /// One frame elapsed. `duration_ms` is the longest duration among the current consumers.
    Tick {
        /// Frame being evaluated.
        now: FrameIndex,
        /// Frame rate used to measure the running phase.
        fps: Fps,
        /// Length of the running phase.
        duration_ms: u32,
    },
}

/// Result of one reducer application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reduced {
    /// Next state.
    pub state: ProgressState,
    /// The cycle finished on this event; exactly one completion must be signalled.
    pub completed: bool,
}

impl ProgressState {
    /// Fresh machine: `StartIdle`, not started.
    pub const fn new() -> Self {
        Self {
            step: Step::StartIdle,
            started: false,
            running_since: None,
        }
    }

    /// No interpolation is owed and no cycle is requested.
    pub fn is_idle(&self) -> bool {
        !self.started && matches!(self.step, Step::StartIdle | Step::EndIdle)
    }

    /// Apply one event. Ticks advance the phase by at most one step.
    pub fn reduce(self, event: ProgressEvent) -> Reduced {
        let unchanged = Reduced {
            state: self,
            completed: false,
        };

        match event {
            ProgressEvent::Start => {
                if self.started {
                    return unchanged;
                }
                Reduced {
                    state: Self {
                        step: Step::StartIdle,
                        started: true,
                        running_since: None,
                    },
                    completed: false,
                }
            }
            ProgressEvent::Tick {
                now,
                fps,
                duration_ms,
            } => match self.step {
                Step::StartIdle if self.started => Reduced {
                    state: Self {
                        step: Step::Running,
                        running_since: Some(now),
                        ..self
                    },
                    completed: false,
                },
                Step::StartIdle => unchanged,
                Step::Running => {
                    let since = self.running_since.unwrap_or(now);
                    if fps.frames_to_millis(now.since(since)) < f64::from(duration_ms) {
                        return unchanged;
                    }
                    Reduced {
                        state: Self {
                            step: Step::EndIdle,
                            running_since: None,
                            ..self
                        },
                        completed: false,
                    }
                }
                Step::EndIdle if self.started => Reduced {
                    state: Self {
                        started: false,
                        ..self
                    },
                    completed: true,
                },
                Step::EndIdle => unchanged,
            },
        }
    }

    /// Value of a consumer going from `start` to `end` with `spec`, observed at frame `now`.
    pub fn sample(&self, start: f64, end: f64, spec: AnimSpec, now: FrameIndex, fps: Fps) -> f64 {
        match self.step {
            Step::StartIdle => start,
            Step::EndIdle => end,
            Step::Running => {
                let since = self.running_since.unwrap_or(now);
                lerp(start, end, spec.fraction_between(since, now, fps))
            }
        }
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared timeline of one transition, reused across transitions.
///
/// The owner calls [`AnimationProgress::tick`] once per frame and [`AnimationProgress::start`]
/// to request a cycle. Each completed cycle emits exactly one `()` on the completion emitter.
#[derive(Debug)]
pub struct AnimationProgress {
    state: ProgressState,
    last_tick: Option<(FrameIndex, Fps)>,
    notifier: Emitter<()>,
}

impl AnimationProgress {
    /// Fresh machine with no subscribers.
    pub fn new() -> Self {
        Self {
            state: ProgressState::new(),
            last_tick: None,
            notifier: Emitter::new(),
        }
    }

    /// Current plain state.
    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Current phase.
    pub fn step(&self) -> Step {
        self.state.step
    }

    /// Whether a cycle is requested and not yet completed.
    pub fn is_started(&self) -> bool {
        self.state.started
    }

    /// See [`ProgressState::is_idle`].
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Request a cycle. No-op while one is already started.
    pub fn start(&mut self) {
        if self.state.started {
            return;
        }
        self.state = self.state.reduce(ProgressEvent::Start).state;
        tracing::debug!("animation progress started");
    }

    /// Evaluate one frame. Returns `true` on the frame the cycle completes.
    pub fn tick(&mut self, now: FrameIndex, fps: Fps, duration_ms: u32) -> bool {
        self.last_tick = Some((now, fps));
        let Reduced { state, completed } = self.state.reduce(ProgressEvent::Tick {
            now,
            fps,
            duration_ms,
        });
        if state.step != self.state.step {
            tracing::debug!(from = ?self.state.step, to = ?state.step, frame = now.0, "animation progress step");
        }
        self.state = state;

        if completed {
            let delivered = self.notifier.try_emit(());
            tracing::debug!(frame = now.0, delivered, "animation progress completed");
        }
        completed
    }

    /// Value for one consumer: `start` before running, `end` once done, tweened in between.
    pub fn animate_float(&self, start: f64, end: f64, spec: AnimSpec) -> f64 {
        match self.last_tick {
            Some((now, fps)) => self.state.sample(start, end, spec, now, fps),
            None => match self.state.step {
                Step::EndIdle => end,
                Step::StartIdle | Step::Running => start,
            },
        }
    }

    /// Collector over completion events.
    pub fn collect(&self) -> Collector<()> {
        self.notifier.collector()
    }

    /// Drop the current cycle without signalling completion.
    pub fn reset(&mut self) {
        self.state = ProgressState::new();
        self.last_tick = None;
    }
}

impl Default for AnimationProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
