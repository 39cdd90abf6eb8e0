use std::{cell::RefCell, collections::HashSet, rc::Rc};

use smallvec::SmallVec;

use crate::{
    animation::progress::AnimationProgress,
    effects::{
        direction::{ContentRole, NavDirection},
        resolve::{EffectDescription, Motion},
    },
    foundation::{
        core::FrameCtx,
        error::{NavFxError, NavFxResult},
    },
    navigation::screen::{Screen, screens_from_json},
    notifier::scope::{Job, TaskScope},
};

/// The two screens taking part in a transition, by index into the screen list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisiblePair {
    /// Previously settled screen.
    pub exiting: usize,
    /// Requested screen.
    pub entering: usize,
    /// Navigation direction.
    pub direction: NavDirection,
}

impl VisiblePair {
    /// Back-to-front draw order. On push the entering screen covers the exiting one; on pop
    /// the exiting screen slides away on top of the entering one.
    pub fn draw_order(&self) -> SmallVec<[usize; 2]> {
        let mut order: SmallVec<[usize; 2]> = match self.direction {
            NavDirection::Push => [self.exiting, self.entering].into(),
            NavDirection::Pop => [self.entering, self.exiting].into(),
        };
        order.dedup();
        order
    }

    fn contains(&self, index: usize) -> bool {
        self.exiting == index || self.entering == index
    }
}

/// Ids shared with the completion task.
#[derive(Debug, Default)]
struct Settlement {
    settled: Option<String>,
    requested: Option<String>,
    commits: u64,
}

impl Settlement {
    fn commit(&mut self) {
        let Some(requested) = self.requested.clone() else {
            return;
        };
        tracing::info!(
            from = self.settled.as_deref().unwrap_or_default(),
            to = requested.as_str(),
            "transition settled"
        );
        self.settled = Some(requested);
        self.commits += 1;
    }
}

/// Drives transitions between a fixed set of screens.
///
/// Call [`Orchestrator::render`] once per frame with the screen that should be shown. The
/// orchestrator owns one [`AnimationProgress`] reused by every transition and is the only
/// writer of each screen's effect. Dropping it cancels a pending completion without
/// committing anything.
#[derive(Debug)]
pub struct Orchestrator {
    screens: Vec<Screen>,
    settlement: Rc<RefCell<Settlement>>,
    progress: AnimationProgress,
    scope: TaskScope,
    completion: Option<Job>,
    active: Option<VisiblePair>,
    seen_commits: u64,
    is_back: bool,
}

impl Orchestrator {
    /// Register `screens`. Ids must be unique and configurations valid.
    pub fn new(screens: Vec<Screen>) -> NavFxResult<Self> {
        if screens.is_empty() {
            return Err(NavFxError::validation("at least one screen is required"));
        }
        let mut ids = HashSet::with_capacity(screens.len());
        for screen in &screens {
            screen.validate()?;
            if !ids.insert(screen.id()) {
                return Err(NavFxError::validation(format!(
                    "duplicate screen id '{}'",
                    screen.id()
                )));
            }
        }

        Ok(Self {
            screens,
            settlement: Rc::new(RefCell::new(Settlement::default())),
            progress: AnimationProgress::new(),
            scope: TaskScope::new(),
            completion: None,
            active: None,
            seen_commits: 0,
            is_back: false,
        })
    }

    /// Register screens described as JSON (see [`screens_from_json`]).
    pub fn from_json(json: &str) -> NavFxResult<Self> {
        Self::new(screens_from_json(json)?)
    }

    /// All registered screens, in registration order.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Screen by id.
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id() == id)
    }

    /// Screen considered arrived. `None` before the first render.
    pub fn settled_id(&self) -> Option<String> {
        self.settlement.borrow().settled.clone()
    }

    /// Target of the latest render.
    pub fn requested_id(&self) -> Option<String> {
        self.settlement.borrow().requested.clone()
    }

    /// Direction flag of the latest render.
    pub fn is_back(&self) -> bool {
        self.is_back
    }

    /// Number of transitions committed so far.
    pub fn settle_count(&self) -> u64 {
        self.settlement.borrow().commits
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Pair of the in-flight transition.
    pub fn visible_pair(&self) -> Option<VisiblePair> {
        self.active
    }

    /// Shared progress machine.
    pub fn progress(&self) -> &AnimationProgress {
        &self.progress
    }

    /// Pending completion task of the in-flight transition.
    pub fn completion_job(&self) -> Option<&Job> {
        self.completion.as_ref()
    }

    /// Screens to draw this frame, back to front.
    pub fn visible(&self) -> SmallVec<[&Screen; 2]> {
        if let Some(pair) = self.active {
            return pair
                .draw_order()
                .into_iter()
                .map(|i| &self.screens[i])
                .collect();
        }
        let settled = self.settled_id();
        settled
            .as_deref()
            .and_then(|id| self.screen(id))
            .into_iter()
            .collect()
    }

    /// Evaluate one frame with `requested_id` as the screen that should be shown.
    ///
    /// Fails before touching any state with [`NavFxError::UnknownScreenId`] when the id is not
    /// registered, and with [`NavFxError::Validation`] when `ctx.fps` has a zero part.
    #[tracing::instrument(skip(self, ctx), fields(frame = ctx.frame.0))]
    pub fn render(&mut self, ctx: &FrameCtx, requested_id: &str, is_back: bool) -> NavFxResult<()> {
        ctx.fps.validate()?;
        let entering = self.index_of(requested_id)?;

        // Completions emitted on the previous frame land before the settled id is read.
        self.drive_tasks();

        let settled = {
            let mut settlement = self.settlement.borrow_mut();
            settlement.requested = Some(requested_id.to_owned());
            if settlement.settled.is_none() {
                tracing::info!(screen = requested_id, "initial screen settled");
                settlement.settled = Some(requested_id.to_owned());
            }
            settlement.settled.clone().unwrap_or_default()
        };
        self.is_back = is_back;

        if settled == requested_id {
            if self.active.is_some() || !self.progress.is_idle() {
                self.abandon();
            }
            self.clear_effects();
            return Ok(());
        }

        let pair = VisiblePair {
            exiting: self.index_of(&settled)?,
            entering,
            direction: NavDirection::from_is_back(is_back),
        };
        self.retarget(pair);

        let direction = pair.direction;
        let config = *self.screens[pair.entering].config();
        let enter = Motion::plan(
            config.variant(ContentRole::Entering, direction),
            direction,
            ContentRole::Entering,
        );
        let exit = Motion::plan(
            config.variant(ContentRole::Exiting, direction),
            direction,
            ContentRole::Exiting,
        );
        let duration_ms = enter.spec.duration_ms.max(exit.spec.duration_ms);

        let completed = self.progress.tick(ctx.frame, ctx.fps, duration_ms);

        let exit_fx = exit.describe(exit.value(&self.progress), ctx.viewport);
        let enter_fx = enter.describe(enter.value(&self.progress), ctx.viewport);
        self.screens[pair.exiting].set_effect(exit_fx);
        self.screens[pair.entering].set_effect(enter_fx);

        if !completed && self.progress.is_idle() {
            self.arm_completion();
            self.progress.start();
        }

        self.drive_tasks();
        Ok(())
    }

    fn index_of(&self, id: &str) -> NavFxResult<usize> {
        self.screens
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| NavFxError::unknown_screen(id))
    }

    fn retarget(&mut self, pair: VisiblePair) {
        match self.active.replace(pair) {
            None => {
                tracing::debug!(
                    from = self.screens[pair.exiting].id(),
                    to = self.screens[pair.entering].id(),
                    direction = ?pair.direction,
                    "transition begins"
                );
                // A finished cycle rests in EndIdle; the next transition starts from its
                // start values.
                if self.progress.is_idle() {
                    self.progress.reset();
                }
            }
            Some(prev) if prev != pair => {
                tracing::debug!(
                    to = self.screens[pair.entering].id(),
                    direction = ?pair.direction,
                    "transition retargeted"
                );
                for index in [prev.exiting, prev.entering] {
                    if !pair.contains(index) {
                        self.screens[index].set_effect(EffectDescription::IDENTITY);
                    }
                }
            }
            Some(_) => {}
        }
    }

    fn arm_completion(&mut self) {
        if self.completion.as_ref().is_some_and(Job::is_active) {
            return;
        }
        let settlement = Rc::downgrade(&self.settlement);
        let job = self.progress.collect().once(&mut self.scope, move |()| {
            if let Some(settlement) = settlement.upgrade() {
                settlement.borrow_mut().commit();
            }
        });
        tracing::debug!("completion collector armed");
        self.completion = Some(job);
    }

    fn drive_tasks(&mut self) {
        self.scope.run_until_stalled();

        let commits = self.settlement.borrow().commits;
        if commits == self.seen_commits {
            return;
        }
        self.seen_commits = commits;
        self.completion = None;
        if let Some(pair) = self.active.take() {
            self.screens[pair.exiting].set_effect(EffectDescription::IDENTITY);
            self.screens[pair.entering].set_effect(EffectDescription::IDENTITY);
        }
    }

    fn abandon(&mut self) {
        if let Some(job) = self.completion.take() {
            job.cancel();
        }
        self.progress.reset();
        self.active = None;
        tracing::info!("transition abandoned");
    }

    fn clear_effects(&mut self) {
        for screen in &mut self.screens {
            if !screen.effect().is_identity() {
                screen.set_effect(EffectDescription::IDENTITY);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/orchestrator.rs"]
mod tests;
