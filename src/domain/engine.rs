use rand::Rng;
use std::time::Duration;

pub const ROLL_STEPS: usize = 20;
/// Upper bound on frames per roll; larger configured values are capped.
pub const MAX_ROLL_STEPS: usize = 1_000;
pub const ROLL_INTERVAL: Duration = Duration::from_millis(80);
pub const EMPHASIS_DURATION: Duration = Duration::from_millis(200);

pub const TRIGGER_IDLE_LABEL: &str = "Decide for me";
pub const TRIGGER_ROLLING_LABEL: &str = "Rolling...";

/// Every random draw a roll needs, made before the first frame is shown.
///
/// Frames are sampled independently (repeats are expected) and the decision
/// is one further independent draw, so the last frame need not match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollPlan {
    frames: Vec<usize>,
    decision: usize,
}

impl RollPlan {
    /// Returns `None` for an empty option set.
    pub fn draw<R: Rng + ?Sized>(option_count: usize, steps: usize, rng: &mut R) -> Option<Self> {
        if option_count == 0 {
            return None;
        }
        let frames = (0..steps.min(MAX_ROLL_STEPS))
            .map(|_| rng.gen_range(0..option_count))
            .collect();
        let decision = rng.gen_range(0..option_count);
        Some(Self { frames, decision })
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn frame(&self, step: usize) -> Option<usize> {
        self.frames.get(step).copied()
    }

    #[must_use]
    pub fn decision(&self) -> usize {
        self.decision
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RollState {
    #[default]
    Idle,
    Rolling {
        roll_id: u64,
        list_title: String,
        options: Vec<String>,
        plan: RollPlan,
        step: usize,
    },
}

/// The committed outcome of a finished roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub list_title: String,
    pub value: String,
}

impl RollState {
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        matches!(self, Self::Rolling { .. })
    }

    #[must_use]
    pub fn trigger_label(&self) -> &'static str {
        if self.is_rolling() {
            TRIGGER_ROLLING_LABEL
        } else {
            TRIGGER_IDLE_LABEL
        }
    }

    /// Moves `Idle` to `Rolling`. Refused while a roll is in flight or when
    /// there is nothing to pick from.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        roll_id: u64,
        list_title: &str,
        options: &[String],
        steps: usize,
        rng: &mut R,
    ) -> bool {
        if self.is_rolling() {
            return false;
        }
        let Some(plan) = RollPlan::draw(options.len(), steps, rng) else {
            return false;
        };
        *self = Self::Rolling {
            roll_id,
            list_title: list_title.to_string(),
            options: options.to_vec(),
            plan,
            step: 0,
        };
        true
    }

    /// The option to flash for `step`, ignoring steps from any other roll.
    pub fn advance(&mut self, id: u64, next_step: usize) -> Option<&str> {
        match self {
            Self::Rolling {
                roll_id,
                options,
                plan,
                step,
                ..
            } if *roll_id == id => {
                *step = next_step;
                plan.frame(next_step)
                    .and_then(|i| options.get(i))
                    .map(String::as_str)
            }
            _ => None,
        }
    }

    /// Returns to `Idle` and yields the decision. A finish message for a
    /// different roll leaves the state alone.
    pub fn finish(&mut self, id: u64) -> Option<Decision> {
        match self {
            Self::Rolling { roll_id, .. } if *roll_id == id => {}
            _ => return None,
        }
        match std::mem::take(self) {
            Self::Rolling {
                list_title,
                options,
                plan,
                ..
            } => options.get(plan.decision()).map(|value| Decision {
                list_title,
                value: value.clone(),
            }),
            Self::Idle => None,
        }
    }
}
