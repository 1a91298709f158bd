use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ResultDisplay},
};
use crate::domain::{engine::EMPHASIS_DURATION, error::DecisionError};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Roll => UpdateResult::Handled(start_roll(state)),
        Action::RollStep { roll_id, step } => {
            if let Some(value) = state.roll.advance(*roll_id, *step) {
                state.result = ResultDisplay::Shuffling(value.to_string());
            }
            UpdateResult::Handled(None)
        }
        Action::RollFinished { roll_id } => {
            if let Some(decision) = state.roll.finish(*roll_id) {
                tracing::info!(list = %decision.list_title, choice = %decision.value, "decision made");
                state.history.record(&decision.list_title, &decision.value);
                state.result = ResultDisplay::Decided {
                    value: decision.value,
                    emphasis_until: Some(Instant::now() + EMPHASIS_DURATION),
                };
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn start_roll(state: &mut AppState) -> Option<Command> {
    if state.mode != AppMode::Normal {
        return None;
    }
    if state.roll.is_rolling() {
        tracing::debug!("roll already in progress, ignoring");
        return None;
    }
    let list = state.registry.current()?;
    if list.options.is_empty() {
        state.set_status(DecisionError::NoOptions.to_string());
        return None;
    }

    let roll_id = state.next_roll_id;
    let (title, options) = (list.title.clone(), list.options.clone());
    let steps = state.roll_config.steps();
    if !state
        .roll
        .start(roll_id, &title, &options, steps, &mut rand::thread_rng())
    {
        return None;
    }
    state.next_roll_id += 1;
    tracing::debug!(roll_id, steps, list = %title, "roll started");

    Some(Command::StartRollTimer {
        roll_id,
        steps,
        interval: state.roll_config.interval(),
    })
}
