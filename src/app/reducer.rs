use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

/// Routes `action` through each feature until one claims it.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::ui::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::lists::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::roll::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::history::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::editor::update(state, &action) {
        return cmd;
    }
    tracing::trace!(?action, "unhandled action");
    None
}
