use crate::domain::models::DecisionList;
use std::time::Duration;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadLists,
    SaveLists(Vec<DecisionList>),
    StartRollTimer {
        roll_id: u64,
        steps: usize,
        interval: Duration,
    },
}
