use crate::app::{
    action::Action, command::Command, input::map_event_to_action, persistence::ListPersistence,
    reducer, state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    persistence: ListPersistence,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, persistence, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    persistence: ListPersistence,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    app_state.store_location = persistence.location();

    // Initial Load
    let mut pending = run_command(Command::LoadLists, &persistence, &action_tx).await;

    loop {
        // --- 1. Update (Reducer) ---
        // Store results feed straight back in, so writes land in order.
        while let Some(action) = pending.take() {
            let command = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                tracing::info!("quitting");
                return Ok(());
            }
            if let Some(cmd) = command {
                pending = run_command(cmd, &persistence, &action_tx).await;
            }
        }

        // --- 2. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 3. Event Handling (TEA Runtime) ---
        pending = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Roll timer
            Some(a) = action_rx.recv() => Some(a),
        };
    }
}

/// Carries out `command`. Store work is awaited here and its outcome
/// returned; timers run in the background and report over `tx`.
pub(crate) async fn run_command(
    command: Command,
    persistence: &ListPersistence,
    tx: &mpsc::Sender<Action>,
) -> Option<Action> {
    match command {
        Command::LoadLists => Some(Action::ListsLoaded(
            persistence.load().await.map_err(|e| format!("{e:#}")),
        )),
        Command::SaveLists(lists) => Some(Action::ListsSaved(
            persistence.save(&lists).await.map_err(|e| format!("{e:#}")),
        )),
        Command::StartRollTimer {
            roll_id,
            steps,
            interval,
        } => {
            spawn_roll_timer(tx.clone(), roll_id, steps, interval);
            None
        }
    }
}

/// Sends one `RollStep` per interval, then `RollFinished`.
pub(crate) fn spawn_roll_timer(
    tx: mpsc::Sender<Action>,
    roll_id: u64,
    steps: usize,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        // The first tick completes immediately.
        ticker.tick().await;
        for step in 0..steps {
            ticker.tick().await;
            if tx.send(Action::RollStep { roll_id, step }).await.is_err() {
                return;
            }
        }
        let _ = tx.send(Action::RollFinished { roll_id }).await;
    })
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
