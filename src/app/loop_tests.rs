use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::{AppMode, AppState};
use crate::config::RollConfig;
use crate::domain::models::DecisionList;
use crate::domain::store::{KeyValueStore, MockKeyValueStore, LISTS_KEY};
use crate::infrastructure::MemoryStore;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn memory_persistence() -> (Arc<MemoryStore>, ListPersistence) {
    let store = Arc::new(MemoryStore::new());
    let persistence = ListPersistence::new(store.clone());
    (store, persistence)
}

fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars()
        .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
        .collect()
}

#[tokio::test]
async fn test_load_command_seeds_empty_store() {
    let (store, persistence) = memory_persistence();
    let (tx, _rx) = mpsc::channel(1);

    let action = run_command(Command::LoadLists, &persistence, &tx).await;
    assert_eq!(action, Some(Action::ListsLoaded(Ok(vec![DecisionList::seed()]))));
    assert!(store.get(LISTS_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn test_save_command_error_becomes_action() {
    let mut mock = MockKeyValueStore::new();
    mock.expect_set()
        .returning(|_, _| Err(anyhow::anyhow!("No space left on device")));
    let persistence = ListPersistence::new(Arc::new(mock));
    let (tx, _rx) = mpsc::channel(1);

    let action = run_command(
        Command::SaveLists(vec![DecisionList::seed()]),
        &persistence,
        &tx,
    )
    .await;
    let Some(Action::ListsSaved(Err(message))) = action else {
        panic!("Expected Action::ListsSaved(Err(_)), got {action:?}");
    };
    assert!(message.contains("No space left"));

    // The reducer turns it into a visible error with a hint.
    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, Action::ListsSaved(Err(message)));
    let error = state.last_error.unwrap();
    assert!(!error.suggestions.is_empty());
}

#[tokio::test]
async fn test_load_failure_falls_back_in_state() {
    let mut mock = MockKeyValueStore::new();
    mock.expect_get()
        .returning(|_| Err(anyhow::anyhow!("Permission denied (os error 13)")));
    let persistence = ListPersistence::new(Arc::new(mock));
    let (tx, _rx) = mpsc::channel(1);

    let action = run_command(Command::LoadLists, &persistence, &tx)
        .await
        .unwrap();
    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, action);
    assert_eq!(state.mode, AppMode::Normal);
    assert_eq!(state.registry.lists(), &[DecisionList::seed()]);
    assert!(state.last_error.is_some());
}

#[tokio::test]
async fn test_roll_timer_sends_steps_then_finish() {
    let (tx, mut rx) = mpsc::channel(10);
    spawn_roll_timer(tx, 7, 3, Duration::from_millis(1))
        .await
        .unwrap();

    let mut received = Vec::new();
    while let Ok(action) = rx.try_recv() {
        received.push(action);
    }
    assert_eq!(
        received,
        vec![
            Action::RollStep { roll_id: 7, step: 0 },
            Action::RollStep { roll_id: 7, step: 1 },
            Action::RollStep { roll_id: 7, step: 2 },
            Action::RollFinished { roll_id: 7 },
        ]
    );
}

#[tokio::test]
async fn test_roll_end_to_end_through_timer() {
    let (_store, persistence) = memory_persistence();
    let (tx, mut rx) = mpsc::channel(100);
    let mut state = AppState::default();
    state.roll_config = RollConfig {
        steps: 20,
        interval_ms: 1,
    };
    crate::app::reducer::update(
        &mut state,
        Action::ListsLoaded(Ok(vec![DecisionList::new(
            "Dinner",
            vec!["Pizza".into(), "Burgers".into(), "Sushi".into()],
        )])),
    );

    let cmd = crate::app::reducer::update(&mut state, Action::Roll).unwrap();
    assert!(run_command(cmd, &persistence, &tx).await.is_none());

    // A second trigger mid-roll is ignored.
    assert!(crate::app::reducer::update(&mut state, Action::Roll).is_none());

    let mut steps_seen = 0;
    while let Some(action) = rx.recv().await {
        let finished = matches!(action, Action::RollFinished { .. });
        if matches!(action, Action::RollStep { .. }) {
            steps_seen += 1;
        }
        crate::app::reducer::update(&mut state, action);
        if finished {
            break;
        }
    }

    assert_eq!(steps_seen, 20);
    assert_eq!(state.history.len(), 1);
    assert!(["Pizza", "Burgers", "Sushi"].contains(&state.result.text()));
    assert!(!state.roll.is_rolling());
    assert!(state.stage_view().unwrap().trigger_enabled);
}

#[tokio::test]
async fn test_created_list_reaches_the_store() {
    let (store, persistence) = memory_persistence();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let mut script = vec![Event::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE))];
    script.extend(typed("Games"));
    script.push(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    script.extend(typed("Chess"));
    script.push(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    script.extend(typed("Go"));
    script.push(Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
    script.push(ctrl_c());

    for event in script {
        event_tx.send(Ok(event)).await.unwrap();
    }

    tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), persistence, event_rx),
    )
    .await
    .expect("loop should quit")
    .unwrap();

    let raw = store.get(LISTS_KEY).await.unwrap().unwrap();
    let lists: Vec<DecisionList> = serde_json::from_str(&raw).unwrap();
    assert_eq!(lists.len(), 2);
    assert!(lists[0].locked);
    assert_eq!(lists[1].title, "Games");
    assert_eq!(lists[1].options, vec!["Chess".to_string(), "Go".to_string()]);
    assert!(!lists[1].locked);
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let (_store, persistence) = memory_persistence();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app_state = AppState::default();
    app_state.roll_config = RollConfig {
        steps: 5,
        interval_ms: 1,
    };

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Ctrl+C quits from every mode
        let _ = event_tx.send(Ok(ctrl_c())).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, persistence, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Never Ctrl+C, which would end the run early.
    if rng.gen_bool(0.1) && code != KeyCode::Char('c') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..4) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        _ => MouseEventKind::ScrollDown,
    };
    Event::Mouse(MouseEvent {
        kind,
        column: rng.gen_range(0..size.width),
        row: rng.gen_range(0..size.height),
        modifiers: KeyModifiers::empty(),
    })
}
