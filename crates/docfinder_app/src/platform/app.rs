use std::io::{self, Write as _};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use docfinder_core::{
    init, specialty_facets, update, AppState, ConsultationMode, Msg, SortKey,
};
use finder_logging::finder_info;

use super::effects::EffectRunner;
use super::location::SessionLocation;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::constants::{
    KEY_CLEAR_FILTERS, KEY_MODE_CYCLE, KEY_QUIT, KEY_RETRY, KEY_SORT_CYCLE, KEY_SUGGESTION,
};

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::File);
    finder_info!("docfinder starting");

    let location = Arc::new(Mutex::new(SessionLocation::from_args(std::env::args())));
    let seed = location.lock().expect("lock location").query().to_string();

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), Arc::clone(&location));

    let (state, effects) = init(&seed);
    runner.run(effects);

    // Background tick to coalesce rendering and keep the loop breathing.
    {
        let msg_tx = msg_tx.clone();
        thread::spawn(move || {
            let interval = Duration::from_millis(75);
            while msg_tx.send(Msg::Tick).is_ok() {
                thread::sleep(interval);
            }
        });
    }

    let guard = TerminalGuard::enter()?;
    let result = event_loop(state, &msg_rx, &msg_tx, &runner);
    drop(guard);
    finder_info!("docfinder exiting");
    result
}

fn event_loop(
    mut state: AppState,
    msg_rx: &mpsc::Receiver<Msg>,
    msg_tx: &mpsc::Sender<Msg>,
    runner: &EffectRunner,
) -> Result<()> {
    let mut out = io::stdout();
    let mut facet_cursor: usize = 0;
    let mut fetched_at: Option<DateTime<Utc>> = None;
    let mut force_render = true;

    loop {
        while event::poll(Duration::from_millis(25))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match translate_key(&key, &state, facet_cursor) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Send(msg) => {
                            let _ = msg_tx.send(msg);
                        }
                        KeyAction::MoveCursor(delta) => {
                            let count = specialty_facets(state.doctors()).len();
                            facet_cursor = step_cursor(facet_cursor, delta, count);
                            force_render = true;
                        }
                        KeyAction::None => {}
                    }
                }
                Event::Resize(_, _) => force_render = true,
                _ => {}
            }
        }

        while let Ok(msg) = msg_rx.try_recv() {
            if matches!(msg, Msg::DoctorsLoaded(_)) {
                fetched_at = Some(Utc::now());
            }
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() || force_render {
            let view = state.view();
            facet_cursor = facet_cursor.min(view.facets.len().saturating_sub(1));
            let stamp = fetched_at.map(|at| at.format("%H:%M:%S").to_string());
            let size = terminal::size()?;
            ui::render::render(&mut out, &view, facet_cursor, stamp.as_deref(), size)?;
            force_render = false;
        }
    }
}

enum KeyAction {
    Quit,
    Send(Msg),
    MoveCursor(isize),
    None,
}

/// Maps raw terminal input onto core messages. The only state consulted
/// here is what the key acts on (current term, facet under the cursor).
fn translate_key(key: &KeyEvent, state: &AppState, facet_cursor: usize) -> KeyAction {
    let code = key.code;
    if code == KEY_QUIT
        || (code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return KeyAction::Quit;
    }
    if code == KEY_RETRY {
        return KeyAction::Send(Msg::RetryRequested);
    }
    if code == KEY_MODE_CYCLE {
        return KeyAction::Send(Msg::ModeSelected(next_mode(&state.filters().mode)));
    }
    if code == KEY_SORT_CYCLE {
        return KeyAction::Send(Msg::SortSelected(next_sort(&state.filters().sort)));
    }
    if code == KEY_CLEAR_FILTERS {
        return KeyAction::Send(Msg::ClearFilters);
    }
    if code == KEY_SUGGESTION {
        return match state.view().suggestions.first() {
            Some(name) => KeyAction::Send(Msg::SuggestionPicked(name.clone())),
            None => KeyAction::None,
        };
    }
    match code {
        KeyCode::Up => KeyAction::MoveCursor(-1),
        KeyCode::Down => KeyAction::MoveCursor(1),
        KeyCode::Enter => {
            let facets = specialty_facets(state.doctors());
            match facets.get(facet_cursor) {
                Some(name) => KeyAction::Send(Msg::SpecialtyToggled(name.clone())),
                None => KeyAction::None,
            }
        }
        KeyCode::Backspace => {
            let mut term = state.filters().search_term.clone();
            term.pop();
            KeyAction::Send(Msg::SearchChanged(term))
        }
        KeyCode::Char(ch) => {
            let mut term = state.filters().search_term.clone();
            term.push(ch);
            KeyAction::Send(Msg::SearchChanged(term))
        }
        _ => KeyAction::None,
    }
}

fn step_cursor(cursor: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = count - 1;
    if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta as usize).min(last)
    }
}

fn next_mode(mode: &ConsultationMode) -> ConsultationMode {
    match mode {
        ConsultationMode::Unset | ConsultationMode::Unrecognized(_) => {
            ConsultationMode::VideoConsult
        }
        ConsultationMode::VideoConsult => ConsultationMode::InClinic,
        ConsultationMode::InClinic => ConsultationMode::All,
        ConsultationMode::All => ConsultationMode::Unset,
    }
}

fn next_sort(sort: &SortKey) -> SortKey {
    match sort {
        SortKey::Unset | SortKey::Unrecognized(_) => SortKey::Fees,
        SortKey::Fees => SortKey::Experience,
        SortKey::Experience => SortKey::Unset,
    }
}

/// Raw mode + alternate screen for the lifetime of the UI.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::{next_mode, next_sort, step_cursor};
    use docfinder_core::{ConsultationMode, SortKey};

    #[test]
    fn mode_cycle_visits_every_value() {
        let mut mode = ConsultationMode::Unset;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = next_mode(&mode);
            seen.push(mode.clone());
        }
        assert_eq!(
            seen,
            vec![
                ConsultationMode::VideoConsult,
                ConsultationMode::InClinic,
                ConsultationMode::All,
                ConsultationMode::Unset,
            ]
        );
    }

    #[test]
    fn sort_cycle_returns_to_unset() {
        assert_eq!(next_sort(&SortKey::Unset), SortKey::Fees);
        assert_eq!(next_sort(&SortKey::Fees), SortKey::Experience);
        assert_eq!(next_sort(&SortKey::Experience), SortKey::Unset);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        assert_eq!(step_cursor(0, -1, 5), 0);
        assert_eq!(step_cursor(4, 1, 5), 4);
        assert_eq!(step_cursor(2, 1, 5), 3);
        assert_eq!(step_cursor(0, 1, 0), 0);
    }
}
