//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifecycle
//!
//! The reducer asks for I/O through `Effect`s. `SpawnFetch` starts a tokio
//! task that loads the catalog and posts the outcome back over an mpsc
//! channel as an `Action`. The task handle is kept in `FetchTask`: a new
//! load, a cancel, or quitting aborts it, and the generation tag on the
//! result lets the reducer drop anything that still slips through.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::task::JoinHandle;

use crate::api::{CatalogClient, CatalogSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Route;
use crate::core::state::CatalogState;
use crate::tui::component::EventHandler;
use crate::tui::components::{BookListEvent, BookListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which part of the home screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    PdfList,
    UnicodeList,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::PdfList,
            Focus::PdfList => Focus::UnicodeList,
            Focus::UnicodeList => Focus::Search,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Search => Focus::UnicodeList,
            Focus::PdfList => Focus::Search,
            Focus::UnicodeList => Focus::PdfList,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub search_box: SearchBox,
    pub pdf_list: BookListState,
    pub unicode_list: BookListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::PdfList,
            search_box: SearchBox::new(),
            pdf_list: BookListState::new(),
            unicode_list: BookListState::new(),
        }
    }
}

/// Owns the handle of the in-flight fetch, if any.
#[derive(Default)]
pub struct FetchTask {
    handle: Option<JoinHandle<()>>,
}

impl FetchTask {
    /// Aborts the current fetch (if any) and tracks `handle` instead.
    pub fn replace(&mut self, handle: JoinHandle<()>) {
        self.cancel();
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("Aborting in-flight fetch");
            }
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the HTTP catalog source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> std::io::Result<Arc<dyn CatalogSource>> {
    let client = CatalogClient::new(config.base_url.clone(), config.timeout)
        .map_err(std::io::Error::other)?;
    Ok(Arc::new(client))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config)?;
    let mut state = CatalogState::new(config.page);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut fetch = FetchTask::default();
    let result = event_loop(&mut terminal, &mut state, &mut tui, &source, &mut fetch);

    // Unmount: nothing may update the screen after this point
    fetch.cancel();
    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Shelf shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    state: &mut CatalogState,
    tui: &mut TuiState,
    source: &Arc<dyn CatalogSource>,
    fetch: &mut FetchTask,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Mount: load once on first display
    let effect = update(state, Action::Load);
    apply_effect(effect, fetch, source, &tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, state, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(100));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let effect = handle_event(state, tui, &event);
            if apply_effect(effect, fetch, source, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            return Ok(());
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(state, action);
            if apply_effect(effect, fetch, source, &tx) {
                return Ok(());
            }
        }
    }
}

/// Carries out an effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    fetch: &mut FetchTask,
    source: &Arc<dyn CatalogSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::SpawnFetch { page, generation } => {
            fetch.replace(spawn_fetch(source.clone(), page, generation, tx.clone()));
            false
        }
        Effect::CancelFetch => {
            fetch.cancel();
            false
        }
        Effect::Quit => {
            fetch.cancel();
            true
        }
    }
}

/// Routes one terminal event to the focused component and the reducer.
pub fn handle_event(state: &mut CatalogState, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    // Global keys
    match event {
        TuiEvent::ForceQuit => return update(state, Action::Quit),
        TuiEvent::Reload => return update(state, Action::Load),
        TuiEvent::Escape => {
            return if matches!(state.navigator.current(), Route::ChapterList(_)) {
                update(state, Action::Back)
            } else if state.is_loading() {
                update(state, Action::CancelLoad)
            } else {
                update(state, Action::Quit)
            };
        }
        _ => {}
    }

    // The detail screen only reacts to the global keys
    if !matches!(state.navigator.current(), Route::Home) {
        return Effect::None;
    }

    match event {
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return Effect::None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return Effect::None;
        }
        _ => {}
    }

    // Typing anywhere goes to the search field
    if matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) {
        tui.focus = Focus::Search;
    }

    match tui.focus {
        Focus::Search => match tui.search_box.handle_event(event) {
            Some(SearchEvent::Changed(query)) => update(state, Action::SearchChanged(query)),
            None => Effect::None,
        },
        Focus::PdfList => match tui.pdf_list.handle_event(event, &state.pdf_books) {
            Some(BookListEvent::Open(id)) => update(state, Action::OpenDetail(id)),
            None => Effect::None,
        },
        Focus::UnicodeList => match tui.unicode_list.handle_event(event, &state.unicode_books) {
            Some(BookListEvent::Open(id)) => update(state, Action::OpenDetail(id)),
            None => Effect::None,
        },
    }
}

/// Spawns the fetch-and-partition for `page` and reports back through `tx`.
pub fn spawn_fetch(
    source: Arc<dyn CatalogSource>,
    page: u32,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!(
        "Spawning catalog fetch from {} (page={}, generation={})",
        source.name(),
        page,
        generation
    );
    tokio::spawn(async move {
        let action = match source.load_catalog(page).await {
            Ok(catalog) => Action::CatalogLoaded {
                generation,
                catalog,
            },
            Err(e) => {
                info!("Fetch error: {}", e);
                Action::LoadFailed {
                    generation,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    })
}
