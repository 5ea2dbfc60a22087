//! discover-tui entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use discover_tui::api_client::ApiClient;
use discover_tui::config::TuiConfig;
use discover_tui::error::TuiError;
use discover_tui::events::TuiEvent;
use discover_tui::fetch::{self, ListLoader};
use discover_tui::keys::{map_key, Action};
use discover_tui::nav::View;
use discover_tui::notifications::{NotificationAction, NotificationLevel};
use discover_tui::state::{App, LoadPhase, MenuEntry, MenuState};
use discover_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);

    spawn_input_reader(event_tx.clone());

    let mut loader = ListLoader::new();
    loader.spawn(app.api.clone(), event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &mut loader, &event_tx, event) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(
    app: &mut App,
    loader: &mut ListLoader,
    sender: &mpsc::Sender<TuiEvent>,
    event: TuiEvent,
) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                return handle_action(app, loader, sender, action);
            }
        }
        TuiEvent::ListLoaded { generation, result } => {
            // Only the most recently issued fetch may touch state.
            if generation != loader.generation() {
                return false;
            }
            match result {
                Ok(posts) => {
                    let count = posts.len();
                    app.list_view.apply_loaded(posts);
                    app.notify(NotificationLevel::Success, format!("Loaded {} posts", count));
                }
                Err(message) => {
                    app.list_view.apply_failed(message.clone());
                    app.notify_with_action(
                        NotificationLevel::Error,
                        format!("Load failed: {}", message),
                        NotificationAction::Retry,
                    );
                }
            }
        }
        TuiEvent::DeleteFinished { id, result } => match result {
            Ok(()) => {
                app.list_view.remove_by_id(&id);
                app.notify(NotificationLevel::Success, format!("Deleted {}", id));
            }
            Err(message) => {
                app.notify(
                    NotificationLevel::Error,
                    format!("Delete of {} failed: {}", id, message),
                );
            }
        },
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    false
}

fn handle_action(
    app: &mut App,
    loader: &mut ListLoader,
    sender: &mpsc::Sender<TuiEvent>,
    action: Action,
) -> bool {
    if app.active_view == View::PostDetail {
        match action {
            Action::Quit => return true,
            Action::Cancel => app.close_detail(),
            _ => {}
        }
        return false;
    }

    if app.list_view.menu.is_open() {
        return handle_menu_action(app, sender, action);
    }

    match action {
        Action::Quit => return true,
        Action::MoveDown => app.list_view.select_next(),
        Action::MoveUp => app.list_view.select_previous(),
        Action::NextPage => app.list_view.next_page(),
        Action::PrevPage => app.list_view.prev_page(),
        Action::CyclePageSize => app.list_view.cycle_page_size(),
        Action::Confirm => app.list_view.open_menu(),
        Action::Refresh => {
            app.list_view.phase = LoadPhase::Loading;
            loader.spawn(app.api.clone(), sender.clone());
        }
        Action::OpenHelp => app.notify(
            NotificationLevel::Info,
            "j/k move, h/l page, s page size, Enter actions, r refresh, q quit",
        ),
        Action::ViewItem | Action::EditItem | Action::DeleteItem | Action::Cancel => {}
    }
    false
}

fn handle_menu_action(app: &mut App, sender: &mpsc::Sender<TuiEvent>, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::Cancel => app.list_view.close_menu(),
        Action::MoveDown => app.list_view.menu_cursor_next(),
        Action::MoveUp => app.list_view.menu_cursor_prev(),
        Action::Confirm => {
            let cursor = match &app.list_view.menu {
                MenuState::Open { cursor, .. } => *cursor,
                MenuState::Closed => return false,
            };
            run_menu_entry(app, sender, cursor);
        }
        Action::ViewItem => run_menu_entry(app, sender, MenuEntry::View),
        Action::EditItem => run_menu_entry(app, sender, MenuEntry::Edit),
        Action::DeleteItem => run_menu_entry(app, sender, MenuEntry::Delete),
        _ => {}
    }
    false
}

fn run_menu_entry(app: &mut App, sender: &mpsc::Sender<TuiEvent>, entry: MenuEntry) {
    match entry {
        MenuEntry::View => {
            if let Some(row) = app.list_view.view_request() {
                app.open_detail(row);
            }
        }
        MenuEntry::Edit => app.list_view.edit_request(),
        MenuEntry::Delete => match app.list_view.delete_request() {
            Some(id) => fetch::spawn_delete(app.api.clone(), id, sender.clone()),
            None => app.notify(
                NotificationLevel::Warning,
                "Row has no identifier; cannot delete",
            ),
        },
    }
}
