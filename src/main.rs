mod app;
mod catalog;
mod filter;
mod history;
mod theme;
mod ui;

use app::{App, Command, InputMode, View};
use catalog::Catalog;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Write;
use std::path::PathBuf;
use theme::ThemeStore;

/// TUI browser for a remote link directory catalog
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// URL of the catalog JSON source
    #[arg(short, long, default_value = DEFAULT_CATALOG_URL)]
    source: String,

    /// Load the catalog from a local JSON file instead of fetching
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Start with this category selected (deep link)
    #[arg(short, long)]
    category: Option<String>,
}

const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/ayhan-dev/linkdirectory/main/tar.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let theme_store = match ThemeStore::open() {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Warning: theme preference will not persist: {}", e);
            None
        }
    };
    let saved_theme = theme_store.as_ref().map(|s| s.load()).unwrap_or_default();

    // One-shot load; a failure is downgraded to an empty catalog plus a
    // dismissable notice inside the TUI.
    let loaded = match cli.file {
        Some(ref path) => Catalog::from_file(path),
        None => {
            eprintln!("Fetching catalog from {}...", cli.source);
            Catalog::fetch(&cli.source).await
        }
    };
    let (catalog, notice) = match loaded {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            eprintln!("Warning: {}", e.user_message());
            (Catalog::empty(), Some(e.user_message()))
        }
    };

    let initial_category = cli.category.as_deref().unwrap_or(filter::ALL_CATEGORY);
    let mut app = App::new(catalog, initial_category, saved_theme, theme_store);
    app.notice = notice;

    // Init terminal
    let mut terminal = ratatui::init();
    let size = terminal.size()?;
    app.update_page_size(size.height);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();
    result
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, key);
                }
                Event::Resize(_, height) => {
                    app.update_page_size(height);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') && app.input_mode == InputMode::Normal {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_search_input(app, key);
        return;
    }
    match app.view {
        View::List => handle_list_key(app, key),
        View::Detail => handle_detail_key(app, key),
        View::Tags => handle_tags_key(app, key),
    }
}

/// Search edits apply on every keystroke.
fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            let mut query = app.filter.search.clone();
            query.pop();
            app.dispatch(Command::SetSearch(query));
        }
        KeyCode::Char(c) => {
            let mut query = app.filter.search.clone();
            query.push(c);
            app.dispatch(Command::SetSearch(query));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.list_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_prev();
        }
        KeyCode::PageDown => {
            app.list_page_down();
        }
        KeyCode::PageUp => {
            app.list_page_up();
        }
        KeyCode::Char('g') => {
            app.list_home();
        }
        KeyCode::Char('G') => {
            app.list_end();
        }
        KeyCode::Enter => {
            app.open_detail();
        }
        KeyCode::Tab => {
            app.next_category();
        }
        KeyCode::BackTab => {
            app.prev_category();
        }
        KeyCode::Char('f') => {
            app.view = View::Tags;
        }
        KeyCode::Char('[') => {
            app.navigate_back();
        }
        KeyCode::Char(']') => {
            app.navigate_forward();
        }
        KeyCode::Char('t') => {
            app.dispatch(Command::ToggleTheme);
        }
        KeyCode::Char('x') => {
            app.dismiss_notice();
        }
        KeyCode::Char('y') => {
            yank_url(app);
        }
        KeyCode::Char('o') => {
            open_url(app);
        }
        KeyCode::Esc => {
            // Clear search first, then the notice
            if !app.filter.search.is_empty() {
                app.dispatch(Command::SetSearch(String::new()));
            } else if app.notice.is_some() {
                app.dismiss_notice();
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_detail();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        KeyCode::Char('t') => {
            app.dispatch(Command::ToggleTheme);
        }
        KeyCode::Char('y') => {
            yank_url(app);
        }
        KeyCode::Char('o') => {
            open_url(app);
        }
        _ => {}
    }
}

fn handle_tags_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('f') => {
            app.view = View::List;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.tags_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.tags_prev();
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected_tag();
        }
        KeyCode::Char('t') => {
            app.dispatch(Command::ToggleTheme);
        }
        _ => {}
    }
}

/// URL of the entry the current view is focused on.
fn focused_url(app: &App) -> Option<String> {
    let entry = match app.view {
        View::Detail => app.detail_entry(),
        _ => app.selected_entry(),
    };
    entry.map(|e| e.url.clone())
}

fn yank_url(app: &mut App) {
    let url = match focused_url(app) {
        Some(url) if !url.is_empty() => url,
        _ => {
            app.status_msg = "No URL for this link".to_string();
            return;
        }
    };
    if copy_to_clipboard(&url) {
        app.status_msg = format!("Copied: {}", url);
    } else {
        app.status_msg = format!("Link: {} (clipboard not available)", url);
    }
}

fn open_url(app: &mut App) {
    let url = match focused_url(app) {
        Some(url) if !url.is_empty() => url,
        _ => {
            app.status_msg = "No URL for this link".to_string();
            return;
        }
    };
    let _ = std::process::Command::new("xdg-open").arg(&url).spawn();
    app.status_msg = format!("Opening: {}", url);
}

/// Try xclip, then wl-copy.
fn copy_to_clipboard(text: &str) -> bool {
    let candidates: [(&str, &[&str]); 2] =
        [("xclip", &["-selection", "clipboard"]), ("wl-copy", &[])];
    for (program, args) in candidates {
        if let Ok(mut child) = std::process::Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::piped())
            .spawn()
        {
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(text.as_bytes());
            }
            let _ = child.wait();
            return true;
        }
    }
    false
}
