// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod content;
mod logging;
mod navigator;
mod ui;

use app::{App, AppMode};
use color_eyre::Result;
use content::SiteContent;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::{
    io,
    time::{Duration, Instant},
};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let config = config::Config::load()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return handle_cli_args(&args, &config);
    }

    let log_path = logging::init(&config.logging)?;
    tracing::info!(log = %log_path.display(), "showcase starting");

    let content_path = config.content.path();
    let content = SiteContent::load(content_path.as_deref())?;
    tracing::info!(summary = %content.summary(), "content loaded");

    let mut app = App::new(
        content,
        &config.navigator,
        chrono::Local::now().naive_local(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }
    tracing::info!("showcase stopped");

    Ok(())
}

fn handle_cli_args(args: &[String], config: &config::Config) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No command provided"))?;
    let program_name = args.first().map_or("showcase", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" | "help" => print_help(program_name),
        "--version" | "-v" => println!("Showcase v{}", env!("CARGO_PKG_VERSION")),
        "check" => {
            let path = args
                .get(2)
                .map(std::path::PathBuf::from)
                .or_else(|| config.content.path());
            let content = SiteContent::load(path.as_deref())?;
            let source = path
                .as_deref()
                .map_or_else(|| "bundled sample".to_string(), |path| path.display().to_string());
            println!("{}: ok", source);
            println!("{}", content.summary());
            let events = content.split_events(chrono::Local::now().naive_local());
            println!(
                "events: {} upcoming, {} past",
                events.upcoming.len(),
                events.past.len()
            );
        }
        "config" => println!("{}", config::Config::config_path()?.display()),
        cmd_str => {
            eprintln!("Unknown command: {}", cmd_str);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("Showcase - chapter content browser for the terminal");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  check [file] - Validate a content file and print section counts");
    println!("  config       - Print the configuration file path");
    println!("  --help       - Show this help");
    println!("  --version    - Show version");
    println!();
    println!("Run without arguments to start interactive mode.");
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        app.clear_expired_status_toast();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit();
                        continue;
                    }

                    match app.mode {
                        AppMode::Browse => handle_browse_mode(app, key.code),
                        AppMode::Details => handle_details_mode(app, key.code),
                        AppMode::Lightbox => handle_lightbox_mode(app, key.code),
                        AppMode::Help => handle_help_mode(app, key.code),
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse)?;
                }
                Event::FocusLost => match app.mode {
                    AppMode::Browse => app.set_pointer_over_carousel(false),
                    AppMode::Lightbox => app.lightbox_drag_cancel(),
                    AppMode::Details | AppMode::Help => {}
                },
                Event::FocusGained | Event::Paste(_) | Event::Resize(_, _) => {}
            }
        }
    }

    Ok(())
}

fn handle_browse_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.previous_section(),
        KeyCode::Right => app.carousel_next(),
        KeyCode::Left => app.carousel_previous(),
        KeyCode::Enter => app.activate_current(),
        KeyCode::Char('a') => app.toggle_auto_advance(),
        KeyCode::Char('t') => app.toggle_events_tab(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(position) = digit.to_digit(10) {
                app.select_section(position as usize - 1);
            }
        }
        _ => {}
    }
}

fn handle_details_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Backspace => app.close_details(),
        KeyCode::Right => app.next_detail_image(),
        KeyCode::Left => app.previous_detail_image(),
        KeyCode::Enter => app.expand_detail_image(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_lightbox_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Backspace => app.close_lightbox(),
        KeyCode::Right => app.next_lightbox_image(),
        KeyCode::Left => app.previous_lightbox_image(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_help(),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    match app.mode {
        AppMode::Browse => {
            if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                let carousel = ui::layout::browse_areas(terminal_area()?).carousel;
                let inside = ui::layout::contains(carousel, mouse.column, mouse.row);
                app.set_pointer_over_carousel(inside);
            }
        }
        AppMode::Lightbox => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => app.lightbox_drag_start(mouse.column),
            MouseEventKind::Drag(MouseButton::Left) => app.lightbox_drag_move(mouse.column),
            MouseEventKind::Up(MouseButton::Left) => {
                app.lightbox_drag_end();
            }
            MouseEventKind::ScrollDown => app.next_lightbox_image(),
            MouseEventKind::ScrollUp => app.previous_lightbox_image(),
            _ => {}
        },
        AppMode::Details | AppMode::Help => {}
    }
    Ok(())
}

fn terminal_area() -> Result<Rect> {
    let (width, height) = crossterm::terminal::size()?;
    Ok(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
