use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use gallows::{
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{AppEvent, CrosstermEventSource, EventSource, Runner},
    App, AppState, Cli, RuntimeSettings, TICK_RATE_MS,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    io::{self, stdin},
    time::Duration,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let settings = match RuntimeSettings::resolve(&cli, &store.load()) {
        Ok(settings) => settings,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::ValueValidation, e).exit();
        }
    };

    let mut app = App::new(settings, cli.secret.clone()).context("could not start a session")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = CrosstermEventSource::new();
    let result = start_tui(&mut terminal, &mut app, &store, events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &impl ConfigStore,
    events: E,
) -> anyhow::Result<()> {
    let runner = Runner::new(events, Duration::from_millis(TICK_RATE_MS));

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                // Only redraw when a flash message just expired.
                if app.on_tick() {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char(c) => match app.state {
                        // Every plain keystroke while playing is a guess;
                        // the engine decides whether it is valid.
                        AppState::Playing => app.handle_guess(c),
                        AppState::Results => match c {
                            'n' => app.reset().context("could not start a session")?,
                            'l' => {
                                app.cycle_word_list();
                                let _ = store.save(&Config::from(&app.settings));
                            }
                            '+' => {
                                app.bump_attempts(1);
                                let _ = store.save(&Config::from(&app.settings));
                            }
                            '-' => {
                                app.bump_attempts(-1);
                                let _ = store.save(&Config::from(&app.settings));
                            }
                            'q' => break,
                            _ => {}
                        },
                    },
                    _ => {}
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}
