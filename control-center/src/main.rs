use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info};

use control_center::app::App;
use control_center::config::{init_logging, Args};
use control_center::input::{map_key, map_mouse};
use control_center::preferences::FilePreferenceStore;
use control_center::ui::ui;

/// Frame interval while a transition is running
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Poll interval when nothing moves
const IDLE_TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = args.data_dir();
    init_logging(&data_dir, &args.log_level)?;

    info!("Control center v{} starting", env!("CARGO_PKG_VERSION"));
    info!(data_dir = %data_dir.display(), "using data directory");

    let (catalog, catalog_error) = args.load_catalog_or_seeded();
    let store = FilePreferenceStore::in_dir(&data_dir);
    let mut app = App::new(catalog, Box::new(store), args.app_options());
    match (catalog_error, &args.catalog) {
        (Some(e), _) => {
            app.notifications
                .error("Catalog not loaded", format!("{:#}. Showing built-in content.", e));
        }
        (None, Some(path)) => {
            app.notifications
                .info("Catalog", format!("Loaded {}", path.display()));
        }
        (None, None) => {}
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
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
        error!("Error: {:?}", err);
        println!("Error: {:?}", err);
    }

    info!("Control center stopped");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.animator.prune(now);
        app.notifications.cleanup_expired(now);

        terminal.draw(|f| {
            app.viewport = f.area();
            ui(f, app, now);
        })?;

        let timeout = if app.animator.is_animating(Instant::now()) {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => map_key(app, key),
                Event::Mouse(mouse) => map_mouse(app, mouse),
                _ => None,
            };
            if let Some(action) = action {
                app.dispatch(action, Instant::now());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
