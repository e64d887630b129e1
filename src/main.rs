//! Polezero - A terminal pole-zero and response explorer.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use polezero::app::App;
use polezero::model::{summarize, DesignParams, Domain, FilterFamily};
use polezero::presenter::Presenter;
use polezero::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DomainArg {
    /// Continuous time, s-plane
    Analog,
    /// Discrete time, z-plane
    Digital,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Analog => Domain::Continuous,
            DomainArg::Digital => Domain::Discrete,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

impl From<FilterArg> for FilterFamily {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::LowPass => FilterFamily::LowPass,
            FilterArg::HighPass => FilterFamily::HighPass,
            FilterArg::BandPass => FilterFamily::BandPass,
            FilterArg::BandStop => FilterFamily::BandStop,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "polezero")]
#[command(about = "A terminal pole-zero and response explorer", long_about = None)]
struct Args {
    /// Model domain of the starting preset
    #[arg(long, value_enum, default_value_t = DomainArg::Digital)]
    domain: DomainArg,

    /// Filter family of the starting preset
    #[arg(long, value_enum, default_value_t = FilterArg::LowPass)]
    filter: FilterArg,

    /// Butterworth order of the presets
    #[arg(long, default_value_t = 2)]
    order: u32,

    /// Number of frequency samples
    #[arg(long, default_value_t = 256)]
    points: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the model and its figures, then exit
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Polezero");
    }

    let params = DesignParams {
        order: args.order,
        points: args.points,
        ..DesignParams::default()
    };
    let presenter = match Presenter::new(args.domain.into(), args.filter.into(), params) {
        Ok(presenter) => presenter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    if args.summary {
        print!("{}", summarize(presenter.model()));
        println!();
        print!("{}", presenter.plots().describe());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(presenter);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Polezero exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Error popup swallows keys until dismissed
        if app.error_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.dismiss_error();
            }
            continue;
        }

        // Edit mode - handle separately
        if app.is_editing() {
            if let Some(list) = app.focused_entries() {
                match key.code {
                    KeyCode::Enter => list.submit(),
                    KeyCode::Esc => list.cancel(),
                    KeyCode::Backspace => list.backspace(),
                    KeyCode::Char(c) => list.input(c),
                    _ => {},
                }
            }
            continue;
        }

        // Entry list mode
        if key.modifiers == KeyModifiers::NONE && app.handle_entry_key(key.code) {
            continue;
        }

        // Normal mode
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Model selection
            (KeyModifiers::NONE, KeyCode::Char('m')) => app.cycle_domain(),
            (KeyModifiers::NONE, KeyCode::Char('f')) => app.cycle_family(),
            (KeyModifiers::NONE, KeyCode::Char('a')) => app.apply_manual(),

            // Focus
            (KeyModifiers::NONE, KeyCode::Tab) => app.cycle_focus(),

            // Features
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_model(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                app.status = "Help: q=quit, m=model, f=filter, Tab=focus, a=apply, y=copy, T=theme"
                    .to_string();
            },

            _ => {},
        }
    }
}
