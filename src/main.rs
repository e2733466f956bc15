//! plotreveal - Animated terminal scatter plot of a CSV dataset.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotreveal::app::{App, Theme};
use plotreveal::config::{AnimationConfig, MarkerStyle, PlotConfig, DEFAULT_INTERVAL_MS};
use plotreveal::data::DataReader;
use plotreveal::sampler::{peak, AdaptiveSampler, EuclideanLoss};
use plotreveal::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plotreveal")]
#[command(about = "Animated terminal scatter plot of a CSV dataset", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Comma-separated file with at least two numeric columns
    #[arg(default_value = "t.txt")]
    file: PathBuf,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Start over after the last point
    #[arg(long)]
    repeat: bool,

    /// Marker used for points
    #[arg(long, value_enum, default_value_t = MarkerStyle::Braille)]
    marker: MarkerStyle,

    /// Initial color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print adaptive samples of a peaked function as x,y rows
    Sample {
        /// Lower end of the sampled interval
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        lower: f64,

        /// Upper end of the sampled interval
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        upper: f64,

        /// Stop once no interval has a loss above this
        #[arg(long, default_value_t = 0.01)]
        tol: f64,

        /// Half-width of the peak at x = 0
        #[arg(long, default_value_t = 0.01)]
        width: f64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting plotreveal");
    }

    if let Some(Command::Sample {
        lower,
        upper,
        tol,
        width,
    }) = args.command
    {
        return run_sample(lower, upper, tol, width);
    }

    // Load before touching the terminal so errors print normally.
    let dataset = DataReader::load(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let config = AnimationConfig::for_len(dataset.len())
        .with_interval_ms(args.interval_ms)
        .with_repeat(args.repeat);
    let plot_config = PlotConfig {
        marker: args.marker,
        ..PlotConfig::default()
    };
    let app = App::new(dataset, config, plot_config)?.with_theme(args.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Animation aborted: {:#}", err);
        return Err(err);
    }

    tracing::info!("plotreveal exited");
    Ok(())
}

fn run_sample(lower: f64, upper: f64, tol: f64, width: f64) -> Result<()> {
    if !lower.is_finite() || !upper.is_finite() {
        bail!("--lower ({lower}) and --upper ({upper}) must be finite");
    }
    if lower >= upper {
        bail!("--lower ({lower}) must be below --upper ({upper})");
    }
    if tol.is_nan() || tol <= 0.0 {
        bail!("--tol must be positive, got {tol}");
    }
    // A zero width makes the peak 0/0 at x = 0.
    if !width.is_finite() || width == 0.0 {
        bail!("--width must be finite and non-zero, got {width}");
    }

    let mut sampler = AdaptiveSampler::new(peak(width), EuclideanLoss, lower, upper);
    let samples = sampler.until(tol);

    let mut out = io::stdout().lock();
    for (x, y) in samples {
        writeln!(out, "{},{}", x, y)?;
    }
    out.flush()?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start(Instant::now());

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match (key.modifiers, key.code) {
                        // Quit
                        (_, KeyCode::Char('q'))
                        | (_, KeyCode::Esc)
                        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                            app.toggle_pause(Instant::now());
                        },
                        (KeyModifiers::NONE, KeyCode::Char('r')) => {
                            app.restart(Instant::now());
                        },
                        (_, KeyCode::Char('T')) => {
                            app.cycle_theme();
                        },
                        _ => {},
                    }
                }
            }
        }

        app.on_tick(Instant::now())?;
    }
}
