use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use hovertip::app::{App, demo_options};
use hovertip::config::{TooltipOptions, load_config};
use hovertip::tooltip::{Placement, PlacementMetrics};

/// Hover the box to see a delayed tooltip
#[derive(Debug, Parser)]
#[command(name = "hovertip", version, about)]
struct Cli {
    /// Config file (defaults to $CONFIG_DIR/hovertip/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Side of the target the tooltip is drawn on
    #[arg(short, long, value_enum)]
    placement: Option<Placement>,

    /// Hover time before the tooltip shows
    #[arg(short, long, value_name = "MS")]
    delay: Option<u64>,

    /// Fade in/out duration
    #[arg(long, value_name = "MS")]
    fade: Option<u64>,

    /// Tooltip text
    #[arg(short, long, default_value = "Hello World")]
    text: String,

    /// Print the effective tooltip options and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();
    let options = resolve_options(&cli)?;

    if cli.check_config {
        print_options(&options);
        return Ok(());
    }

    let app = App::new(&options, &cli.text);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .map_err(Into::into)
        .and_then(|_| run(terminal, app));

    // Restore terminal even if the loop failed
    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    result
}

/// Config file first, then command-line overrides, then demo defaults
fn resolve_options(cli: &Cli) -> Result<TooltipOptions> {
    let mut options = load_config(cli.config.as_deref())?.tooltip;
    if let Some(placement) = cli.placement {
        options.placement = placement;
    }
    if let Some(delay) = cli.delay {
        options.show_delay_ms = delay;
    }
    if let Some(fade) = cli.fade {
        options.fade_ms = fade;
    }
    Ok(demo_options(options))
}

fn print_options(options: &TooltipOptions) {
    let metrics = options.metrics.unwrap_or_default();
    let PlacementMetrics {
        vertical_gap,
        horizontal_gap,
        bottom_extra,
    } = metrics;
    println!("el = {}", options.el.as_deref().unwrap_or(""));
    println!("target = {}", options.target.as_deref().unwrap_or(""));
    println!("placement = {}", options.placement);
    println!("show_delay_ms = {}", options.show_delay_ms);
    println!("fade_ms = {}", options.fade_ms);
    println!("metrics = {vertical_gap}/{horizontal_gap}/{bottom_extra}");
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Render the UI
        terminal.draw(|frame| app.render(frame, now))?;

        // Wait for input, waking up for timers and fades
        if event::poll(app.poll_timeout(Instant::now()))? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file in the cache dir so output doesn't corrupt the TUI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|d| d.join("hovertip")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("hovertip.log")) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
