use std::io::{self, Write};
use std::path::PathBuf;

use kairoscope_app::screens::{AuthGate, TimelineShell};
use kairoscope_app::text_strip::TextStrip;
use kairoscope_app::{AppConfiguration, AppEnvironment, Bundle, Screen};
use kairoscope_engine::logging::{init_logging, LoggingConfig};

/// Portrait phone viewport used for the headless frame.
const VIEWPORT_WIDTH: f32 = 393.0;
const VIEWPORT_HEIGHT: f32 = 852.0;
const SAFE_TOP: f32 = 59.0;

/// Logical points per character column of the printed strip.
const STRIP_POINTS_PER_COLUMN: f32 = 4.0;

const BUNDLE_ENV: &str = "KAIROSCOPE_BUNDLE";
/// App-specific filter; takes precedence over `RUST_LOG`.
const LOG_ENV: &str = "KAIROSCOPE_LOG";
const DEFAULT_BUNDLE_DIR: &str = "resources";

fn main() -> anyhow::Result<()> {
    init_logging(logging_config());

    let bundle = Bundle::new(bundle_dir());
    let configuration = AppConfiguration::load_or_mock(&bundle);
    let environment = AppEnvironment::live(configuration);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let screen = Screen::for_environment(&environment);
    log::info!("presenting {:?}", screen.route());

    match screen {
        Screen::AuthGate(gate) => print_gate(&mut out, &gate)?,
        Screen::TimelineShell(mut shell) => {
            shell.on_appear();
            print_shell(&mut out, &shell)?;
            shell.on_disappear();
        }
    }

    out.flush()?;
    Ok(())
}

fn logging_config() -> LoggingConfig {
    match std::env::var(LOG_ENV) {
        Ok(filter) => LoggingConfig::with_filter(filter),
        Err(_) => LoggingConfig::default(),
    }
}

/// First CLI argument, then `KAIROSCOPE_BUNDLE`, then `./resources`.
fn bundle_dir() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(BUNDLE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_DIR))
}

fn print_gate(out: &mut impl Write, gate: &AuthGate) -> io::Result<()> {
    writeln!(out, "{}", gate.title())?;
    writeln!(out, "{}", gate.subtitle())?;
    for option in gate.sign_in_options() {
        let marker = if option.prominent { '*' } else { ' ' };
        let state = if option.enabled { "" } else { " (unavailable)" };
        writeln!(out, " {marker}[{}]{state}", option.label)?;
    }
    Ok(())
}

fn print_shell(out: &mut impl Write, shell: &TimelineShell) -> io::Result<()> {
    let frame = shell.frame(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, SAFE_TOP);
    writeln!(out, "{}", shell.title().to_uppercase())?;
    writeln!(out, "center {}", frame.snapshot.center_time().to_rfc3339())?;
    writeln!(out)?;
    let strip = TextStrip::new(STRIP_POINTS_PER_COLUMN);
    writeln!(out, "{}", strip.render(&frame.ticks, frame.metrics.canvas_width))?;
    writeln!(out)?;
    writeln!(
        out,
        "{} at x={:.1}",
        shell.anchor_accessibility_label(),
        frame.ticks.present_x
    )?;
    if let Some(anchor) = frame.snapshot.anchor_tick() {
        writeln!(out, "anchor tick {:?}, offset {}", anchor.kind, anchor.offset)?;
    }
    Ok(())
}
