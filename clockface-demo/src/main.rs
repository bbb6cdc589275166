use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use clockface::{
    DialCanvas, DialConfig, DialController, DialPart, DialPosition, DialView, DisplayMode,
    HeaderText, TimeOfDay, TimeStepper, config::parse_hour_format, mirror_time,
};
use glam::Vec2;
use parking_lot::Mutex;
use tracing::info;

#[derive(Parser)]
#[command(name = "clockface-demo")]
#[command(version, about = "Walk a clock dial through a scripted session", long_about = None)]
struct Cli {
    /// Hour format: 12, 24 or auto (follow the locale)
    #[arg(short, long)]
    format: Option<String>,
    /// Side length of the square dial canvas
    #[arg(short, long, default_value_t = 240.0)]
    canvas: f32,
    /// Starting time as HH:MM (defaults to the local time)
    #[arg(short, long)]
    time: Option<TimeOfDay>,
}

/// View that writes every update to the log instead of drawing.
#[derive(Debug, Default)]
struct LoggingView;

impl DialView for LoggingView {
    fn provides(&self, _part: DialPart) -> bool {
        true
    }

    fn render_ring(&mut self, member: DisplayMode, positions: &[DialPosition]) {
        let labels: Vec<&str> = positions.iter().map(|p| p.label.as_str()).collect();
        info!(?member, count = positions.len(), ?labels, "ring rendered");
    }

    fn show_selection(&mut self, member: DisplayMode, selected: Option<&DialPosition>) {
        if let Some(position) = selected {
            info!(?member, label = %position.label, center = ?position.center, "selected");
        }
    }

    fn update_header(&mut self, header: &HeaderText) {
        match header.period {
            Some(period) => info!("header {}:{} {period}", header.hours, header.minutes),
            None => info!("header {}:{}", header.hours, header.minutes),
        }
    }

    fn transition_to(&mut self, mode: DisplayMode) {
        info!(?mode, "transition");
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "warn,clockface=info,clockface_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = DialConfig::from_env().context("invalid dial environment")?;
    if let Some(format) = cli.format.as_deref() {
        config.is_24_hour = parse_hour_format(format)?;
    }
    if let Some(time) = cli.time {
        config.initial_time = Some(time);
    }

    let dial = DialController::new(config, LoggingView).context("failed to build the dial")?;
    let stepper = TimeStepper::new(dial.time(), dial.is_24_hour());
    let dial = Arc::new(Mutex::new(dial));
    let stepper = Arc::new(Mutex::new(stepper));
    let _mirror = mirror_time(&dial, &stepper);

    stepper.lock().subscribe(|time| info!(%time, "stepper follows"));

    let side = cli.canvas;
    dial.lock().set_canvas(DialCanvas::square(side));

    // Tap "9" on the hour ring.
    {
        let mut dial = dial.lock();
        let nine = dial
            .position(DisplayMode::Hours, 9)
            .cloned()
            .context("the canvas is too small to lay out the dial")?;
        dial.select_position(&nine);
    }

    // Drag the minute hand from 12 to 3 o'clock.
    {
        let mut dial = dial.lock();
        let half = side / 2.0;
        dial.begin_drag_at(Vec2::new(half, 0.0));
        dial.continue_drag(Vec2::new(half * 0.6, half * 0.2));
        dial.continue_drag(Vec2::new(half * 0.4, half * 0.8));
        dial.end_drag();
    }

    stepper.lock().increment_minute();

    let is_24_hour = !dial.lock().is_24_hour();
    stepper.lock().set_24_hour(is_24_hour);
    {
        let mut dial = dial.lock();
        dial.set_24_hour(is_24_hour);
        dial.set_display_mode(DisplayMode::Hours);
        dial.set_post_meridiem(true);
    }

    let dial = dial.lock();
    info!(
        time = %dial.time(),
        is_24_hour = dial.is_24_hour(),
        hand = dial.hour_hand_ratio(),
        stepper = %stepper.lock().time(),
        "session finished"
    );
    Ok(())
}
