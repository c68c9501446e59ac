//! Headless HUD simulator.
//!
//! Drives [`OnroadState`] with the scripted drive from
//! [`ScriptedTelemetry`] at 20 Hz and renders every tick into an in-memory
//! 320x240 canvas. Alert transitions, watchdog entry/exit and repaint counts are
//! logged.
//!
//! By default time is simulated (`boot + n * 50ms`), so a 20 second drive runs
//! instantly and deterministically. `--realtime` uses the wall clock and sleeps
//! between ticks like the on-device loop.
//!
//! ```text
//! hud-sim --seconds 20 -v
//! hud-sim --config hud.toml --realtime
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use embedded_graphics::draw_target::DrawTarget;
use onroad_hud::canvas::Canvas;
use onroad_hud::colors::BLACK;
use onroad_hud::config::{HudConfig, TICK_PERIOD, UI_FREQ, load_config, tick_offset};
use onroad_hud::onroad::{OnroadFrame, OnroadState};
use onroad_hud::profiling::FrameMetrics;
use onroad_hud::scenario::ScriptedTelemetry;
use onroad_hud::telemetry::{TelemetrySource, Tpms};
use onroad_hud::widgets::{draw_alert, draw_border, draw_speed, draw_tpms, draw_turn_signals, speed_text, speed_unit};

/// Onroad HUD simulator - play back a scripted drive through the overlay
#[derive(Parser, Debug)]
#[command(name = "hud-sim")]
#[command(about = "Play back a scripted drive through the onroad HUD", long_about = None)]
#[command(version)]
struct Args {
    /// Path to HUD configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Length of the simulated drive in seconds
    #[arg(short, long, default_value_t = 20)]
    seconds: u32,

    /// Use the wall clock and sleep between ticks
    #[arg(long)]
    realtime: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    log::info!("Onroad HUD simulator v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => HudConfig::default(),
    };
    log::debug!("{config:?}");

    run(&args, &config);
    ExitCode::SUCCESS
}

fn run(
    args: &Args,
    config: &HudConfig,
) {
    let mut source = ScriptedTelemetry::new();
    let mut hud = OnroadState::new(config);
    let mut canvas = Canvas::screen();
    let mut metrics = FrameMetrics::new();

    let boot = Instant::now();
    let ticks = u64::from(args.seconds) * u64::from(UI_FREQ);

    // What the previous frame left on screen
    let mut blink_was_visible = false;
    let mut drawn_tpms: Option<Tpms> = None;
    let mut drawn_speed = None;
    let mut last_v_ego = 0.0;

    for frame_count in 0..ticks {
        let frame_start = Instant::now();
        let now = if args.realtime {
            frame_start
        } else {
            boot + tick_offset(frame_count)
        };

        let snapshot = source.poll(frame_count, now);
        let frame = hud.update(&snapshot, now);

        let tpms_changed = config.display.show_tpms && drawn_tpms != Some(frame.car.tpms);
        let speed = speed_text(frame.car.v_ego, config.display.is_metric);
        let speed_changed = drawn_speed.as_ref() != Some(&speed);
        let blink_visible = frame.blink.is_visible();
        if frame.alert_changed
            || frame.border_changed
            || tpms_changed
            || speed_changed
            || blink_visible
            || blink_was_visible
        {
            redraw(&mut canvas, &frame, config);
            drawn_tpms = Some(frame.car.tpms);
            drawn_speed = Some(speed);
        }
        blink_was_visible = blink_visible;
        last_v_ego = frame.car.v_ego;

        metrics.record_repaints(&frame);
        hud.end_frame();

        let render_time = frame_start.elapsed();

        let mut sleep_time = Duration::ZERO;
        if args.realtime {
            let pre_sleep = frame_start.elapsed();
            if let Some(remaining) = TICK_PERIOD.checked_sub(pre_sleep) {
                thread::sleep(remaining);
            }
            sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);
        }

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }

    let speed = speed_text(last_v_ego, config.display.is_metric);
    let unit = speed_unit(config.display.is_metric);

    log::info!(
        "Drove {} ticks: {} alert repaints, {} border repaints, {} blink frames, {} watchdog frames",
        metrics.total_frames,
        metrics.alert_repaints,
        metrics.border_repaints,
        metrics.blink_frames,
        metrics.watchdog_frames
    );
    log::info!(
        "Frame time avg {}us (min {}us, max {}us), final speed {speed} {unit}",
        metrics.frame_time_avg_us(),
        metrics.frame_time_min_us,
        metrics.frame_time_max_us
    );
    log::info!(
        "Final overlay: '{}' ({:?}), {} lit pixels",
        hud.render_state().alert().text1,
        hud.status(),
        canvas.lit_pixels()
    );
}

/// Repaint the whole overlay for `frame`.
fn redraw(
    canvas: &mut Canvas,
    frame: &OnroadFrame,
    config: &HudConfig,
) {
    canvas.clear(BLACK).ok();
    draw_border(canvas, frame.border_bg);
    draw_speed(canvas, frame.car.v_ego, config.display.is_metric);
    draw_alert(canvas, &frame.alert, frame.alert_bg);
    if config.display.show_tpms {
        draw_tpms(canvas, &frame.car.tpms);
    }
    draw_turn_signals(canvas, &frame.blink);
}

/// Initialize `env_logger` with a compact `[LEVEL target] message` format.
fn init_logging(
    verbose: u8,
    quiet: bool,
) {
    use std::io::Write;

    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
