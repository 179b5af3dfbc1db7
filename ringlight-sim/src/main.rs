//! Host-side driver for the ringlight engines.
//!
//! Ticks an animation or the bounce game at a fixed cadence and renders the
//! ring in the terminal.
//!
//! Usage: cargo run -p ringlight-sim -- animate --ticks 500

mod config;
mod pong;
mod strip;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use ringlight_lib::{BounceGame, FrameBuffer, TravelingAnimation};

use crate::config::SimConfig;
use crate::pong::{autoplay_step, Play};
use crate::strip::{LedController, TerminalStrip};

/// Run the ringlight LED ring engines in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a JSON config file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Traveling, color-cycling light.
    Animate {
        /// Stop after this many ticks (runs forever if omitted).
        #[arg(short = 'n', long)]
        ticks: Option<u64>,

        /// Reverse the direction of travel every N ticks.
        #[arg(short, long, value_name = "N")]
        reverse_every: Option<u64>,
    },
    /// Autoplayed bounce game with a shrinking play area.
    Pong {
        /// Give up after this many ticks.
        #[arg(short = 'n', long)]
        max_ticks: Option<u64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = SimConfig::load(args.config.as_deref())?;

    env_logger::Builder::new()
        .filter_level(config.log_level.as_level_filter())
        .parse_default_env()
        .init();

    let mut leds = LedController::new(TerminalStrip::new(io::stdout()), config.brightness);
    let frame_delay = Duration::from_millis(config.tick_ms);

    match args.command {
        Command::Animate {
            ticks,
            reverse_every,
        } => run_animation(&config, &mut leds, frame_delay, ticks, reverse_every)?,
        Command::Pong { max_ticks } => run_pong(&config, &mut leds, frame_delay, max_ticks)?,
    }

    leds.driver_mut().finish().context("finishing output")?;
    Ok(())
}

fn run_animation(
    config: &SimConfig,
    leds: &mut LedController<TerminalStrip<Stdout>>,
    frame_delay: Duration,
    ticks: Option<u64>,
    reverse_every: Option<u64>,
) -> Result<()> {
    let mut animation = TravelingAnimation::new(FrameBuffer::new(), config.animation)
        .context("invalid animation config")?;
    info!("Animation started: {:?}", config.animation);

    let mut tick = 0u64;
    while ticks.map_or(true, |limit| tick < limit) {
        tick += 1;
        animation.tick();
        leds.write_leds(animation.ring().pixels())
            .context("writing frame")?;

        if reverse_every.is_some_and(|n| n > 0 && tick % n == 0) {
            animation.reverse();
        }
        sleep(frame_delay);
    }

    info!("Animation stopped after {tick} ticks");
    Ok(())
}

fn run_pong(
    config: &SimConfig,
    leds: &mut LedController<TerminalStrip<Stdout>>,
    frame_delay: Duration,
    max_ticks: Option<u64>,
) -> Result<()> {
    let mut game =
        BounceGame::new(FrameBuffer::new(), config.game).context("invalid game config")?;
    let state = game.led_state();
    info!(
        "Pong started: allowed {}..={}, midpoint {}",
        state.min_allowed_led, state.max_allowed_led, state.led_mid_point
    );

    let mut tick = 0u64;
    let mut bounces = 0u32;
    while max_ticks.map_or(true, |limit| tick < limit) {
        tick += 1;
        match autoplay_step(&mut game) {
            Play::Moved => {}
            Play::Bounced => bounces += 1,
            Play::GameOver => break,
        }
        leds.write_leds(game.ring().pixels())
            .context("writing frame")?;
        sleep(frame_delay);
    }

    info!("Pong finished after {tick} ticks with {bounces} bounces");
    Ok(())
}
