use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use log::info;

mod config;
mod patrol;

use config::PatrolConfig;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => PatrolConfig::load(&path)
            .with_context(|| format!("failed to load patrol config from {path}"))?,
        None => PatrolConfig::default(),
    };
    info!("{config:?}");

    let period = match config.tick_rate {
        0 => None,
        rate => Some(Duration::from_secs(1) / rate),
    };
    let mut next_tick = Instant::now();

    let mut rect = config.start_rect();
    let laps = patrol::patrol(&config, &mut rect, || {
        if let Some(period) = period {
            next_tick += period;
            thread::sleep(next_tick.saturating_duration_since(Instant::now()));
        }
    });

    info!("finished {} laps in {} ticks", laps.len(), laps.iter().sum::<u64>());

    Ok(())
}
