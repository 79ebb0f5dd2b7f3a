use std::time::Duration;

use clap::Subcommand;
use gala_core::{Clock, CoreError, CountdownGate, CountdownRunner, PageConfig, SystemClock};

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Print the current countdown state as JSON
    Status,
    /// Drive the countdown, printing a snapshot per tick
    Watch {
        /// Stop after this many ticks (default: run until the gate opens)
        #[arg(long)]
        ticks: Option<u64>,
        /// Tick interval override in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

pub fn run(action: CountdownAction) -> Result<(), CoreError> {
    let config = PageConfig::load()?;
    let target = config.target_instant()?;

    match action {
        CountdownAction::Status => {
            let mut gate = CountdownGate::new(target);
            if let Some(now) = SystemClock.now() {
                if let Some(event) = gate.tick(now) {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&gate.snapshot())?);
        }
        CountdownAction::Watch { ticks, interval_ms } => {
            let period =
                Duration::from_millis(interval_ms.unwrap_or(config.countdown.tick_interval_ms));
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(watch(CountdownGate::new(target), period, ticks))?;
        }
    }
    Ok(())
}

async fn watch(
    gate: CountdownGate,
    period: Duration,
    ticks: Option<u64>,
) -> Result<(), CoreError> {
    let mut runner = CountdownRunner::spawn(gate, SystemClock, period);
    let mut snapshots = runner.subscribe();
    let mut printed = 0u64;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    // The tick task finished; drain the one-shot open event.
                    if let Some(event) = runner.opened().await {
                        println!("{}", serde_json::to_string_pretty(&event)?);
                    }
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                printed += 1;
                if ticks.is_some_and(|n| printed >= n) {
                    break;
                }
            }
            opened = runner.opened() => {
                if let Some(event) = opened {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                break;
            }
        }
    }

    runner.stop();
    Ok(())
}
