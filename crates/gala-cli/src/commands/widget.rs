use std::time::Duration;

use clap::{Subcommand, ValueEnum};
use gala_core::config::WidgetConfig;
use gala_core::{CoreError, PageConfig, RevealWidget, WidgetKind, WidgetRunner};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Scratch,
    Envelope,
}

impl From<KindArg> for WidgetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Scratch => WidgetKind::ScratchCard,
            KindArg::Envelope => WidgetKind::Envelope,
        }
    }
}

#[derive(Subcommand)]
pub enum WidgetAction {
    /// Run one widget through a full Locked -> Unlocked cycle
    Run {
        /// Which widget to run
        #[arg(long, value_enum, default_value = "scratch")]
        kind: KindArg,
        /// Progress increment override (1-100)
        #[arg(long)]
        increment: Option<u8>,
        /// Step interval override in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Print a widget's initial state as JSON
    Status {
        #[arg(long, value_enum, default_value = "scratch")]
        kind: KindArg,
    },
}

fn cadence(config: &PageConfig, kind: KindArg) -> &WidgetConfig {
    match kind {
        KindArg::Scratch => &config.widgets.scratch,
        KindArg::Envelope => &config.widgets.envelope,
    }
}

pub fn run(action: WidgetAction) -> Result<(), CoreError> {
    let config = PageConfig::load()?;

    match action {
        WidgetAction::Run {
            kind,
            increment,
            interval_ms,
        } => {
            let defaults = cadence(&config, kind);
            let widget = RevealWidget::new(kind.into(), increment.unwrap_or(defaults.increment));
            let period = Duration::from_millis(interval_ms.unwrap_or(defaults.step_interval_ms));

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async move {
                let mut runner = WidgetRunner::spawn(widget, period);
                while let Some(event) = runner.next_event().await {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                Ok::<(), CoreError>(())
            })?;
        }
        WidgetAction::Status { kind } => {
            let defaults = cadence(&config, kind);
            let widget = RevealWidget::new(kind.into(), defaults.increment);
            println!("{}", serde_json::to_string_pretty(&widget)?);
        }
    }
    Ok(())
}
