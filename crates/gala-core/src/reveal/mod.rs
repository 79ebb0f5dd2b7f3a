mod runner;
mod widget;

pub use runner::WidgetRunner;
pub use widget::{RevealWidget, WidgetKind, WidgetState};
