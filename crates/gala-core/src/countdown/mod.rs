mod gate;
mod remaining;
mod runner;

pub use gate::{CountdownGate, GateState};
pub use remaining::Remaining;
pub use runner::CountdownRunner;
