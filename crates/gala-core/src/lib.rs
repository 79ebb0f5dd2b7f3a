//! # Gala Core Library
//!
//! This library provides the behavioral core for Gala, a countdown-gated
//! celebration page. It implements a CLI-first philosophy where every
//! operation is available via a standalone CLI binary, with any rendering
//! layer being a thin presentation shell over the same core library.
//!
//! ## Architecture
//!
//! - **Countdown Gate**: A wall-clock-based state machine that requires the
//!   caller to periodically invoke `tick()`, opening the gate exactly once
//!   when the target instant is reached
//! - **Reveal Widgets**: Locked/InProgress/Unlocked state machines behind the
//!   scratch-card and envelope interactions
//! - **Gallery Viewer**: Single active selection over a fixed item list
//! - **Runners**: Tokio tasks that drive the tick-based engines on a fixed
//!   interval, with abort-on-drop cancellation
//!
//! ## Key Components
//!
//! - [`CountdownGate`]: Core countdown state machine
//! - [`RevealWidget`]: Progressive-unlock state machine
//! - [`GalleryViewer`]: Modal selection tracking
//! - [`PageConfig`]: TOML-based configuration

pub mod clock;
pub mod config;
pub mod contract;
pub mod countdown;
pub mod error;
pub mod events;
pub mod gallery;
pub mod ornament;
pub mod reveal;

pub use clock::{Clock, SystemClock};
pub use config::PageConfig;
pub use contract::{Contract, ContractState};
pub use countdown::{CountdownGate, CountdownRunner, GateState, Remaining};
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use gallery::GalleryViewer;
pub use ornament::{OrnamentConfig, OrnamentLayout, Particle};
pub use reveal::{RevealWidget, WidgetKind, WidgetRunner, WidgetState};
