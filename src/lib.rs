//! # marquee-view
//!
//! Core view composition and animation library for seamless scrolling
//! marquees.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Mapping a marquee configuration (direction, reverse, pause-on-hover,
//!   fade, copy count) to a declarative element tree
//! - Conflict-aware utility class composition, so caller classes always win
//! - The global style contract (loop keyframes, `--gap`/`--duration`
//!   custom properties, edge-fade mask gradients)
//! - Gating full copy duplication behind a cancellable one-shot mount tick
//! - Mounting the tree into a browser DOM (with optional web support)
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for configuration and
//!   tree types
//! - `web` - Enable web/WASM DOM mounting support
//!
//! ## Example
//!
//! ```rust
//! use marquee_view::{render_marquee, Direction, MarqueeConfig};
//!
//! let mut config = MarqueeConfig::new();
//! config.direction = Direction::Up;
//! config.pause_on_hover = true;
//! config.number_of_copies = 3;
//!
//! // Pre-ready paint shows a single copy; the full count once the gate fires.
//! assert_eq!(render_marquee(&config, false).copies.len(), 1);
//!
//! let tree = render_marquee(&config, true);
//! assert_eq!(tree.copies.len(), 3);
//! assert!(tree.copies[0].has_class("animate-marquee-up"));
//! ```

mod class;
mod config;
mod gate;
pub mod render;
mod style;

pub use class::compose;
pub use config::{ConfigError, Direction, MarqueeConfig, NodeOverrides};
pub use gate::{GateState, ReadyGate};
pub use render::{render_marquee, ElementSpec, MarqueeTree};
pub use style::{
    fade_mask, stylesheet, DEFAULT_DURATION, DEFAULT_GAP, DURATION_PROPERTY, GAP_PROPERTY,
};

#[cfg(feature = "web")]
pub use render::web::{mount_marquee, MountedMarquee};
