//! # PanelKit
//!
//! Parametric sheet-part generator for CNC-routed furniture kits.
//!
//! PanelKit is organized as a workspace:
//!
//! 1. **panelkit-core** - geometry primitives, part model, parameters
//! 2. **panelkit-designer** - joint synthesis, profile generators, nesting, SVG
//! 3. **panelkit** - the command-line binary that integrates both
//!
//! Pick a mode (modular, box, chair, desk), feed it a parameter file or
//! the defaults, and PanelKit emits a nested sheet layout as SVG ready
//! for CAM.

pub use panelkit_core as core;
pub use panelkit_designer as designer;

pub use panelkit_core::{Params, Part, PartKind, SheetLayout};
pub use panelkit_designer::{generate, Mode, NestResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
