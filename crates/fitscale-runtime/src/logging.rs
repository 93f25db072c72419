#![forbid(unsafe_code)]

//! Log targets and optional subscriber setup.
//!
//! Every event the runtime emits uses structured fields under one of the
//! targets below, so hosts can filter with `RUST_LOG=fitscale.controller=debug`.
//!
//! | Level | Event |
//! |-------|-------|
//! | `debug` | scale committed (`previous`, `scale`, `version`) |
//! | `trace` | recompute unchanged, recompute scheduled |
//! | `warn`  | missing target, degenerate configuration |

/// Target for controller decisions.
pub const CONTROLLER_TARGET: &str = "fitscale.controller";

/// Install a JSON formatter filtered by `RUST_LOG`, or `default_directive`
/// when the variable is unset or invalid.
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json(default_directive: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}
