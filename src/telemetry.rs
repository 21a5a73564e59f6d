//! Opt-in `tracing` output for hosts embedding `dashboard-rs`.
//!
//! The library only emits events; installing a subscriber is the host's call.
//! Filter and slider activity is logged under the `dashboard_rs` target at
//! `debug`/`trace`, view failures at `warn`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVES: &str = "dashboard_rs=info";

/// Installs a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_DIRECTIVES`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directives(DEFAULT_LOG_DIRECTIVES)
}

/// Same as [`init_default_tracing`] with caller-supplied fallback directives,
/// e.g. `"dashboard_rs=trace"` while debugging a drag gesture.
#[must_use]
pub fn init_tracing_with_directives(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
