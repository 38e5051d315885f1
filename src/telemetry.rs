//! Opt-in tracing bootstrap for hosts embedding `bubble-compare`.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! stays the host's decision. Hosts that do not already own one can enable
//! the `telemetry` feature and call [`init_tracing`] once at startup.

/// Installs a formatted `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `true` when this call installed the global subscriber, `false`
/// when the `telemetry` feature is disabled or another subscriber was
/// already set (for example by the embedding application).
#[must_use]
pub fn init_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
