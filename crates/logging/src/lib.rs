use time::macros::format_description;
pub use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::time::LocalTime};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn initialize_logging(default_level: LevelFilter) {
    let local_timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]+[offset_hour]:[offset_minute]"
    ));
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(local_timer)
        .with_target(false)
        .init();
}
