use std::sync::OnceLock;

use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::{GlobalOptions, Settings};

const DEFAULT_LEVEL: &str = "warn";

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// The filter implied by the verbosity flags and the settings file.
pub fn filter_directive(globals: &GlobalOptions, settings: &Settings) -> String {
    let level = if globals.silent {
        "off"
    } else if globals.debug {
        "debug"
    } else if globals.verbose {
        "info"
    } else {
        settings.log_level.as_deref().unwrap_or(DEFAULT_LEVEL)
    };
    level.to_string()
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over everything.
///
/// Call it once with default globals before compiling the registry, and again
/// after parsing: the second call swaps in the filter the flags ask for.
/// Does nothing if someone else installed a global subscriber.
pub fn init(globals: &GlobalOptions, settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(globals, settings)));

    if let Some(handle) = FILTER.get() {
        if let Err(err) = handle.reload(filter) {
            tracing::debug!(%err, "failed to update the log filter");
        }
        return;
    }

    let (filter, handle) = reload::Layer::new(filter);
    let res = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
    match res {
        Ok(()) => drop(FILTER.set(handle)),
        Err(_) => tracing::debug!("logging already initialized"),
    }
}
