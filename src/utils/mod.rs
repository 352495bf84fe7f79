use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".cashcompass";
const SESSION_FILE: &str = "wizard_session.json";
const CONFIG_FILE: &str = "wizard_config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("wizard_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.cashcompass`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CASHCOMPASS_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the single persisted wizard-session file.
pub fn session_file() -> PathBuf {
    app_data_dir().join(SESSION_FILE)
}

/// Path to the wizard configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}
