use crate::config;

/// Load settings, falling back to defaults when the config file is missing,
/// malformed, or fails validation. Startup never aborts over configuration.
pub fn load_settings() -> config::Settings {
    let settings = match config::Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("wurli: could not read config, using defaults: {e}");
            return config::Settings::default();
        }
    };
    if let Err(msg) = settings.validate() {
        eprintln!("wurli: config rejected, using defaults: {msg}");
        return config::Settings::default();
    }
    settings
}
