//! Browser console logger
//!
//! Routes `log` records to `web_sys::console` so components can use the
//! `log` macros instead of calling the console bindings directly.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    // Level filtering happens in the `log` macros via `set_max_level`
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format_line(record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_line(target: &str, message: &str) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short, message)
}

/// Install the console logger. Call once, before mounting the app.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_path_segment() {
        assert_eq!(
            format_line("admin_post_summary_ui::workflow", "DELETE failed"),
            "[workflow] DELETE failed"
        );
        assert_eq!(format_line("app", "loaded"), "[app] loaded");
    }

    #[test]
    fn test_logger_leaves_filtering_to_max_level() {
        let trace = Metadata::builder().level(Level::Trace).target("app").build();
        assert!(LOGGER.enabled(&trace));
    }
}
