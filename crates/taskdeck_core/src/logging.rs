//! Logging bootstrap shared by the core and the server binary.
//!
//! # Responsibility
//! - Initialize the process-wide logger exactly once.
//! - Write size-rotated log files, or plain stderr when no directory is set.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Re-initialization with a different configuration is rejected.
//! - Initialization never panics.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "taskdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Initializes process logging with a level and an optional log directory.
///
/// With a directory, records go to size-rotated files and warnings are
/// duplicated to stderr; without one, everything goes to stderr.
///
/// # Invariants
/// - Repeated calls with the same configuration are idempotent.
/// - Calls with a conflicting configuration return an error.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when the log directory cannot be created.
/// - Returns an error when the logger backend fails to start.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<(), String> {
    let level = normalize_level(level)?;
    let requested_dir = log_dir.map(Path::to_path_buf);

    let init_dir = requested_dir.clone();
    let state = LOGGING_STATE.get_or_try_init(move || start_logger(level, init_dir))?;

    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            state.level
        ));
    }
    if state.log_dir != requested_dir {
        return Err(format!(
            "logging already initialized with sink `{}`; refusing to reconfigure",
            sink_name(&state.log_dir)
        ));
    }

    Ok(())
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: Option<PathBuf>) -> Result<LoggingState, String> {
    let mut builder =
        Logger::try_with_str(level).map_err(|err| format!("invalid log level `{level}`: {err}"))?;

    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)
            .map_err(|err| format!("failed to create log directory `{}`: {err}", dir.display()))?;

        builder = builder
            .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .append()
            .duplicate_to_stderr(Duplicate::Warn)
            .write_mode(WriteMode::BufferAndFlush)
            .format_for_files(flexi_logger::detailed_format);
    }

    let logger = builder
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=app_start module=core status=ok platform={} version={} sink={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        sink_name(&log_dir)
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

fn sink_name(log_dir: &Option<PathBuf>) -> String {
    log_dir
        .as_ref()
        .map_or_else(|| "stderr".to_string(), |dir| dir.display().to_string())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn install_panic_hook_once() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            error!("event=panic_captured module=core status=error location={location}");
            previous_hook(panic_info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::{init_logging, normalize_level};
    use std::path::Path;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(
            normalize_level("INFO").expect("INFO should normalize"),
            "info"
        );
        assert_eq!(
            normalize_level(" warning ").expect("warning should normalize"),
            "warn"
        );
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        let error = normalize_level("verbose").expect_err("unknown level must be rejected");
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
        init_logging("info", None).expect("first init should succeed");
        init_logging("info", None).expect("same config should be idempotent");

        let level_error = init_logging("debug", None).expect_err("level conflict should fail");
        assert!(level_error.contains("refusing to switch"));

        let dir_error = init_logging("info", Some(Path::new("/tmp/taskdeck-logs")))
            .expect_err("sink conflict should fail");
        assert!(dir_error.contains("refusing to reconfigure"));
    }
}
