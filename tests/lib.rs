mod duration;
mod friendly;
mod iso8601;
#[cfg(feature = "serde")]
mod serde;

/// A type alias we use for tests.
///
/// Most tests in this directory exercise fallible parsing, so `?` keeps them
/// short.
type Result = std::result::Result<(), timebox::Error>;

/// A simple logger that prints every message to stderr.
///
/// This is only useful when the `logging` feature is enabled. Tests that
/// exercise code with interesting log output call `Logger::init()` at the
/// start, so that `cargo test --features logging -- --nocapture` shows it.
#[derive(Debug)]
struct Logger(());

const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Create a new logger that logs to stderr and initialize it as the
    /// global logger. If there was a problem setting the logger, then an
    /// error is returned.
    ///
    /// Since tests run in parallel, only the first call succeeds. Callers
    /// should ignore the error.
    fn init() -> std::result::Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        // We set the log level via log::set_max_level, so we don't need to
        // implement filtering here.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                eprintln!(
                    "{}|{}|{}:{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    line,
                    record.args()
                );
            }
            (Some(file), None) => {
                eprintln!(
                    "{}|{}|{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    record.args()
                );
            }
            _ => {
                eprintln!(
                    "{}|{}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        // We use eprintln! which is flushed on every call.
    }
}
