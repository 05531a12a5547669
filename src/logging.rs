// Nothing in this crate is worth a message above `debug`. Debug messages
// mark input that is accepted but ignored, like text the ISO 8601 parser
// skips or an inverted range given to `Duration::is_between`. Trace messages
// follow parsing and rounding step by step.
//
// Every message uses the `timebox` target, regardless of the module that
// emits it, so that the whole crate can be enabled with one filter.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "timebox", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "timebox", $($tt)*)) }
}
