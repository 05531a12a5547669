use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Failed { input: Box<str> },
    MissingPrefix,
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtIso8601(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Failed { ref input } => write!(
                f,
                "failed to parse \"{input}\" as an ISO 8601 duration",
                input = input.escape_debug(),
            ),
            MissingPrefix => f.write_str(
                "an ISO 8601 duration must start with 'P'",
            ),
        }
    }
}
