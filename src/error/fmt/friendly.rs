use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Failed { input: Box<str> },
    InvalidToken { token: Box<str> },
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
        error::ErrorKind::FmtFriendly(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Failed { ref input } => write!(
                f,
                "failed to parse \"{input}\" as a friendly duration",
                input = input.escape_debug(),
            ),
            InvalidToken { ref token } => write!(
                f,
                "invalid duration token \"{token}\" \
                 (expected an integer followed by a unit \
                 like `5m` or `2hours`)",
                token = token.escape_debug(),
            ),
        }
    }
}
