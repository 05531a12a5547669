use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Negative { what: &'static str, given: f64 },
    NonFinite { what: &'static str, given: f64 },
    NotPositive { what: &'static str, given: f64 },
    Overflow { what: &'static str },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Value(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Negative { what, given } => write!(
                f,
                "parameter '{what}' must be non-negative, but got {given}",
            ),
            NonFinite { what, given } => write!(
                f,
                "parameter '{what}' must be a finite number, but got {given}",
            ),
            NotPositive { what, given } => write!(
                f,
                "parameter '{what}' must be greater than zero, \
                 but got {given}",
            ),
            Overflow { what } => write!(
                f,
                "applying '{what}' overflowed the maximum \
                 representable duration",
            ),
        }
    }
}
