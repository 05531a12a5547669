use alloc::sync::Arc;

pub(crate) mod fmt;
pub(crate) mod value;

/// An error that can occur in this crate.
///
/// Errors fall into a handful of categories, each of which can be detected
/// with a predicate:
///
/// * [`Error::is_invalid_value`] for numeric inputs that are negative (or,
/// for division, not strictly positive).
/// * [`Error::is_non_finite`] for numeric inputs that are NaN or infinite.
/// * [`Error::is_parse`] for human friendly strings containing a token that
/// isn't of the form `<digits><unit>`.
/// * [`Error::is_format`] for ISO 8601 strings that don't begin with `P`.
/// * [`Error::is_range`] for finite inputs whose result is too big to
/// represent.
///
/// Every error message names the input that was rejected. Errors returned
/// by the parsers are additionally contextualized with the full input
/// string.
///
/// # Design
///
/// There is only one error type for the whole crate. Finer grained error
/// types compose poorly: a parse error can be caused by an invalid value,
/// and callers would otherwise need to match on nested enums just to print
/// a message. The predicates look through any context to the root cause.
///
/// # Example
///
/// ```
/// use timebox::Duration;
///
/// let err = "1d 2x".parse::<Duration>().unwrap_err();
/// assert!(err.is_parse());
/// assert_eq!(
///     err.to_string(),
///     "failed to parse \"1d 2x\" as a friendly duration: \
///      invalid duration token \"2x\" \
///      (expected an integer followed by a unit like `5m` or `2hours`)",
/// );
/// ```
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone and to keep it
    /// one word in size.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error was caused by a numeric input that is
    /// negative, or by a divisor that is zero or negative.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert!(Duration::new().try_hours(-1.0).unwrap_err().is_invalid_value());
    /// assert!(Duration::from_millis(10.0).checked_div(0.0).unwrap_err().is_invalid_value());
    /// ```
    pub fn is_invalid_value(&self) -> bool {
        use self::value::Error::*;

        matches!(
            *self.root().kind(),
            ErrorKind::Value(Negative { .. } | NotPositive { .. })
        )
    }

    /// Returns true when this error was caused by a numeric input that is
    /// NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert!(Duration::new().try_minutes(f64::NAN).unwrap_err().is_non_finite());
    /// ```
    pub fn is_non_finite(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Value(self::value::Error::NonFinite { .. })
        )
    }

    /// Returns true when this error was caused by a malformed token in a
    /// human friendly duration string.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::fmt::friendly::FriendlyParser;
    ///
    /// let err = FriendlyParser::new().parse_duration("1x").unwrap_err();
    /// assert!(err.is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::FmtFriendly(self::fmt::friendly::Error::InvalidToken {
                ..
            })
        )
    }

    /// Returns true when this error was caused by an ISO 8601 duration
    /// string that doesn't start with `P`.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::fmt::iso8601::Iso8601Parser;
    ///
    /// let err = Iso8601Parser::new().parse_duration("1DT2H").unwrap_err();
    /// assert!(err.is_format());
    /// ```
    pub fn is_format(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::FmtIso8601(self::fmt::iso8601::Error::MissingPrefix)
        )
    }

    /// Returns true when this error was caused by a result that is too big
    /// to represent, even though every input was finite.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// let big = Duration::from_millis(f64::MAX);
    /// assert!(big.checked_add(big).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Value(self::value::Error::Overflow { .. })
        )
    }
}

impl Error {
    /// Contextualizes this error with the given consequent. That is, the
    /// returned error says "consequent, caused by self."
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because consequent errors are always created right before
        // being attached to a cause, so the Arc has one reference.
        let inner = Arc::get_mut(&mut err.inner).unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    FmtFriendly(self::fmt::friendly::Error),
    FmtIso8601(self::fmt::iso8601::Error),
    Value(self::value::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            FmtFriendly(ref err) => err.fmt(f),
            FmtIso8601(ref err) => err.fmt(f),
            Value(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists to make `Error::context` work without public `From` impls
/// for the internal error kinds.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// without calling `map_err` everywhere.
pub(crate) trait ErrorContext<T, E> {
    /// Like `Error::context`, but hides error construction within a
    /// closure so that the happy path doesn't pay for an allocation.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent()))
    }
}
