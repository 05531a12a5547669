/*!
This module provides helpers to use with [Serde].

The helpers are exposed as modules meant to be used with
Serde's [`with` attribute].

By default, a [`Duration`](crate::Duration) serializes as its short ISO 8601
string (e.g., `"PT1.5S"`), and deserializes from either an ISO 8601 string,
a friendly string like `"1h 30m"` or a number of milliseconds. The helpers
here instead serialize a duration as a plain number of milliseconds.

# Module hierarchy

Only the leaves of the tree are usable with Serde's `with` attribute. For
each leaf, the full path is spelled out for easy copy & paste.

* [`millisecond`]
    * [`timebox::fmt::serde::millisecond::required`](self::millisecond::required)
    * [`timebox::fmt::serde::millisecond::optional`](self::millisecond::optional)

Whole numbers of milliseconds are serialized as integers. Durations with a
fractional number of milliseconds are serialized as floats.

# Example

```
use timebox::{Duration, ToDuration};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "timebox::fmt::serde::millisecond::required")]
    timeout: Duration,
}

let json = r#"{"timeout":90000}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.timeout, 90.seconds());
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: optional support

```
use timebox::{Duration, ToDuration};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "timebox::fmt::serde::millisecond::optional")]
    timeout: Option<Duration>,
}

let json = r#"{"timeout":0.5}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.timeout, Some(Duration::from_millis(0.5)));
assert_eq!(serde_json::to_string(&got)?, json);

let json = r#"{"timeout":null}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.timeout, None);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// (De)serialize a [`Duration`](crate::Duration) as a number of
/// milliseconds.
pub mod millisecond {
    use serde::de;

    #[cfg(not(feature = "std"))]
    use crate::util::libm::Float;

    /// The biggest integer such that every integer at or below it is exactly
    /// representable as an `f64`.
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = crate::Duration;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("a non-negative number of milliseconds")
        }

        #[inline]
        fn visit_f64<E: de::Error>(
            self,
            v: f64,
        ) -> Result<crate::Duration, E> {
            crate::Duration::try_from_millis(v).map_err(de::Error::custom)
        }

        #[inline]
        fn visit_i64<E: de::Error>(
            self,
            v: i64,
        ) -> Result<crate::Duration, E> {
            self.visit_f64(v as f64)
        }

        #[inline]
        fn visit_u64<E: de::Error>(
            self,
            v: u64,
        ) -> Result<crate::Duration, E> {
            self.visit_f64(v as f64)
        }
    }

    /// A visitor for `Option<Duration>`.
    struct OptionalVisitor;

    impl<'de> de::Visitor<'de> for OptionalVisitor {
        type Value = Option<crate::Duration>;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("a non-negative number of milliseconds or `None`")
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            de: D,
        ) -> Result<Option<crate::Duration>, D::Error> {
            de.deserialize_f64(Visitor).map(Some)
        }

        #[inline]
        fn visit_none<E: de::Error>(
            self,
        ) -> Result<Option<crate::Duration>, E> {
            Ok(None)
        }
    }

    fn serialize_millis<S: serde::Serializer>(
        dur: &crate::Duration,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        let millis = dur.to_milliseconds();
        if millis.trunc() == millis && millis <= MAX_EXACT_INTEGER {
            se.serialize_u64(millis as u64)
        } else {
            se.serialize_f64(millis)
        }
    }

    /// (De)serialize a required number of milliseconds.
    pub mod required {
        /// Serialize a required number of milliseconds.
        #[inline]
        pub fn serialize<S: serde::Serializer>(
            duration: &crate::Duration,
            se: S,
        ) -> Result<S::Ok, S::Error> {
            super::serialize_millis(duration, se)
        }

        /// Deserialize a required number of milliseconds.
        #[inline]
        pub fn deserialize<'de, D: serde::Deserializer<'de>>(
            de: D,
        ) -> Result<crate::Duration, D::Error> {
            de.deserialize_f64(super::Visitor)
        }
    }

    /// (De)serialize an optional number of milliseconds.
    pub mod optional {
        /// Serialize an optional number of milliseconds.
        #[inline]
        pub fn serialize<S: serde::Serializer>(
            duration: &Option<crate::Duration>,
            se: S,
        ) -> Result<S::Ok, S::Error> {
            match *duration {
                None => se.serialize_none(),
                Some(ref dur) => se.serialize_some(&Millis(dur)),
            }
        }

        /// Deserialize an optional number of milliseconds.
        #[inline]
        pub fn deserialize<'de, D: serde::Deserializer<'de>>(
            de: D,
        ) -> Result<Option<crate::Duration>, D::Error> {
            de.deserialize_option(super::OptionalVisitor)
        }

        struct Millis<'a>(&'a crate::Duration);

        impl<'a> serde::Serialize for Millis<'a> {
            fn serialize<S: serde::Serializer>(
                &self,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                super::serialize_millis(self.0, se)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{Duration, ToDuration};

    #[test]
    fn millisecond_required() {
        #[derive(Debug, serde::Deserialize, serde::Serialize)]
        struct Data {
            #[serde(with = "crate::fmt::serde::millisecond::required")]
            dur: Duration,
        }

        let json = r#"{"dur":5400000}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.dur, 1.hour().minutes(30));
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let json = r#"{"dur":1.5}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.dur, Duration::from_millis(1.5));
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let json = r#"{"dur":-1}"#;
        let err = serde_json::from_str::<Data>(&json).unwrap_err();
        assert!(err.to_string().starts_with(
            "parameter 'milliseconds' must be non-negative, but got -1",
        ));
    }

    #[test]
    fn millisecond_optional() {
        #[derive(Debug, serde::Deserialize, serde::Serialize)]
        struct Data {
            #[serde(with = "crate::fmt::serde::millisecond::optional")]
            dur: Option<Duration>,
        }

        let json = r#"{"dur":1000}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.dur, Some(1.second()));
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let json = r#"{"dur":null}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.dur, None);
        assert_eq!(serde_json::to_string(&got).unwrap(), json);
    }

    #[test]
    fn duration_default_impls() {
        #[derive(Debug, serde::Deserialize, serde::Serialize)]
        struct Data {
            dur: Duration,
        }

        let got: Data = serde_json::from_str(r#"{"dur":"P1DT2H"}"#).unwrap();
        assert_eq!(got.dur, 1.day().hours(2));
        assert_eq!(serde_json::to_string(&got).unwrap(), r#"{"dur":"P1DT2H"}"#);

        let got: Data = serde_json::from_str(r#"{"dur":"1h 30m"}"#).unwrap();
        assert_eq!(got.dur, 90.minutes());
        assert_eq!(
            serde_json::to_string(&got).unwrap(),
            r#"{"dur":"PT1H30M"}"#,
        );

        let got: Data = serde_json::from_str(r#"{"dur":250}"#).unwrap();
        assert_eq!(got.dur, 250.milliseconds());

        let err = serde_json::from_str::<Data>(r#"{"dur":"1x"}"#).unwrap_err();
        assert!(err.to_string().contains(r#"invalid duration token "1x""#));
    }
}
