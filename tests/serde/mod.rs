use timebox::{Duration, ToDuration};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Config {
    timeout: Duration,
    #[serde(with = "timebox::fmt::serde::millisecond::optional")]
    retry_after: Option<Duration>,
}

#[test]
fn config_round_trip() {
    let json = r#"{"timeout":"PT30S","retry_after":1500}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.timeout, 30.seconds());
    assert_eq!(config.retry_after, Some(1_500.milliseconds()));
    assert_eq!(serde_json::to_string(&config).unwrap(), json);
}

#[test]
fn duration_accepts_every_representation() {
    let friendly: Duration = serde_json::from_str(r#""2m 30s""#).unwrap();
    let iso: Duration = serde_json::from_str(r#""PT2M30S""#).unwrap();
    let millis: Duration = serde_json::from_str("150000").unwrap();
    let float: Duration = serde_json::from_str("150000.0").unwrap();
    assert_eq!(friendly, 150.seconds());
    assert_eq!(iso, friendly);
    assert_eq!(millis, friendly);
    assert_eq!(float, friendly);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(serde_json::from_str::<Duration>("-5").is_err());
    assert!(serde_json::from_str::<Duration>(r#""5 minutes""#).is_err());
    assert!(serde_json::from_str::<Duration>(r#""T5M""#).is_err());
}
