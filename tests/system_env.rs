//! Reads and writes against the real process environment.
//!
//! Kept to a single test so no other thread in this binary touches the
//! environment concurrently.

use easy_env::{AutoOptions, OnMissing, Reader, Value, Writer};

#[test]
fn test_system_env_roundtrip() -> Result<(), anyhow::Error> {
    let key = format!("EASY_ENV_TEST_{}", std::process::id());
    let reader = Reader::system();
    let writer = Writer::system();

    assert_eq!(reader.read_int(&key, None, OnMissing::Ignore)?, None);
    assert!(reader.read_int(&key, None, OnMissing::Raise).unwrap_err().is_missing());

    writer.write_int(&key, 42)?;
    assert_eq!(std::env::var(&key)?, "42");
    assert_eq!(reader.read_int(&key, None, OnMissing::Ignore)?, Some(42));

    writer.auto_set(&key, &Value::list(["x", "y"]), ";")?;
    assert_eq!(std::env::var(&key)?, "x;y");
    assert_eq!(
        reader.auto_get(&key, Some(Value::list(["d"])), &AutoOptions::new().separator(";"))?,
        Some(Value::list(["x", "y"]))
    );

    assert!(writer.write_str("", "v").is_err());
    Ok(())
}
