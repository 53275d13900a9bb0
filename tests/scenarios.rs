//! End-to-end scenarios against an in-memory store.
//!
//! Each test starts from a fresh store, reads and writes through the public
//! API, and checks both the returned values and the raw store contents.

use easy_env::{
    AutoOptions, CoerceError, EnvStore, Error, InMemoryEnv, Kind, ListOptions, OnMissing, Reader,
    Value, Writer, coerce,
};

/// Fresh store with a reader and a writer sharing it.
fn setup(env: &InMemoryEnv) -> (Reader<&InMemoryEnv>, Writer<&InMemoryEnv>) {
    (Reader::new(env), Writer::new(env))
}

#[test]
fn test_write_then_read_int() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::new();
    let (reader, writer) = setup(&env);

    writer.write_int("N", 7)?;
    assert_eq!(env.lookup("N").as_deref(), Some("7"));
    assert_eq!(env.len(), 1);
    assert_eq!(reader.read_int("N", None, OnMissing::Ignore)?, Some(7));
    Ok(())
}

#[test]
fn test_default_leaves_store_unchanged() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::new();
    let (reader, _) = setup(&env);

    assert_eq!(reader.read_int("N", Some(2), OnMissing::Ignore)?, Some(2));
    assert!(env.is_empty());
    Ok(())
}

#[test]
fn test_non_integer_text_fails() {
    let env = InMemoryEnv::from_iter([("V", "not int")]);
    let (reader, _) = setup(&env);

    let err = reader.read_int("V", None, OnMissing::Ignore).unwrap_err();
    assert!(matches!(
        err,
        Error::Coercion {
            kind: Kind::Integer,
            source: CoerceError::Integer(_),
            ..
        }
    ));
}

#[test]
fn test_empty_list_segment_fails_integer_items() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::from_iter([("V", "1,,2")]);
    let (reader, _) = setup(&env);

    let options = ListOptions::new().item_factory(coerce::integer);
    let err = reader
        .read_list_with("V", None, OnMissing::Ignore, &options)
        .unwrap_err();
    assert!(err.is_coercion());

    // The same text is fine as a list of strings.
    assert_eq!(
        reader.read_list("V", None, OnMissing::Ignore)?,
        Some(vec!["1".to_string(), String::new(), "2".to_string()])
    );
    Ok(())
}

#[test]
fn test_base64_bytes() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::from_iter([("V", "Zm9v")]);
    let (reader, _) = setup(&env);

    assert_eq!(
        reader.read_bytes("V", None, OnMissing::Ignore)?,
        Some("foo".as_bytes().to_vec())
    );
    Ok(())
}

#[test]
fn test_auto_get_list_default_matches_read_list() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::new();
    let (reader, _) = setup(&env);
    let factory = |s: &str| Kind::Integer.coerce(s);

    let auto = reader.auto_get(
        "V",
        Some(Value::list([1, 2])),
        &AutoOptions::new().item_factory(factory),
    )?;
    let explicit = reader.read_list_with(
        "V",
        Some(vec![Value::Int(1), Value::Int(2)]),
        OnMissing::Ignore,
        &ListOptions::new().item_factory(factory),
    )?;

    assert_eq!(auto, Some(Value::list([1, 2])));
    assert_eq!(auto, explicit.map(Value::List));

    // Once the key is present, both coerce the same way.
    env.assign("V", "3,4")?;
    let auto = reader.auto_get(
        "V",
        Some(Value::list([1, 2])),
        &AutoOptions::new().item_factory(factory),
    )?;
    assert_eq!(auto, Some(Value::list([3, 4])));
    Ok(())
}

#[test]
fn test_missing_key_modes() {
    let env = InMemoryEnv::new();
    let (reader, _) = setup(&env);

    assert!(matches!(reader.read_float("F", None, OnMissing::Ignore), Ok(None)));
    assert!(
        reader
            .read_bool("B", None, OnMissing::Raise)
            .unwrap_err()
            .is_missing()
    );
    assert!(
        reader
            .auto_get("S", None, &AutoOptions::new().on_missing(OnMissing::Raise))
            .unwrap_err()
            .is_missing()
    );
}

#[test]
fn test_unsupported_kind_name() {
    let err = "dict".parse::<Kind>().unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn test_read_kind_from_config_name() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::from_iter([("RETRIES", "3"), ("VERBOSE", "yep")]);
    let (reader, _) = setup(&env);
    let options = AutoOptions::new();

    let kind: Kind = "int".parse()?;
    assert_eq!(reader.read_kind("RETRIES", kind, &options)?, Some(Value::Int(3)));

    let kind: Kind = "bool".parse()?;
    assert_eq!(reader.read_kind("VERBOSE", kind, &options)?, Some(Value::Bool(true)));
    Ok(())
}

#[test]
fn test_auto_set_then_auto_get() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::new();
    let (reader, writer) = setup(&env);

    let values = [
        Value::Int(-3),
        Value::Float(0.25),
        Value::Bool(false),
        Value::from("hello world"),
        Value::Bytes(vec![0, 1, 2, 254, 255]),
        Value::list(["a", "b"]),
    ];
    for value in values {
        writer.auto_set("V", &value, ",")?;
        let read = reader.auto_get("V", Some(value.clone()), &AutoOptions::new())?;
        assert_eq!(read, Some(value));
    }
    Ok(())
}

#[test]
fn test_custom_item_factory() -> Result<(), anyhow::Error> {
    let env = InMemoryEnv::from_iter([("HOSTS", "a:80,b:x")]);
    let (reader, _) = setup(&env);

    let port_of = |item: &str| -> Result<u16, CoerceError> {
        let (_, port) = item
            .split_once(':')
            .ok_or_else(|| CoerceError::custom(format!("{item:?} has no port")))?;
        port.parse().map_err(|_| CoerceError::custom(format!("bad port {port:?}")))
    };

    let options = ListOptions::new().item_factory(port_of);
    let err = reader
        .read_list_with("HOSTS", None, OnMissing::Raise, &options)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Env var HOSTS is not a valid list: list item 1: bad port \"x\""
    );

    env.assign("HOSTS", "a:80,b:443")?;
    assert_eq!(
        reader.read_list_with("HOSTS", None, OnMissing::Raise, &options)?,
        Some(vec![80, 443])
    );
    Ok(())
}
