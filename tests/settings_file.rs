use recmap::{field_spec, EncodeOrder, Mapper, Row, Settings, Value};

#[test]
fn settings_file_switches_encode_order() {
    let path = std::env::temp_dir().join("recmap_settings_test.toml");
    std::fs::write(&path, "encode_order = \"preserved\"\n").unwrap();
    let settings = Settings::from_file(path.to_str().unwrap()).expect("settings");
    let _ = std::fs::remove_file(&path);
    assert_eq!(settings.encode_order, EncodeOrder::Preserved);

    let mapper: Mapper = Mapper::with_settings(vec![field_spec("a", 0), field_spec("b", 1)], settings);
    let row = Row::from_fields(vec![Some(Value::from(1)), Some(Value::from(2))]);
    assert_eq!(
        mapper.encode(&row).unwrap(),
        vec![("a".to_string(), Value::from(1)), ("b".to_string(), Value::from(2))]
    );
}
