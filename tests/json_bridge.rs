use recmap::{field_spec, field_spec_with, json, record, Mapper, TransformError, Value};

record! {
    pub struct Country {
        pub name: 0,
        pub country_code: 1,
        pub population: 2,
    }
}

fn mapper() -> Mapper {
    Mapper::new(vec![
        field_spec("name", 0),
        field_spec_with("code", 1, |v: Value| match v {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            other => Err(TransformError::new(format!("code must be text, found {other}"))),
        }),
        field_spec("population", 2),
    ])
}

#[test]
fn decode_from_json_text() {
    let properties = json::from_str(r#"{"name": "Netherlands", "code": "nl", "capital": "Amsterdam"}"#).unwrap();
    let country = mapper().decode(Country::default(), properties).unwrap();
    assert_eq!(country.name, Some(Value::from("Netherlands")));
    assert_eq!(country.country_code, Some(Value::from("NL")));
    assert_eq!(country.population, None);
}

#[test]
fn encode_to_json_text() {
    let country = Country {
        name: Some(Value::from("Netherlands")),
        population: Some(Value::from(17_900_000)),
        ..Default::default()
    };
    let text = json::to_string(mapper().encode(&country).unwrap()).unwrap();
    assert_eq!(text, r#"{"population":17900000,"name":"Netherlands"}"#);
}

#[test]
fn transform_failure_reaches_the_caller() {
    let properties = json::from_str(r#"{"code": 31}"#).unwrap();
    let err = mapper().decode(Country::default(), properties).unwrap_err();
    assert_eq!(err.to_string(), "code must be text, found 31");
}
