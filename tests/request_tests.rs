use nearmark::prelude::*;
use nearmark::request;

#[test]
fn permissive_defaults_test() {
    let json = r#"{
        "position": [1.0, 1.0],
        "markers": [
            { "name": "far", "position": [40.0, 40.0] },
            { "position": [2.0, 2.0] },
            { "name": "origin" }
        ]
    }"#;
    let request: Request = serde_json::from_str(json).unwrap();
    // The nameless marker is nearest, so the answer is the empty default name.
    assert_eq!(solve(&request), Ok(String::new()));
}

#[test]
fn missing_position_defaults_to_origin_test() {
    let json = r#"{ "markers": [ { "name": "a", "position": [10.0, 10.0] }, { "name": "b" } ] }"#;
    let request: Request = serde_json::from_str(json).unwrap();
    assert_eq!(solve(&request), Ok("b".to_string()));
}

#[test]
fn strict_policy_test() {
    let finder = Finder::new(Config::default().with_policy(FieldPolicy::Strict));

    let request: Request =
        serde_json::from_str(r#"{ "position": [0.0, 0.0], "markers": [ { "name": "a" } ] }"#)
            .unwrap();
    assert_eq!(
        finder.solve(&request),
        Err(Error::Request(request::Error::MissingField {
            index: 0,
            field: "position"
        }))
    );

    let request: Request =
        serde_json::from_str(r#"{ "position": [0.0, 0.0], "markers": [ { "position": [1.0, 1.0] } ] }"#)
            .unwrap();
    assert_eq!(
        finder.solve(&request),
        Err(Error::Request(request::Error::MissingField {
            index: 0,
            field: "name"
        }))
    );

    let request: Request =
        serde_json::from_str(r#"{ "markers": [ { "name": "a", "position": [1.0, 1.0] } ] }"#)
            .unwrap();
    assert_eq!(
        finder.solve(&request),
        Err(Error::Request(request::Error::MissingRequestField("position")))
    );
}

#[test]
fn resolve_test() {
    let raw = RawMarker::default();
    assert_eq!(
        raw.resolve(FieldPolicy::Permissive, 3),
        Ok((String::new(), [0.0, 0.0]))
    );
    assert!(raw.resolve(FieldPolicy::Strict, 3).is_err());
}

#[test]
fn policy_from_json_test() {
    let policy: FieldPolicy = serde_json::from_str(r#""strict""#).unwrap();
    assert_eq!(policy, FieldPolicy::Strict);
}

#[test]
fn config_default_test() {
    let config = Config::default();
    assert!(!config.accepts(0));
    assert!(config.accepts(1));
    assert!(config.accepts(99));
    assert!(!config.accepts(100));
    assert_eq!(config.policy, FieldPolicy::Permissive);
}

#[test]
fn reference_position_test() {
    let request: Request = serde_json::from_str(r#"{ "markers": [] }"#).unwrap();
    assert_eq!(
        request.reference_position(FieldPolicy::Permissive),
        Ok([0.0, 0.0])
    );
    assert_eq!(
        request.reference_position(FieldPolicy::Strict),
        Err(request::Error::MissingRequestField("position"))
    );
}

#[test]
fn null_position_defaults_to_origin_test() {
    let json = r#"{ "position": [1.0, 1.0], "markers": [ { "name": "a", "position": null } ] }"#;
    let request: Request = serde_json::from_str(json).unwrap();
    assert_eq!(request.markers()[0].position, None);
    assert_eq!(solve(&request), Ok("a".to_string()));

    let finder = Finder::new(Config::default().with_policy(FieldPolicy::Strict));
    assert_eq!(
        finder.solve(&request),
        Err(Error::Request(request::Error::MissingField {
            index: 0,
            field: "position"
        }))
    );
}
