use penstock::analysis::{
    analyze, analyze_lines, results_json, OutputRequest, RequestParseError, ResultRecord,
};

#[test]
fn test_mixed_requests() {
    let results = analyze_lines(&["NODE 10", "ELEM ST", "NODE 3"]).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(
        results.get(&OutputRequest::Node(10)),
        Some(&ResultRecord::Node {
            q: 100.0,
            head: 50.0,
            pressure: 300.0
        })
    );
    assert_eq!(
        results.get(&OutputRequest::Node(3)),
        Some(&ResultRecord::Node {
            q: 100.0,
            head: 50.0,
            pressure: 300.0
        })
    );
    assert_eq!(
        results.get(&OutputRequest::Element("ST".to_string())),
        Some(&ResultRecord::Element { q: 200.0, elev: 30.0 })
    );
}

#[test]
fn test_empty_request_list() {
    let results = analyze_lines::<&str>(&[]).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_other_lines_ignored() {
    let results = analyze_lines(&["# comment", "PIPE 4", "", "NODE 1"]).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&OutputRequest::Node(1)));
}

#[test]
fn test_duplicate_requests_collapse() {
    let results = analyze_lines(&["NODE 5", "NODE 5"]).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn test_results_independent_of_input_order() {
    let requests = vec![
        OutputRequest::Element("ST".to_string()),
        OutputRequest::Node(2),
    ];
    let first = analyze(&requests);
    let second = analyze(&requests);
    assert_eq!(first, second);
}

#[test]
fn test_parse_node_request() {
    assert_eq!(
        OutputRequest::parse("NODE 10").unwrap(),
        Some(OutputRequest::Node(10))
    );
    assert_eq!(
        OutputRequest::parse("  NODE 3  ").unwrap(),
        Some(OutputRequest::Node(3))
    );
}

#[test]
fn test_parse_element_request() {
    assert_eq!(
        OutputRequest::parse("ELEM ST").unwrap(),
        Some(OutputRequest::Element("ST".to_string()))
    );
}

#[test]
fn test_parse_ignores_other_prefixes() {
    assert_eq!(OutputRequest::parse("VALVE 2").unwrap(), None);
    assert_eq!(OutputRequest::parse("").unwrap(), None);
    assert_eq!(OutputRequest::parse("node 1").unwrap(), None);
}

#[test]
fn test_parse_missing_id() {
    assert_eq!(
        OutputRequest::parse("NODE"),
        Err(RequestParseError::MissingId("NODE".to_string()))
    );
    assert_eq!(
        OutputRequest::parse("ELEM"),
        Err(RequestParseError::MissingId("ELEM".to_string()))
    );
}

#[test]
fn test_parse_invalid_node_number() {
    assert_eq!(
        OutputRequest::parse("NODE ten"),
        Err(RequestParseError::InvalidNodeNumber("ten".to_string()))
    );
}

#[test]
fn test_request_display_and_columns() {
    let node = OutputRequest::Node(10);
    assert_eq!(node.to_string(), "NODE 10");
    assert_eq!(node.key(), "10");
    assert_eq!(node.column_names(), "Q HEAD PRESSURE");

    let element = OutputRequest::Element("ST".to_string());
    assert_eq!(element.to_string(), "ELEM ST");
    assert_eq!(element.key(), "ST");
    assert_eq!(element.column_names(), "Q ELEV");
}

#[test]
fn test_results_json_shape() {
    let results = analyze_lines(&["NODE 10", "ELEM ST"]).unwrap();
    let json = results_json(&results);

    assert_eq!(json["10"]["Q"], 100.0);
    assert_eq!(json["10"]["HEAD"], 50.0);
    assert_eq!(json["10"]["PRESSURE"], 300.0);
    assert_eq!(json["ST"]["Q"], 200.0);
    assert_eq!(json["ST"]["ELEV"], 30.0);
}
