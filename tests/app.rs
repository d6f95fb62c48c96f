use penstock::analysis::OutputRequest;
use penstock::config::Config;
use penstock::ui::app::{App, FormTarget, Section};

fn set_field(app: &mut App, index: usize, value: &str) {
    let form = app.form.as_mut().expect("a form should be open");
    form.state.fields[index].buffer.clear();
    form.state.fields[index].buffer.push_str(value);
}

#[test]
fn test_section_from_slug_roundtrip() {
    for section in Section::ALL {
        assert_eq!(Section::from_slug(section.slug()), Some(section));
    }
    assert_eq!(Section::from_slug("pumps"), None);
}

#[test]
fn test_section_navigation_wraps() {
    let mut app = App::new(Config::default());
    assert_eq!(app.section, Section::Nodes);

    app.previous_section();
    assert_eq!(app.section, Section::CsvPreview);

    app.next_section();
    assert_eq!(app.section, Section::Nodes);
}

#[test]
fn test_default_section_comes_from_config() {
    let mut config = Config::default();
    config.ui.default_section = "analysis".to_string();

    let app = App::new(config);
    assert_eq!(app.section, Section::Analysis);
}

#[test]
fn test_node_form_submission_updates_store() {
    let mut app = App::new(Config::default());

    app.open_form();
    assert_eq!(app.form.as_ref().map(|f| f.target), Some(FormTarget::Node));

    set_field(&mut app, 0, "10");
    set_field(&mut app, 1, "152.4");
    app.submit_form();

    assert!(app.form.is_none());
    assert!(app.info_message.is_some());
    assert_eq!(app.network.node(10), Some(152.4));
}

#[test]
fn test_invalid_submission_keeps_form_open() {
    let mut app = App::new(Config::default());

    app.open_form();
    set_field(&mut app, 0, "zero");
    set_field(&mut app, 1, "152.4");
    app.submit_form();

    // The store is untouched and the form stays open for correction
    assert!(app.form.is_some());
    assert!(app.error_message.is_some());
    assert!(app.network.nodes().is_empty());
}

#[test]
fn test_node_minimum_enforced_at_submission() {
    let mut app = App::new(Config::default());

    app.open_form();
    set_field(&mut app, 0, "0");
    set_field(&mut app, 1, "5.0");
    app.submit_form();

    assert!(app.error_message.is_some());
    assert!(app.network.nodes().is_empty());
}

#[test]
fn test_conduit_form_submission_updates_store() {
    let mut app = App::new(Config::default());
    app.section = Section::Conduits;

    app.open_form();
    assert_eq!(app.form.as_ref().map(|f| f.target), Some(FormTarget::Conduit));

    set_field(&mut app, 0, "C1");
    set_field(&mut app, 1, "1200");
    set_field(&mut app, 2, "1.5");
    set_field(&mut app, 3, "0.025");
    set_field(&mut app, 4, "0.013");
    // field 5 is the material select, left on Concrete
    set_field(&mut app, 6, "980");
    set_field(&mut app, 7, "0.42");
    set_field(&mut app, 8, "0.38");
    set_field(&mut app, 9, "12");
    app.submit_form();

    let conduit = app.network.conduit("C1").expect("conduit should be stored");
    assert_eq!(conduit.length, 1200.0);
    assert_eq!(conduit.numseg, 12);
}

#[test]
fn test_edit_form_prefills_selected_node() {
    let mut app = App::new(Config::default());
    app.network.add_node(10, 152.4);

    app.open_edit_form();
    let form = app.form.as_ref().expect("edit form should be open");
    assert_eq!(form.state.fields[0].buffer, "10");
    assert_eq!(form.state.fields[1].buffer, "152.4");
}

#[test]
fn test_request_form_adds_request() {
    let mut app = App::new(Config::default());
    app.section = Section::Analysis;

    app.open_form();
    set_field(&mut app, 0, "NODE 10");
    app.submit_form();

    assert_eq!(app.requests, vec![OutputRequest::Node(10)]);
}

#[test]
fn test_request_form_rejects_other_lines() {
    let mut app = App::new(Config::default());
    app.section = Section::Analysis;

    app.open_form();
    set_field(&mut app, 0, "PUMP 2");
    app.submit_form();

    assert!(app.requests.is_empty());
    assert!(app.error_message.is_some());
}

#[test]
fn test_remove_selected_request() {
    let mut app = App::new(Config::default());
    app.section = Section::Analysis;
    app.requests = vec![OutputRequest::Node(1), OutputRequest::Node(2)];
    app.selected_row = 1;

    app.remove_selected_request();
    assert_eq!(app.requests, vec![OutputRequest::Node(1)]);
    assert_eq!(app.selected_row, 0);
}

#[test]
fn test_run_analysis_requires_requests() {
    let mut app = App::new(Config::default());
    app.run_analysis();

    assert!(app.error_message.is_some());
    assert!(app.analysis_task.is_none());
    assert!(!app.analyzing);
}

#[tokio::test]
async fn test_run_analysis_produces_results() {
    let mut app = App::new(Config::default());
    app.requests = vec![
        OutputRequest::Node(10),
        OutputRequest::Element("ST".to_string()),
    ];

    app.run_analysis();
    assert!(app.analyzing);

    let handle = app.analysis_task.take().expect("analysis task should be running");
    let results = handle.await.expect("analysis task should not panic");
    assert_eq!(results.len(), 2);
}
