//! Rendering evaluations loaded from JSON, as the CLI does.

use std::io::Write;

use proptest::prelude::*;
use resultgrid::render::tabular::display_width;
use resultgrid::{render_evaluation, Config, Error, Evaluation};

#[test]
fn loads_records_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"kind": "element", "line": 2, "tag": "book", "text": "Dune"}},
            {{"kind": "attribute", "line": 2, "tag": "book", "name": "id", "value": "b1"}}
        ]"#
    )
    .unwrap();

    let evaluation = Evaluation::load(file.path()).unwrap();
    let lines = render_evaluation(&Config::default(), 60, "//book", evaluation);

    assert_eq!(lines.len(), 8);
    assert!(lines[1].contains("Results: //book"));
    assert!(lines[5].contains("Dune"));
    assert!(lines[6].contains("@id: b1"));
}

#[test]
fn missing_records_file() {
    let err = Evaluation::load("/nonexistent/records.json").unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn failed_evaluation_renders_error_table() {
    let evaluation = Evaluation::Failed {
        error: "Invalid expression".to_string(),
    };
    let lines = render_evaluation(&Config::default(), 40, "//[", evaluation);

    assert_eq!(lines.len(), 7);
    assert!(lines[3].contains("Parse Error"));
    assert!(lines[5].contains("Invalid expression"));
}

#[test]
fn config_border_applies() {
    let config = Config::from_yaml("border: rounded").unwrap();
    let lines = render_evaluation(&config, 30, "x", Evaluation::Matches(vec![]));

    assert!(lines[0].starts_with('╭'));
    assert!(lines.last().unwrap().ends_with('╯'));
}

proptest! {
    #[test]
    fn rendered_width_matches_request(width in 0usize..120, query in "[a-z/@\\[\\]]{0,40}") {
        let json = r#"[{"kind": "text", "line": 7, "tag": "p", "text": "some paragraph text"}]"#;
        let evaluation = Evaluation::from_json(json).unwrap();

        for line in render_evaluation(&Config::default(), width, &query, evaluation) {
            prop_assert_eq!(display_width(&line), width);
        }
    }
}
