use linediff::{Comparand, DiffOptions, Error, compare};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn identical_objects_have_no_changes() -> anyhow::Result<()> {
    let report = compare(
        json!({ "foo": 42, "bar": 69 }),
        json!({ "foo": 42, "bar": 69 }),
        &DiffOptions::default(),
    )?;

    assert_eq!(report.change_count(), 0);
    Ok(())
}

#[test]
fn changed_and_added_fields_form_one_change() -> anyhow::Result<()> {
    let actual = json!({ "foo": 42, "zoo": 123, "bar": 69 });
    let expected = json!({ "foo": 42, "zoo": 123, "bar": 60, "ööö": "dót" });

    let report = compare(actual, expected, &DiffOptions::default())?;

    assert_eq!(report.change_count(), 1);
    assert!(report.lines().contains(&"-   \"bar\": 60,".to_string()));
    assert!(report.lines().contains(&"+   \"bar\": 69".to_string()));
    assert!(report.lines().contains(&"-   \"ööö\": \"dót\"".to_string()));
    Ok(())
}

#[test]
fn serializable_structs_are_compared_by_their_fields() -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Config {
        name: &'static str,
        retries: u32,
        tags: Vec<&'static str>,
    }

    let actual = Comparand::structured(&Config {
        name: "worker",
        retries: 3,
        tags: vec!["a", "b"],
    })?;
    let expected = Comparand::structured(&Config {
        name: "worker",
        retries: 5,
        tags: vec!["a", "b"],
    })?;

    let report = compare(actual, expected, &DiffOptions::default())?;

    assert_eq!(report.change_count(), 1);
    assert_eq!(
        report.to_string(),
        "  {\n    \"name\": \"worker\",\n-   \"retries\": 5,\n+   \"retries\": 3,\n    \"tags\": [\n      \"a\",\n      \"b\"\n    ]\n  }"
    );
    Ok(())
}

#[test]
fn unrepresentable_values_fail_before_diffing() {
    let mut grid = BTreeMap::new();
    grid.insert((0, 0), "origin");

    let result = Comparand::structured(&grid);

    let Err(error) = result else {
        panic!("Expected a serialization error");
    };
    assert!(matches!(error, Error::Serialization(_)));
    assert!(error.to_string().starts_with("failed to serialize value for comparison"));
}
