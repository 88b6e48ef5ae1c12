mod common;

use common::fixtures::*;
use common::{TestResult, builder, render};
use rollbook::{JsonOverrideStore, Override};

fn jane_without_email() -> Override {
    Override {
        key_first_name: "Jane".into(),
        key_last_name: "Smith".into(),
        email: Some(false),
        ..Override::default()
    }
}

#[test]
fn test_override_file_narrows_one_entry() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("overrides.json");
    JsonOverrideStore::new(&path).save(&[jane_without_email()])?;

    let directory = builder(config(scenario_config()), roster(smith_and_doe()))?
        .with_override_file(&path)
        .build()?;
    let pdf = render(&directory)?;

    assert_pdf_contains_text!(pdf, "SMITH, JANE");
    assert_pdf_not_contains_text!(pdf, "jane@example.com");
    assert_pdf_contains_text!(pdf, "john@example.com");
    Ok(())
}

#[test]
fn test_override_cannot_widen() -> TestResult {
    let widen = Override {
        key_first_name: "John".into(),
        key_last_name: "Smith".into(),
        key_birthday: "1980-03-04".into(),
        occupation: Some(true),
        phones: Some(true),
        ..Override::default()
    };
    let mut households = roster(smith_and_doe());
    if let Some(head) = households
        .lists
        .get_mut("Members")
        .and_then(|list| list[0].head.as_mut())
    {
        head.occupation = "Carpenter".into();
    }

    let directory = builder(config(scenario_config()), households)?
        .with_override_store(rollbook_traits::InMemoryOverrideStore::new(vec![widen]))
        .build()?;
    let pdf = render(&directory)?;

    assert_pdf_not_contains_text!(pdf, "Carpenter");
    assert_pdf_contains_text!(pdf, "C: 217-555-0100");
    Ok(())
}

#[test]
fn test_hidden_household_leaves_every_section() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("overrides.json");
    std::fs::write(
        &path,
        r#"{"overrides": [{"key_first_name": "john", "key_last_name": "smith",
            "key_birthday": "1980-03-04", "show_household": false}]}"#,
    )?;

    let directory = builder(config(scenario_config()), roster(smith_and_doe()))?
        .with_override_file(&path)
        .build()?;
    let pdf = render(&directory)?;

    assert_pdf_not_contains_text!(pdf, "SMITH");
    assert_pdf_not_contains_text!(pdf, "Smith");
    assert_pdf_contains_text!(pdf, "DOE, JAN");
    assert_pdf_contains_text!(pdf, "Jan Doe");
    Ok(())
}

#[test]
fn test_missing_or_broken_override_file_fails_open() -> TestResult {
    let dir = tempfile::tempdir()?;

    let missing = builder(config(scenario_config()), roster(smith_and_doe()))?
        .with_override_file(dir.path().join("none.json"))
        .build()?;
    assert!(missing.generate().is_ok());

    let broken_path = dir.path().join("broken.json");
    std::fs::write(&broken_path, "{ overrides: nope")?;
    let broken = builder(config(scenario_config()), roster(smith_and_doe()))?
        .with_override_file(&broken_path)
        .build()?;
    let pdf = render(&broken)?;
    assert_pdf_contains_text!(pdf, "jane@example.com");
    Ok(())
}

#[test]
fn test_excluded_directory_section() -> TestResult {
    let mut config = config(scenario_config());
    config.sections[0].exclude_dir_sections = vec!["Staff".into()];
    let mut households = roster(smith_and_doe());
    if let Some(list) = households.lists.get_mut("Members") {
        list[0].members[0].directory_sections.insert("Staff".into());
    }

    let directory = builder(config, households)?.build()?;
    let pdf = render(&directory)?;

    assert!(!pdf.page_text(1).contains("SMITH, JANE"));
    assert!(pdf.page_text(1).contains("SMITH, JOHN"));
    // the index section has its own exclusions
    assert_pdf_contains_text!(pdf, "Jane Smith");
    Ok(())
}
