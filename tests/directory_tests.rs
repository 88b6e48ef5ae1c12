mod common;

use common::fixtures::*;
use common::pdf_assertions::info_entry;
use common::{TestResult, builder, render};
use rollbook::{DirectoryConfig, SectionKind};

#[test]
fn test_end_to_end_scenario() -> TestResult {
    let directory = builder(config(scenario_config()), roster(smith_and_doe()))?.build()?;
    let pdf = render(&directory)?;

    // roster, children, index
    assert_pdf_page_count!(pdf, 3);

    let roster_page = pdf.page_text(1);
    let doe = roster_page.find("DOE, JAN").expect("Doe cell");
    let john = roster_page.find("SMITH, JOHN").expect("John cell");
    let jane = roster_page.find("SMITH, JANE").expect("Jane cell");
    assert!(doe < john && john < jane);
    assert!(roster_page.contains("1 Main St"));
    assert!(roster_page.contains("Springfield, IL 62701"));
    assert!(roster_page.contains("C: 217-555-0100"));
    assert!(!roster_page.contains("H: 217-555-0101"));
    assert!(roster_page.contains("As of: 06/15/2024"));

    let children_page = pdf.page_text(2);
    assert!(children_page.contains("Doe, Jan"));
    assert!(!children_page.contains("Smith, John"));
    let ben = children_page.find("Ben").expect("Ben row");
    let amy = children_page.find("Amy").expect("Amy row");
    assert!(ben < amy);
    assert!(children_page.contains("3 mos."));
    assert!(children_page.contains("Jun 01, 2022"));

    let index_page = pdf.page_text(3);
    assert!(index_page.contains("Jan Doe"));
    assert!(index_page.contains("Jane Smith"));
    assert!(index_page.contains("John Smith"));
    Ok(())
}

#[test]
fn test_baptism_footnote_and_mark() -> TestResult {
    let directory = builder(config(scenario_config()), roster(smith_and_doe()))?.build()?;
    let pdf = render(&directory)?;

    let roster_page = pdf.page_text(1);
    assert!(roster_page.contains("Member pending baptism"));
    assert!(!roster_page.contains("New member in the last 90 days"));
    assert!(roster_page.contains("DOE, JAN\u{a7}"));
    Ok(())
}

/// John joined years ago with a baptism booked for 2024-07-01; Jane joined
/// 2024-05-20. Both footnotes are enabled.
fn dated_smiths() -> (DirectoryConfig, rollbook::Roster) {
    let mut settings = scenario_config();
    settings["sections"][0]["new_member_footnote"] = true.into();
    let mut households = smith_and_doe();
    let smiths = &mut households["lists"]["Members"][0];
    smiths["head"]["date_joined"] = "2020-01-01".into();
    smiths["head"]["baptism_date"] = "2024-07-01".into();
    smiths["members"][0]["date_joined"] = "2024-05-20".into();
    (config(settings), roster(households))
}

#[test]
fn test_marks_follow_dates() -> TestResult {
    let (config, roster) = dated_smiths();
    let directory = builder(config, roster)?.build()?;
    let pdf = render(&directory)?;

    let roster_page = pdf.page_text(1);
    assert!(roster_page.contains("SMITH, JANE*"));
    assert!(roster_page.contains("SMITH, JOHN\u{a7}"));
    assert!(roster_page.contains("New member in the last 90 days"));
    Ok(())
}

#[test]
fn test_render_date_moves_new_member_window() -> TestResult {
    let (config, roster) = dated_smiths();
    let directory = builder(config, roster)?
        .with_render_time(rollbook::parse_render_date("2024-09-30")?)
        .build()?;
    let pdf = render(&directory)?;

    let roster_page = pdf.page_text(1);
    assert!(roster_page.contains("SMITH, JANE"));
    assert!(!roster_page.contains("SMITH, JANE*"));
    assert!(!roster_page.contains("SMITH, JOHN\u{a7}"));
    Ok(())
}

#[test]
fn test_long_roster_paginates() -> TestResult {
    let mut config = DirectoryConfig::default();
    config.sections.truncate(1);
    let directory = builder(config, roster(many_households(60)))?.build()?;
    let pdf = render(&directory)?;

    // eight cells per column, three columns per page
    assert_pdf_page_count!(pdf, 3);
    assert_pdf_contains_text!(pdf, "PERSON000, PAT");
    assert_pdf_contains_text!(pdf, "PERSON059, PAT");
    assert!(pdf.page_text(3).contains("PERSON048, PAT"));
    Ok(())
}

#[test]
fn test_section_reports() -> TestResult {
    let directory = builder(config(scenario_config()), roster(smith_and_doe()))?.build()?;
    let mut surface = rollbook_render_core::RecordingSurface::new(directory.config().page_dimensions()?);
    let reports = directory.render_into(&mut surface)?;

    let summary: Vec<(SectionKind, usize)> =
        reports.iter().map(|r| (r.kind, r.stats.drawn)).collect();
    assert_eq!(
        summary,
        vec![
            (SectionKind::Roster, 3),
            (SectionKind::Children, 1),
            (SectionKind::Index, 3)
        ]
    );
    Ok(())
}

#[test]
fn test_generate_to_file_with_title() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("directory.pdf");
    builder(config(scenario_config()), roster(smith_and_doe()))?
        .with_title("Membership Directory 2024")
        .build()?
        .generate_to_file(&path)?;

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"%PDF-1.5"));
    let pdf = common::GeneratedPdf::from_bytes(bytes)?;
    assert_eq!(
        info_entry(&pdf.doc, b"Title").as_deref(),
        Some("Membership Directory 2024")
    );
    Ok(())
}

#[test]
fn test_files_from_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.json");
    let roster_path = dir.path().join("roster.json");
    std::fs::write(&config_path, scenario_config().to_string())?;
    std::fs::write(&roster_path, smith_and_doe().to_string())?;

    let directory = rollbook::DirectoryBuilder::new()
        .with_config_file(&config_path)?
        .with_roster_file(&roster_path)?
        .with_render_time(rollbook::parse_render_date("2024-06-15")?)
        .build()?;
    let pdf = render(&directory)?;
    assert_pdf_page_count!(pdf, 3);
    Ok(())
}

#[test]
fn test_empty_directory_is_an_error() {
    let mut config = DirectoryConfig::default();
    for section in &mut config.sections {
        section.show = false;
    }
    let directory = builder(config, roster(smith_and_doe()))
        .unwrap()
        .build()
        .unwrap();
    assert!(directory.generate().is_err());
}
