//! Composer Save Tests
//!
//! Verifies the save gate (at least three filled sections), that a rejected
//! save writes nothing, and that an accepted save writes the whole aggregate.

use anyhow::Result;
use relato_sdk::types::{FeedQuery, ReportIntent, SectionKey};
use relato_sdk::{DraftFile, Error};
use relato_testing::TestWorld;
use relato_testing::assertions::assert_section;
use relato_testing::fixtures::{SUMMARY_ONLY_DRAFT, THREE_SECTION_DRAFT};

#[test]
fn test_summary_only_is_rejected_without_a_row() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let draft = DraftFile::parse(SUMMARY_ONLY_DRAFT)?;
    let err = client.reports().create_from_draft(&draft).unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().to_lowercase().contains("fill more sections"));

    let page = client.feed().list(FeedQuery::default())?;
    assert_eq!(page.stats.total_reports, 0);
    Ok(())
}

#[test]
fn test_three_sections_write_exactly_one_row() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let draft = DraftFile::parse(THREE_SECTION_DRAFT)?;
    let created = client.reports().create_from_draft(&draft)?;
    assert!(created.ignored.is_empty());

    let page = client.feed().list(FeedQuery::default())?;
    assert_eq!(page.results.len(), 1);

    let report = &page.results[0].report;
    assert_eq!(report.id, created.id);
    assert_eq!(report.child_ages, vec![48, 18]);
    assert_eq!(report.season_emoji.as_deref(), Some("🌸"));

    assert_section(report, "resumo", true, true)?;
    assert_section(report, "hospedagem", true, true)?;
    assert_section(report, "alimentacao", true, true)?;
    for key in ["transporte_aereo", "passeios", "transporte_interno", "outros"] {
        assert_section(report, key, false, false)?;
        assert!(report.sections.get(key).unwrap().images.is_empty());
    }
    assert_eq!(report.section_order.len(), 7);
    Ok(())
}

#[test]
fn test_hidden_section_with_text_does_not_count() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let mut composer = client.reports().compose()?;
    for key in ["resumo", "hospedagem"] {
        composer.apply(ReportIntent::EditSectionContent {
            key: SectionKey::from(key),
            content: "texto".to_string(),
        })?;
    }
    composer.apply(ReportIntent::SetSectionVisible {
        key: SectionKey::from("resumo"),
        visible: true,
    })?;
    // hospedagem stays hidden
    composer.apply(ReportIntent::SetSectionVisible {
        key: SectionKey::from("outros"),
        visible: true,
    })?;
    composer.apply(ReportIntent::EditSectionContent {
        key: SectionKey::from("outros"),
        content: "dicas".to_string(),
    })?;

    assert_eq!(composer.progress().filled_sections, 2);
    assert!(composer.save().unwrap_err().is_validation());
    Ok(())
}

#[test]
fn test_ignored_draft_entries_are_reported() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let mut draft = DraftFile::parse(THREE_SECTION_DRAFT)?;
    let locations = draft.locations.get_or_insert_with(Vec::new);
    locations.push("  Alfama ".to_string());
    locations.push("   ".to_string());
    let created = client.reports().create_from_draft(&draft)?;

    assert_eq!(
        created.ignored,
        vec![
            "location '  Alfama ': location already added",
            "location '   ': location is empty",
        ]
    );
    Ok(())
}

#[test]
fn test_compose_requires_sign_in() -> Result<()> {
    let world = TestWorld::new();
    let client = world.get_client()?;
    assert!(matches!(
        client.reports().compose(),
        Err(Error::Unauthorized(_))
    ));
    Ok(())
}

#[test]
fn test_template_needs_no_session() -> Result<()> {
    let world = TestWorld::new();
    let template = world.get_client()?.reports().template();

    assert_eq!(template.min_completed_sections, 3);
    assert_eq!(template.sections.len(), 7);

    let summary = &template.sections[0];
    assert_eq!(summary.key.as_str(), "resumo");
    assert!(summary.visible);
    assert!(!summary.fixed);
    assert!(summary.placeholder.contains("You can rename this section"));

    let hidden: Vec<_> = template
        .sections
        .iter()
        .filter(|s| !s.visible)
        .map(|s| s.key.as_str())
        .collect();
    assert_eq!(hidden.len(), 6);
    Ok(())
}
