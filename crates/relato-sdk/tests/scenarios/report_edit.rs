//! Report Edit Tests
//!
//! Verifies that a draft applied to an existing report replaces its lists
//! instead of stacking on them, and that single entries and section images
//! can be removed from a saved report.

use anyhow::Result;
use relato_sdk::types::ReportList;
use relato_sdk::{DraftFile, Error};
use relato_testing::TestWorld;
use relato_testing::fixtures::{SAMPLE_JPEG, THREE_SECTION_DRAFT};

#[test]
fn test_same_draft_twice_gives_same_lists() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let draft = DraftFile::parse(THREE_SECTION_DRAFT)?;
    let created = client.reports().create_from_draft(&draft)?;
    let updated = client.reports().update_from_draft(&created.id, &draft)?;
    assert_eq!(updated.id, created.id);
    assert!(updated.ignored.is_empty());

    let report = client.reports().show(&created.id)?.report.report;
    assert_eq!(report.child_ages, vec![48, 18]);
    assert_eq!(report.locations, vec!["Alfama", "Belém"]);
    assert_eq!(report.countries.len(), 1);
    Ok(())
}

#[test]
fn test_draft_lists_replace_and_absent_lists_stay() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let created = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?;

    let edit = DraftFile::parse(
        r#"
locations = ["Sintra"]

[[child_ages]]
value = 6
"#,
    )?;
    client.reports().update_from_draft(&created.id, &edit)?;

    let report = client.reports().show(&created.id)?.report.report;
    assert_eq!(report.locations, vec!["Sintra"]);
    assert_eq!(report.child_ages, vec![72]);
    assert_eq!(report.countries[0].code, "PT");
    assert_eq!(report.title, "Lisboa em família");
    Ok(())
}

#[test]
fn test_remove_entries_by_index() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let created = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?;
    let reports = client.reports();

    let report = reports.remove_entry(&created.id, ReportList::Locations, 0)?;
    assert_eq!(report.locations, vec!["Belém"]);

    let report = reports.remove_entry(&created.id, ReportList::ChildAges, 1)?;
    assert_eq!(report.child_ages, vec![48]);

    assert!(matches!(
        reports.remove_entry(&created.id, ReportList::Countries, 3),
        Err(Error::InvalidInput(_))
    ));

    let stored = reports.show(&created.id)?.report.report;
    assert_eq!(stored.locations, vec!["Belém"]);
    assert_eq!(stored.child_ages, vec![48]);
    assert_eq!(stored.countries.len(), 1);
    Ok(())
}

#[test]
fn test_remove_image_from_section() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let created = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?;
    let reports = client.reports();
    reports.attach_image(&created.id, "resumo", SAMPLE_JPEG)?;
    assert!(reports.show(&created.id)?.cover.is_some());

    let remaining = reports.remove_image(&created.id, "resumo", 0)?;
    assert!(remaining.is_empty());

    let detail = reports.show(&created.id)?;
    assert!(detail.cover.is_none());
    assert!(detail.report.report.sections.get("resumo").unwrap().images.is_empty());

    assert!(matches!(
        reports.remove_image(&created.id, "resumo", 0),
        Err(Error::InvalidInput(_))
    ));
    Ok(())
}

#[test]
fn test_only_the_owner_can_remove() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let created = world
        .get_client()?
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?;

    world.sign_up("bia@example.com", "Bia")?;
    let client = world.get_client()?;
    assert!(matches!(
        client
            .reports()
            .remove_entry(&created.id, ReportList::Locations, 0),
        Err(Error::Unauthorized(_))
    ));
    Ok(())
}
