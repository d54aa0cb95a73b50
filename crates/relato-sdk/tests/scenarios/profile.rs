//! Profile Tests
//!
//! Verifies sign-in state across clients, the user's own report list,
//! deletion and avatar upload.

use anyhow::Result;
use relato_sdk::{DraftFile, Error};
use relato_testing::TestWorld;
use relato_testing::fixtures::{SAMPLE_JPEG, THREE_SECTION_DRAFT, draft_for};
use relato_testing::world::TEST_PASSWORD;

#[test]
fn test_session_survives_new_client() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;

    let client = world.get_client()?;
    let me = client.auth().whoami().expect("signed in");
    assert_eq!(me.display_name(), "Ana");

    client.auth().sign_out()?;
    assert!(world.get_client()?.auth().whoami().is_none());

    let user = client.auth().sign_in("ANA@example.com", TEST_PASSWORD)?;
    assert_eq!(user.email, "ana@example.com");
    Ok(())
}

#[test]
fn test_wrong_password_is_unauthorized() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    assert!(matches!(
        client.auth().sign_in("ana@example.com", "errada"),
        Err(Error::Unauthorized(_))
    ));
    Ok(())
}

#[test]
fn test_profile_lists_and_deletes_own_reports() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;
    let first = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?
        .id;
    client
        .reports()
        .create_from_draft(&DraftFile::parse(&draft_for("Roma", "IT", "Itália"))?)?;

    let me = client.profile().me()?;
    assert_eq!(me.reports.len(), 2);
    assert_eq!(me.reports[0].report.title, "Roma");

    client.reports().delete(&first)?;
    assert_eq!(client.profile().me()?.reports.len(), 1);
    assert!(matches!(client.reports().show(&first), Err(Error::NotFound(_))));
    Ok(())
}

#[test]
fn test_cannot_delete_someone_elses_report() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let id = world
        .get_client()?
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?
        .id;

    world.sign_up("bia@example.com", "Bia")?;
    let client = world.get_client()?;
    assert!(matches!(
        client.reports().delete(&id),
        Err(Error::Unauthorized(_))
    ));
    assert!(matches!(client.reports().edit(&id), Err(Error::Unauthorized(_))));
    Ok(())
}

#[test]
fn test_avatar_and_section_images() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let url = client.profile().upload_avatar(SAMPLE_JPEG)?;
    assert_eq!(client.auth().whoami().and_then(|u| u.avatar_url), Some(url));
    assert!(matches!(
        client.profile().upload_avatar(&[]),
        Err(Error::InvalidInput(_))
    ));

    let id = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?
        .id;
    let image = client.reports().attach_image(&id, "resumo", SAMPLE_JPEG)?;

    let detail = client.reports().show(&id)?;
    assert_eq!(detail.cover.as_deref(), Some(image.as_str()));
    // Cover is not repeated in the summary gallery
    assert!(detail.sections[0].gallery.is_empty());
    Ok(())
}
