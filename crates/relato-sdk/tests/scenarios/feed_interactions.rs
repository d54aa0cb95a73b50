//! Feed Interaction Tests
//!
//! Verifies feed search and stats, like/save toggles, and the detail view
//! counter across several users sharing one data directory.

use anyhow::Result;
use relato_sdk::DraftFile;
use relato_sdk::types::{FeedQuery, Season};
use relato_testing::TestWorld;
use relato_testing::fixtures::draft_for;

fn publish(world: &TestWorld, email: &str, name: &str, title: &str, country: (&str, &str)) -> Result<relato_sdk::types::ReportId> {
    world.sign_up(email, name)?;
    let client = world.get_client()?;
    let draft = DraftFile::parse(&draft_for(title, country.0, country.1))?;
    Ok(client.reports().create_from_draft(&draft)?.id)
}

#[test]
fn test_search_matches_author_and_country() -> Result<()> {
    let world = TestWorld::new();
    publish(&world, "ana@example.com", "Ana Souza", "Lisboa", ("PT", "Portugal"))?;
    publish(&world, "caio@example.com", "Caio", "Kyoto", ("JP", "Japão"))?;
    publish(&world, "bia@example.com", "Bia", "Porto", ("PT", "Portugal"))?;

    let client = world.get_client()?;

    let page = client.feed().list(FeedQuery::new(Some("SOUZA".to_string()), None))?;
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].report.title, "Lisboa");

    let page = client.feed().list(FeedQuery::new(Some("portugal".to_string()), None))?;
    insta::assert_json_snapshot!(page.stats, @r#"
    {
      "total_reports": 3,
      "distinct_countries": 2,
      "results": 2
    }
    "#);

    let page = client.feed().list(FeedQuery::new(Some("   ".to_string()), None))?;
    assert_eq!(page.results.len(), 3);

    let page = client.feed().list(FeedQuery::new(None, Some(Season::Summer)))?;
    assert!(page.results.is_empty());
    Ok(())
}

#[test]
fn test_like_and_save_toggles() -> Result<()> {
    let world = TestWorld::new();
    let id = publish(&world, "ana@example.com", "Ana", "Lisboa", ("PT", "Portugal"))?;
    world.sign_up("bia@example.com", "Bia")?;
    let client = world.get_client()?;

    let liked = client.feed().toggle_like(&id)?;
    assert!(liked.liked);
    assert_eq!(liked.like_count, 1);

    let saved = client.feed().toggle_save(&id)?;
    assert!(saved.saved);
    assert_eq!(client.profile().saved()?.len(), 1);

    let unliked = client.feed().toggle_like(&id)?;
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 0);

    let card = client.feed().card(&id)?;
    assert!(card.saved);
    assert!(!card.liked);
    Ok(())
}

#[test]
fn test_detail_counts_views() -> Result<()> {
    let world = TestWorld::new();
    let id = publish(&world, "ana@example.com", "Ana", "Lisboa", ("PT", "Portugal"))?;
    let client = world.get_client()?;

    client.reports().show(&id)?;
    let detail = client.reports().show(&id)?;
    assert_eq!(detail.report.report.view_count, 2);
    assert_eq!(detail.report.user.name.as_deref(), Some("Ana"));
    assert_eq!(detail.sections.len(), 3);
    Ok(())
}

#[test]
fn test_toggles_require_sign_in() -> Result<()> {
    let world = TestWorld::new();
    let id = publish(&world, "ana@example.com", "Ana", "Lisboa", ("PT", "Portugal"))?;
    let client = world.get_client()?;
    client.auth().sign_out()?;

    assert!(client.feed().toggle_like(&id).is_err());
    assert_eq!(client.feed().card(&id)?.like_count, 0);
    Ok(())
}
