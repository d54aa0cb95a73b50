use anyhow::Result;
use relato_testing::TestWorld;
use relato_testing::assertions::assert_report_count;
use relato_testing::fixtures::draft_for;

/// Ana writes Lisboa and Porto, Bia writes Kyoto. Bia stays signed in.
fn seeded_world() -> Result<(TestWorld, Vec<String>)> {
    let world = TestWorld::new().json();
    let mut ids = Vec::new();

    world.sign_up("ana@example.com", "Ana Souza")?;
    for (title, code, name) in [("Lisboa", "PT", "Portugal"), ("Porto", "PT", "Portugal")] {
        let path = world.write_draft("draft.toml", &draft_for(title, code, name))?;
        let json = world
            .run(&["report", "create", "--file", path.to_str().unwrap()])?
            .json()?;
        ids.push(json["content"]["id"].as_str().unwrap().to_string());
    }

    world.sign_up("bia@example.com", "Bia Lima")?;
    let path = world.write_draft("draft.toml", &draft_for("Kyoto", "JP", "Japão"))?;
    let json = world
        .run(&["report", "create", "--file", path.to_str().unwrap()])?
        .json()?;
    ids.push(json["content"]["id"].as_str().unwrap().to_string());

    Ok((world, ids))
}

#[test]
fn test_feed_lists_newest_first() -> Result<()> {
    let (world, _) = seeded_world()?;

    let json = world.run(&["feed", "list"])?.json()?;
    assert_report_count(&json, 3)?;
    assert_eq!(json["content"]["reports"][0]["title"], "Kyoto");
    assert_eq!(json["content"]["reports"][2]["title"], "Lisboa");
    assert_eq!(json["content"]["stats"]["distinct_countries"], 2);
    assert_eq!(json["badge"]["label"], "3 reports");
    Ok(())
}

#[test]
fn test_feed_query_matches_country_and_author() -> Result<()> {
    let (world, _) = seeded_world()?;

    let json = world.run(&["feed", "list", "--query", "portugal"])?.json()?;
    assert_report_count(&json, 2)?;
    assert_eq!(json["content"]["stats"]["results"], 2);
    assert_eq!(json["content"]["stats"]["total_reports"], 3);

    let json = world.run(&["feed", "list", "-q", "LIMA"])?.json()?;
    assert_report_count(&json, 1)?;
    assert_eq!(json["content"]["reports"][0]["author_name"], "Bia Lima");

    let json = world.run(&["feed", "list", "--query", "atlantis"])?.json()?;
    assert_report_count(&json, 0)?;
    assert_eq!(json["badge"]["label"], "No reports match the search");
    Ok(())
}

#[test]
fn test_feed_minimal_prints_ids() -> Result<()> {
    let (world, ids) = seeded_world()?;

    let result = world.run(&["--format", "plain", "feed", "list", "--quiet"])?;
    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines, vec![ids[2].as_str(), ids[1].as_str(), ids[0].as_str()]);
    Ok(())
}

#[test]
fn test_feed_stats() -> Result<()> {
    let (world, _) = seeded_world()?;

    let json = world.run(&["feed", "stats", "--query", "kyoto"])?.json()?;
    assert_eq!(
        json["content"],
        serde_json::json!({"total_reports": 3, "distinct_countries": 2, "results": 1})
    );
    Ok(())
}

#[test]
fn test_like_and_save_toggle() -> Result<()> {
    let (world, ids) = seeded_world()?;
    let lisboa = ids[0].as_str();

    let liked = world.run(&["like", lisboa])?.json()?;
    assert_eq!(liked["content"]["liked"], true);
    assert_eq!(liked["content"]["like_count"], 1);
    assert_eq!(liked["badge"]["label"], "Liked");

    let unliked = world.run(&["like", lisboa])?.json()?;
    assert_eq!(unliked["content"]["liked"], false);
    assert_eq!(unliked["content"]["like_count"], 0);

    let saved = world.run(&["save", lisboa])?.json()?;
    assert_eq!(saved["content"]["saved"], true);

    let list = world.run(&["saved", "list"])?.json()?;
    let entries = list["content"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["report"]["title"], "Lisboa");

    let unsaved = world.run(&["save", lisboa])?.json()?;
    assert_eq!(unsaved["content"]["saved"], false);
    let list = world.run(&["saved", "list"])?.json()?;
    assert_eq!(list["badge"]["label"], "No saved reports");
    Ok(())
}

#[test]
fn test_like_requires_sign_in() -> Result<()> {
    let (world, ids) = seeded_world()?;
    world.run(&["auth", "signout"])?;

    let result = world.run(&["like", &ids[0]])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not signed in"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_profile_lists_own_reports() -> Result<()> {
    let (world, _) = seeded_world()?;

    let json = world.run(&["profile", "show"])?.json()?;
    assert_eq!(json["content"]["user"]["email"], "bia@example.com");
    assert_report_count(&json, 1)?;

    let image = world.write_image("me.jpg")?;
    let avatar = world
        .run(&["profile", "avatar", "--image", image.to_str().unwrap()])?
        .json()?;
    let url = avatar["content"]["url"].as_str().unwrap().to_string();
    assert!(url.contains("/avatar_"), "url: {}", url);

    let json = world.run(&["profile", "show"])?.json()?;
    assert_eq!(json["content"]["user"]["avatar_url"], url.as_str());
    Ok(())
}

#[test]
fn test_cannot_delete_someone_elses_report() -> Result<()> {
    let (world, ids) = seeded_world()?;

    let result = world.run(&["report", "delete", &ids[0]])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Forbidden"), "stderr: {}", result.stderr());

    let json = world.run(&["feed", "list"])?.json()?;
    assert_report_count(&json, 3)?;
    Ok(())
}
