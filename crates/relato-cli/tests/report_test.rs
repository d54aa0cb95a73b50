//! Report commands end to end: draft files, save validation, order and images.

use anyhow::Result;
use relato_testing::TestWorld;
use relato_testing::fixtures::{SUMMARY_ONLY_DRAFT, THREE_SECTION_DRAFT};

fn create_report(world: &TestWorld, draft: &str) -> Result<String> {
    let path = world.write_draft("draft.toml", draft)?;
    let result = world.run(&["report", "create", "--file", path.to_str().unwrap()])?;
    assert!(result.success(), "create failed: {}", result.stderr());

    let json = result.json()?;
    Ok(json["content"]["id"].as_str().unwrap().to_string())
}

#[test]
fn test_summary_only_draft_is_rejected() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let path = world.write_draft("porto.toml", SUMMARY_ONLY_DRAFT)?;

    let result = world.run(&["report", "create", "--file", path.to_str().unwrap()])?;
    assert!(!result.success());
    assert!(
        result.stderr().contains("Fill more sections"),
        "stderr: {}",
        result.stderr()
    );

    let feed = world.run(&["--format", "json", "feed", "list"])?.json()?;
    relato_testing::assertions::assert_report_count(&feed, 0)?;
    Ok(())
}

#[test]
fn test_create_requires_sign_in() -> Result<()> {
    let world = TestWorld::new();
    let path = world.write_draft("lisboa.toml", THREE_SECTION_DRAFT)?;

    let result = world.run(&["report", "create", "--file", path.to_str().unwrap()])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not signed in"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_create_and_show() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana Souza")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let detail = world.run(&["report", "show", &id])?.json()?;
    let content = &detail["content"];
    assert_eq!(content["title"], "Lisboa em família");
    assert_eq!(content["author"]["name"], "Ana Souza");
    assert_eq!(content["season_emoji"], "🌸");
    assert_eq!(content["month"], "Março");
    assert_eq!(content["child_ages_months"], serde_json::json!([48, 18]));
    assert_eq!(content["view_count"], 1);

    let keys: Vec<_> = content["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["resumo", "hospedagem", "alimentacao"]);
    Ok(())
}

#[test]
fn test_show_plain_text() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana Souza")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let result = world.run(&["--format", "plain", "report", "show", &id])?;
    assert!(result.success(), "show failed: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("🌸 Lisboa em família"));
    assert!(out.contains("🇵🇹 Portugal"));
    assert!(out.contains("Kids:   4 years, 1 year and 6 months"));
    assert!(out.contains("Places: Alfama, Belém"));
    assert!(out.contains("## Hospedagem"));
    assert!(!out.contains("## Passeios"));
    Ok(())
}

#[test]
fn test_unknown_report_is_not_found() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["report", "show", "6a2f41a3-c54c-4c0c-9a0d-4b4f7a1e0c11"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not found"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_invalid_report_id_is_rejected_by_parser() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["report", "show", "not-a-uuid"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid id"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_move_section_is_saved() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let moved = world.run(&["report", "move", &id, "4", "1"])?.json()?;
    assert_eq!(moved["badge"]["label"], "Moved section 4 to position 1");
    assert_eq!(moved["content"]["moved"]["from"], 4);

    let order = world.run(&["--format", "plain", "report", "order", &id])?;
    let rows: Vec<&str> = order
        .stdout()
        .lines()
        .take_while(|l| !l.trim().is_empty())
        .map(str::trim)
        .collect();
    insta::assert_snapshot!(rows.join("\n"), @r"
    0  Resumo do roteiro
    1  Passeios (hidden)
    2  Transporte Aéreo (hidden)
    3  Hospedagem
    4  Alimentação
    5  Transporte Interno (hidden)
    6  Outros (hidden)
    ");
    Ok(())
}

#[test]
fn test_move_out_of_range_fails() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let result = world.run(&["report", "move", &id, "9", "0"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("out of range"), "stderr: {}", result.stderr());

    let same = world.run(&["report", "move", &id, "2", "2"])?.json()?;
    assert_eq!(same["badge"]["level"], "info");
    Ok(())
}

#[test]
fn test_edit_applies_draft_and_reports_ignored_entries() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let patch = world.write_draft(
        "patch.toml",
        r#"
title = "Lisboa e Sintra"

[[countries]]
code = "PT"
name = "Portugal"

[[countries]]
code = "PT"
name = "Portugal de novo"

[sections.passeios]
content = "Palácio da Pena."
"#,
    )?;
    let result = world.run(&["report", "edit", &id, "--file", patch.to_str().unwrap()])?;
    assert!(result.success(), "edit failed: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["content"]["created"], false);
    assert_eq!(json["badge"]["level"], "warning");
    let ignored = json["content"]["ignored"].as_array().unwrap();
    assert_eq!(ignored.len(), 1);
    assert!(ignored[0].as_str().unwrap().starts_with("country PT"));

    let detail = world.run(&["report", "show", &id])?.json()?;
    assert_eq!(detail["content"]["title"], "Lisboa e Sintra");
    assert_eq!(detail["content"]["sections"].as_array().unwrap().len(), 4);
    assert_eq!(detail["content"]["countries"].as_array().unwrap().len(), 1);
    Ok(())
}

#[test]
fn test_edit_with_same_draft_keeps_lists() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;
    let path = world.write_draft("again.toml", THREE_SECTION_DRAFT)?;

    for _ in 0..2 {
        let result = world.run(&["report", "edit", &id, "--file", path.to_str().unwrap()])?;
        assert!(result.success(), "edit failed: {}", result.stderr());
        assert_eq!(result.json()?["content"]["ignored"], serde_json::json!([]));
    }

    let detail = world.run(&["report", "show", &id])?.json()?;
    let content = &detail["content"];
    assert_eq!(content["child_ages_months"], serde_json::json!([48, 18]));
    assert_eq!(content["locations"], serde_json::json!(["Alfama", "Belém"]));
    assert_eq!(content["countries"].as_array().unwrap().len(), 1);
    Ok(())
}

#[test]
fn test_remove_list_entries() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let result = world.run(&["report", "remove", &id, "location", "0"])?;
    assert!(result.success(), "remove failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["badge"]["label"], "Removed location 0");
    assert_eq!(json["content"]["remaining"], serde_json::json!(["Belém"]));

    let result = world.run(&["report", "remove", &id, "child-age", "0"])?;
    assert!(result.success(), "remove failed: {}", result.stderr());
    assert_eq!(
        result.json()?["content"]["remaining"],
        serde_json::json!(["1 year and 6 months"])
    );

    let result = world.run(&["report", "remove", &id, "country", "4"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("out of range"), "stderr: {}", result.stderr());

    let detail = world.run(&["report", "show", &id])?.json()?;
    assert_eq!(detail["content"]["locations"], serde_json::json!(["Belém"]));
    assert_eq!(detail["content"]["child_ages_months"], serde_json::json!([18]));
    Ok(())
}

#[test]
fn test_detach_removes_section_image() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;
    let image = world.write_image("quarto.jpg")?;

    let attached = world.run(&[
        "report",
        "attach",
        &id,
        "--section",
        "hospedagem",
        "--image",
        image.to_str().unwrap(),
    ])?;
    assert!(attached.success(), "attach failed: {}", attached.stderr());

    let result = world.run(&["report", "detach", &id, "hospedagem", "0"])?;
    assert!(result.success(), "detach failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["badge"]["label"], "Image removed from hospedagem");
    assert_eq!(json["content"]["remaining"], serde_json::json!([]));

    let detail = world.run(&["report", "show", &id])?.json()?;
    let lodging = detail["content"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["key"] == "hospedagem")
        .unwrap()
        .clone();
    assert_eq!(lodging["gallery"], serde_json::json!([]));

    let again = world.run(&["report", "detach", &id, "hospedagem", "0"])?;
    assert!(!again.success());
    Ok(())
}

#[test]
fn test_summary_image_becomes_cover() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;
    let image = world.write_image("praia.jpg")?;

    let result = world.run(&[
        "report",
        "attach",
        &id,
        "--section",
        "resumo",
        "--image",
        image.to_str().unwrap(),
    ])?;
    assert!(result.success(), "attach failed: {}", result.stderr());
    let url = result.json()?["content"]["url"].as_str().unwrap().to_string();
    assert!(url.contains("/category_resumo_"), "url: {}", url);

    let detail = world.run(&["report", "show", &id])?.json()?;
    assert_eq!(detail["content"]["cover"], url.as_str());
    // The cover is not repeated in the summary gallery
    assert_eq!(detail["content"]["sections"][0]["gallery"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_delete_own_report() -> Result<()> {
    let world = TestWorld::new().json();
    world.sign_up("ana@example.com", "Ana")?;
    let id = create_report(&world, THREE_SECTION_DRAFT)?;

    let result = world.run(&["report", "delete", &id])?;
    assert!(result.success(), "delete failed: {}", result.stderr());

    let feed = world.run(&["feed", "list"])?.json()?;
    relato_testing::assertions::assert_report_count(&feed, 0)?;
    Ok(())
}

#[test]
fn test_template_lists_sections() -> Result<()> {
    let world = TestWorld::new().json();

    let json = world.run(&["report", "template"])?.json()?;
    let keys: Vec<_> = json["content"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        keys,
        vec![
            "resumo",
            "transporte_aereo",
            "hospedagem",
            "alimentacao",
            "passeios",
            "transporte_interno",
            "outros"
        ]
    );
    assert_eq!(json["content"]["min_completed_sections"], 3);
    Ok(())
}
