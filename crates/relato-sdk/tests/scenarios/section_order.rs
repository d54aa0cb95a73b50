//! Section Order Tests
//!
//! Verifies dragging rows in the order manager: one key moves, the result is
//! a permutation, and the saved report keeps the new order.

use anyhow::Result;
use relato_sdk::types::{OrderView, Outcome, IgnoreReason, ReportIntent};
use relato_sdk::{DraftFile, Error};
use relato_testing::TestWorld;
use relato_testing::assertions::{assert_permutation, assert_single_move};
use relato_testing::fixtures::THREE_SECTION_DRAFT;

fn row_labels(view: &OrderView) -> Vec<String> {
    match view {
        OrderView::Rows { rows } => rows.iter().map(|r| r.label.clone()).collect(),
        OrderView::Empty { message } => vec![message.to_string()],
    }
}

#[test]
fn test_drag_four_to_one_moves_a_single_key() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;

    let mut composer = client.reports().compose()?;
    let before = composer.draft().section_order.clone();

    let outcome = composer.apply(ReportIntent::MoveSection { from: 4, to: 1 })?;
    assert_eq!(outcome, Outcome::Changed);

    let after = composer.draft().section_order.clone();
    assert_permutation(&before, &after)?;
    assert_single_move(&before, &after)?;
    assert_eq!(after.as_slice()[1].as_str(), "passeios");
    assert_eq!(after.as_slice()[0].as_str(), "resumo");
    Ok(())
}

#[test]
fn test_order_rows_mark_hidden_sections() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;
    let composer = client.reports().compose()?;

    insta::assert_json_snapshot!(row_labels(&composer.order_view()), @r#"
    [
      "Resumo do roteiro",
      "Transporte Aéreo (hidden)",
      "Hospedagem (hidden)",
      "Alimentação (hidden)",
      "Passeios (hidden)",
      "Transporte Interno (hidden)",
      "Outros (hidden)"
    ]
    "#);
    Ok(())
}

#[test]
fn test_move_section_is_saved() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;
    let id = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?
        .id;

    client.reports().move_section(&id, 3, 0)?;

    let reopened = world.get_client()?;
    let composer = reopened.reports().edit(&id)?;
    assert_eq!(composer.draft().section_order.as_slice()[0].as_str(), "alimentacao");

    let labels = row_labels(&reopened.reports().order(&id)?);
    assert_eq!(labels[0], "Alimentação");
    assert_eq!(labels[1], "Resumo do roteiro");
    Ok(())
}

#[test]
fn test_same_index_and_out_of_range() -> Result<()> {
    let world = TestWorld::new();
    world.sign_up("ana@example.com", "Ana")?;
    let client = world.get_client()?;
    let mut composer = client.reports().compose()?;
    let before = composer.draft().section_order.clone();

    assert_eq!(
        composer.apply(ReportIntent::MoveSection { from: 2, to: 2 })?,
        Outcome::Ignored(IgnoreReason::SamePosition)
    );
    assert!(composer.apply(ReportIntent::MoveSection { from: 0, to: 7 }).is_err());
    assert_eq!(composer.draft().section_order, before);

    let id = client
        .reports()
        .create_from_draft(&DraftFile::parse(THREE_SECTION_DRAFT)?)?
        .id;
    assert!(matches!(
        client.reports().move_section(&id, 9, 0),
        Err(Error::InvalidInput(_))
    ));
    Ok(())
}
