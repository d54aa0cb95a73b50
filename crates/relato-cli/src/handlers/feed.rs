use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CardAction;
use anyhow::Result;
use relato_sdk::Client;
use relato_sdk::types::{FeedQuery, ReportId, Season};

pub fn list(
    client: &Client,
    query: Option<String>,
    season: Option<Season>,
    ctx: &HandlerContext,
) -> Result<()> {
    let query = FeedQuery::new(query, season);
    let page = client.feed().list(query.clone())?;
    ctx.render(presenters::present_feed(page, &query))
}

pub fn stats(
    client: &Client,
    query: Option<String>,
    season: Option<Season>,
    ctx: &HandlerContext,
) -> Result<()> {
    let page = client.feed().list(FeedQuery::new(query, season))?;
    ctx.render(presenters::present_feed_stats(&page.stats))
}

pub fn like(client: &Client, id: &ReportId, ctx: &HandlerContext) -> Result<()> {
    let state = client.feed().toggle_like(id)?;
    ctx.render(presenters::present_card_state(id, CardAction::Like, state))
}

pub fn save(client: &Client, id: &ReportId, ctx: &HandlerContext) -> Result<()> {
    let state = client.feed().toggle_save(id)?;
    ctx.render(presenters::present_card_state(id, CardAction::Save, state))
}
