use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use relato_sdk::Client;
use std::path::Path;

pub fn show(client: &Client, ctx: &HandlerContext) -> Result<()> {
    let summary = client.profile().me()?;
    ctx.render(presenters::present_profile(summary))
}

pub fn saved(client: &Client, ctx: &HandlerContext) -> Result<()> {
    let saved = client.profile().saved()?;
    ctx.render(presenters::present_saved(saved))
}

pub fn avatar(client: &Client, image: &Path, ctx: &HandlerContext) -> Result<()> {
    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;
    let url = client.profile().upload_avatar(&bytes)?;
    ctx.render(presenters::present_avatar(url))
}
