use super::HandlerContext;
use crate::args::EntryList;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use relato_sdk::types::ReportId;
use relato_sdk::{Client, DraftFile};
use std::path::Path;

pub fn template(client: &Client, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_template(client.reports().template()))
}

pub fn create(client: &Client, file: &Path, ctx: &HandlerContext) -> Result<()> {
    let draft = DraftFile::load(file)?;
    let result = client.reports().create_from_draft(&draft)?;
    ctx.render(presenters::present_draft_saved(result, true))
}

pub fn edit(client: &Client, id: &ReportId, file: &Path, ctx: &HandlerContext) -> Result<()> {
    let draft = DraftFile::load(file)?;
    let result = client.reports().update_from_draft(id, &draft)?;
    ctx.render(presenters::present_draft_saved(result, false))
}

pub fn show(client: &Client, id: &ReportId, ctx: &HandlerContext) -> Result<()> {
    let detail = client.reports().show(id)?;
    ctx.render(presenters::present_report_detail(detail))
}

pub fn order(client: &Client, id: &ReportId, ctx: &HandlerContext) -> Result<()> {
    let view = client.reports().order(id)?;
    ctx.render(presenters::present_order(id, view, None))
}

pub fn move_section(
    client: &Client,
    id: &ReportId,
    from: usize,
    to: usize,
    ctx: &HandlerContext,
) -> Result<()> {
    let view = client.reports().move_section(id, from, to)?;
    ctx.render(presenters::present_order(id, view, Some((from, to))))
}

pub fn attach(
    client: &Client,
    id: &ReportId,
    section: &str,
    image: &Path,
    ctx: &HandlerContext,
) -> Result<()> {
    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;
    let url = client.reports().attach_image(id, section, &bytes)?;
    ctx.render(presenters::present_image_attached(id, section, url))
}

pub fn detach(
    client: &Client,
    id: &ReportId,
    section: &str,
    index: usize,
    ctx: &HandlerContext,
) -> Result<()> {
    let remaining = client.reports().remove_image(id, section, index)?;
    ctx.render(presenters::present_image_removed(id, section, remaining))
}

pub fn remove(
    client: &Client,
    id: &ReportId,
    list: EntryList,
    index: usize,
    ctx: &HandlerContext,
) -> Result<()> {
    let report = client.reports().remove_entry(id, list.into(), index)?;
    ctx.render(presenters::present_entry_removed(&report, list, index))
}

pub fn delete(client: &Client, id: &ReportId, ctx: &HandlerContext) -> Result<()> {
    client.reports().delete(id)?;
    ctx.render(presenters::present_report_deleted(id))
}
