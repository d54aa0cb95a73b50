use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use relato_sdk::Client;

pub fn sign_up(
    client: &Client,
    email: &str,
    password: &str,
    name: Option<&str>,
    ctx: &HandlerContext,
) -> Result<()> {
    let name = name.unwrap_or_else(|| email.split('@').next().unwrap_or(email));
    let user = client.auth().sign_up(email, password, name)?;
    ctx.render(presenters::present_signed_in(&user, true))
}

pub fn sign_in(client: &Client, email: &str, password: &str, ctx: &HandlerContext) -> Result<()> {
    let user = client.auth().sign_in(email, password)?;
    ctx.render(presenters::present_signed_in(&user, false))
}

pub fn sign_out(client: &Client, ctx: &HandlerContext) -> Result<()> {
    client.auth().sign_out()?;
    ctx.render(presenters::present_signed_out())
}

pub fn whoami(client: &Client, ctx: &HandlerContext) -> Result<()> {
    let user = client.auth().whoami();
    ctx.render(presenters::present_whoami(user.as_ref()))
}
