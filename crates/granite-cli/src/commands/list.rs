use anyhow::Result;
use clap::Args;
use granite_core::catalog::{list_view, CatalogStats, CatalogStore, StatusFilter};

use super::Context;
use crate::summary::{print_material_table, print_stats};

#[derive(Args)]
pub struct ListArgs {
    /// Status filter: all, available or sold (defaults to the configured filter)
    #[arg(long)]
    pub status: Option<StatusFilter>,
}

pub fn run(ctx: &Context, args: &ListArgs) -> Result<()> {
    let filter = args.status.unwrap_or(ctx.config.default_filter);
    let rows = list_view(&ctx.catalog()?.list(), filter);
    print_material_table(&rows, filter, &ctx.config.currency_symbol);
    Ok(())
}

pub fn stats(ctx: &Context) -> Result<()> {
    ctx.require_admin()?;
    let stats = CatalogStats::compute(&ctx.catalog()?.list());
    print_stats(&stats);
    Ok(())
}
