use anyhow::Result;
use clap::Args;
use granite_core::catalog::{remove_material, CatalogStore, MaterialStatus};

use super::Context;
use crate::summary::print_material;

#[derive(Args)]
pub struct SetStatusArgs {
    /// Listing id, e.g. mat-0001
    pub id: String,

    /// New status: available or sold
    pub status: MaterialStatus,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Listing id, e.g. mat-0001
    pub id: String,
}

pub fn set_status(ctx: &Context, args: &SetStatusArgs) -> Result<()> {
    ctx.require_admin()?;
    let mut store = ctx.catalog()?;
    let material = store.set_status(&args.id, args.status)?;
    print_material(&material, "Marked", &ctx.config.currency_symbol);
    Ok(())
}

pub fn delete(ctx: &Context, args: &DeleteArgs) -> Result<()> {
    ctx.require_admin()?;
    let mut store = ctx.catalog()?;
    let mut blobs = ctx.blobs()?;
    let removed = remove_material(&mut store, &mut blobs, &args.id)?;
    println!(
        "Deleted {} ({}, {} photos)",
        removed.id,
        removed.factory_name,
        removed.images.len()
    );
    Ok(())
}
