use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use granite_core::catalog::{edit_material, CatalogStore, MaterialDraft, MaterialStatus};

use super::add::{read_photos, upload_bar};
use super::Context;
use crate::summary::print_material;

#[derive(Args)]
pub struct EditArgs {
    /// Listing id, e.g. mat-0001
    pub id: String,

    #[arg(long)]
    pub factory: Option<String>,

    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub rate: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub status: Option<MaterialStatus>,

    /// Photos to append to the listing
    pub photos: Vec<PathBuf>,
}

pub fn run(ctx: &Context, args: &EditArgs) -> Result<()> {
    ctx.require_admin()?;

    let mut store = ctx.catalog()?;
    let existing = store.get(&args.id)?;
    let draft = apply_edits(MaterialDraft::from_material(&existing), args);
    draft.validate(existing.images.len() + args.photos.len())?;
    let photos = read_photos(&args.photos)?;

    let mut blobs = ctx.blobs()?;
    let pb = upload_bar(photos.len())?;
    let material = edit_material(
        &mut store,
        &mut blobs,
        &args.id,
        &draft,
        &photos,
        |done| pb.set_position(done as u64),
    )?;
    pb.finish_and_clear();

    print_material(&material, "Updated", &ctx.config.currency_symbol);
    Ok(())
}

fn apply_edits(mut draft: MaterialDraft, args: &EditArgs) -> MaterialDraft {
    let fields = [
        (&mut draft.factory_name, &args.factory),
        (&mut draft.owner_name, &args.owner),
        (&mut draft.owner_phone, &args.phone),
        (&mut draft.rate, &args.rate),
        (&mut draft.description, &args.description),
        (&mut draft.notes, &args.notes),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
    draft
}
