use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use granite_core::catalog::{create_material, MaterialDraft, MaterialStatus, PhotoUpload};
use indicatif::{ProgressBar, ProgressStyle};

use super::Context;
use crate::summary::print_material;

#[derive(Args)]
pub struct AddArgs {
    /// Factory the stone comes from
    #[arg(long)]
    pub factory: String,

    /// Owner or contact person
    #[arg(long)]
    pub owner: String,

    /// Owner phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Price per square foot
    #[arg(long)]
    pub rate: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Internal notes, not shown to buyers
    #[arg(long, default_value = "")]
    pub notes: String,

    #[arg(long, default_value = "available")]
    pub status: MaterialStatus,

    /// Photos to upload (at least one)
    pub photos: Vec<PathBuf>,
}

pub fn run(ctx: &Context, args: &AddArgs) -> Result<()> {
    ctx.require_admin()?;

    let draft = MaterialDraft {
        factory_name: args.factory.clone(),
        owner_name: args.owner.clone(),
        owner_phone: args.phone.clone(),
        rate: args.rate.clone(),
        description: args.description.clone(),
        notes: args.notes.clone(),
        status: args.status,
    };
    // Fail on bad input before reading any photo from disk.
    draft.validate(args.photos.len())?;
    let photos = read_photos(&args.photos)?;

    let mut store = ctx.catalog()?;
    let mut blobs = ctx.blobs()?;
    let pb = upload_bar(photos.len())?;
    let material = create_material(
        &mut store,
        &mut blobs,
        &draft,
        &photos,
        &ctx.user.id,
        |done| pb.set_position(done as u64),
    )?;
    pb.finish_with_message("Photos uploaded");

    print_material(&material, "Added", &ctx.config.currency_symbol);
    Ok(())
}

pub(super) fn read_photos(paths: &[PathBuf]) -> Result<Vec<PhotoUpload>> {
    paths
        .iter()
        .map(|p| {
            PhotoUpload::from_path(p)
                .with_context(|| format!("Failed to read photo {}", p.display()))
        })
        .collect()
}

pub(super) fn upload_bar(total: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Uploading photos");
    Ok(pb)
}
