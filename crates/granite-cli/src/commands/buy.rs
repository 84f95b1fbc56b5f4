use anyhow::{Context as _, Result};
use clap::Args;
use granite_core::access::Role;
use granite_core::catalog::{BuyRequestLog, BuyerProfile, CatalogStore};

use super::Context;

#[derive(Args)]
pub struct BuyArgs {
    /// Listing id, e.g. mat-0001
    pub id: String,

    /// Buyer email (defaults to the configured buyer)
    #[arg(long)]
    pub email: Option<String>,

    /// Buyer display name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

pub fn run(ctx: &Context, args: &BuyArgs) -> Result<()> {
    let material = ctx.catalog()?.get(&args.id)?;
    let buyer = buyer_profile(ctx, args);

    let path = &ctx.config.requests_path;
    let mut log = BuyRequestLog::open(path)
        .with_context(|| format!("Failed to open buy requests {}", path.display()))?;
    let (request, link) = log.submit(&material, &buyer, &ctx.config.whatsapp_number)?;

    println!("Buy request {} for {}", request.id, material.factory_name);
    println!("Open this link to send it:");
    println!("{link}");
    Ok(())
}

/// Flags override the configured buyer identity field by field.
fn buyer_profile(ctx: &Context, args: &BuyArgs) -> BuyerProfile {
    let base = if ctx.user.role == Role::Buyer {
        ctx.user.buyer_profile()
    } else {
        ctx.config
            .user_with_role(Role::Buyer)
            .map(|u| u.buyer_profile())
            .unwrap_or_default()
    };
    BuyerProfile {
        email: args.email.clone().unwrap_or(base.email),
        display_name: args.name.clone().or(base.display_name),
        company_name: args.company.clone().or(base.company_name),
        phone: args.phone.clone().or(base.phone),
    }
}
