//! # CLI Layer
//!
//! This module is **one possible UI client** for findmypet, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory and open the API
//! 3. **API Dispatch**: Call the appropriate `FindMyPetApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//!
//! Raw filter values go through `filter::choice`, the same way a UI dropdown would:
//! `all` or an unknown value simply leaves that filter off. Values that describe a
//! listing (report, update, status) are parsed strictly and rejected when invalid.

use super::render::{print_full_listings, print_listings, print_messages, print_profile};
use super::setup::{Cli, Commands, ListArgs, ListingFields, ReportKind};
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use findmypetapp::api::FindMyPetApi;
use findmypetapp::commands::profile::UserProfile;
use findmypetapp::commands::report::NewListing;
use findmypetapp::commands::CmdResult;
use findmypetapp::config::default_data_dir;
use findmypetapp::filter::{choice, AdvancedFilters, Query};
use findmypetapp::model::{AnimalType, Gender, ListingKind, ListingPatch, ListingStatus, Location};
use findmypetapp::store::listing_store::FileStore;
use findmypetapp::store::DataStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: FindMyPetApi<FileStore>,
    user: Option<String>,
    user_name: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, &args),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::Report { kind }) => handle_report(&mut ctx, kind),
        Some(Commands::Follow { id }) => output(ctx.api.follow(&id)?),
        Some(Commands::Unfollow { id }) => output(ctx.api.unfollow(&id)?),
        Some(Commands::Followed) => handle_followed(&ctx),
        Some(Commands::Status { id, status }) => {
            let status: ListingStatus = status.parse()?;
            output(ctx.api.set_status(&id, status)?)
        }
        Some(Commands::Update {
            id,
            fields,
            name,
            animal,
        }) => handle_update(&mut ctx, &id, fields, name, animal),
        Some(Commands::Delete { ids }) => output(ctx.api.delete(&ids)?),
        Some(Commands::Profile { user }) => handle_profile(&ctx, user),
        None => handle_list(&ctx, &ListArgs::default()),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()
            .ok_or_else(|| anyhow!("Could not determine a data directory, pass --data-dir"))?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
    let api = open_api(data_dir)?;

    Ok(AppContext {
        api,
        user: cli.user.clone(),
        user_name: cli.user_name.clone(),
    })
}

fn open_api(data_dir: PathBuf) -> Result<FindMyPetApi<FileStore>> {
    FindMyPetApi::open(&data_dir)
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))
}

fn output(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn build_query(args: &ListArgs) -> Query {
    let mut query = Query::new();
    query.search_text = args.search.clone();
    query.animal_type = args.animal.as_deref().and_then(choice::<AnimalType>);
    query.type_toggles = args
        .kinds
        .iter()
        .filter_map(|k| choice::<ListingKind>(k))
        .collect();
    query.status_toggles = args
        .statuses
        .iter()
        .filter_map(|s| choice::<ListingStatus>(s))
        .collect();
    query.sort_recent = args.recent;
    query.followed_only = args.followed;
    query.advanced = AdvancedFilters {
        breed: args.breed.clone(),
        location: args.location.clone(),
        gender: args.gender.as_deref().and_then(choice::<Gender>),
        date_range: args.date.as_deref().and_then(choice),
        age_range: args.age.as_deref().and_then(choice),
    };
    query
}

fn handle_list(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let query = build_query(args);
    let result = ctx.api.list(&query)?;
    print_listings(&result.listed_listings, Utc::now());
    print_messages(&result.messages);
    Ok(())
}

fn handle_followed(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.followed()?;
    if result.listed_listings.is_empty() {
        println!("You are not following any listings.");
        return Ok(());
    }
    print_listings(&result.listed_listings, Utc::now());
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.view(ids)?;
    print_full_listings(&result.listed_listings, Utc::now());
    Ok(())
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', use YYYY-MM-DD or RFC 3339", raw))?;
    day.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow!("Invalid date '{}'", raw))
}

fn location(fields: &ListingFields) -> Result<Location> {
    let Some(address) = fields.address.as_deref().filter(|a| !a.trim().is_empty()) else {
        bail!("--address is required");
    };
    Ok(Location::new(
        address.trim(),
        fields.lat.unwrap_or_default(),
        fields.lng.unwrap_or_default(),
    ))
}

fn handle_report(ctx: &mut AppContext, kind: ReportKind) -> Result<()> {
    let (mut draft, fields) = match kind {
        ReportKind::Lost {
            name,
            animal,
            fields,
        } => {
            let animal: AnimalType = animal.parse()?;
            let color = fields.color.clone().unwrap_or_default();
            (NewListing::lost(name, animal, color, location(&fields)?), fields)
        }
        ReportKind::Sighting {
            name,
            animal,
            fields,
        } => {
            let animal: AnimalType = animal.parse()?;
            let color = fields.color.clone().unwrap_or_default();
            let mut draft = NewListing::sighting(animal, color, location(&fields)?);
            draft.name = name.unwrap_or_default();
            (draft, fields)
        }
    };

    draft.gender = fields.gender.as_deref().map(str::parse::<Gender>).transpose()?;
    draft.breed = fields.breed;
    draft.age = fields.age;
    draft.date_reported = fields.date.as_deref().map(parse_date).transpose()?;
    draft.description = fields.description;
    draft.contact_info = fields.contact;
    draft.image_urls = fields.images;

    let author = acting_user(ctx, None);
    let result = ctx.api.report(draft, author.as_ref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    fields: ListingFields,
    name: Option<String>,
    animal: Option<String>,
) -> Result<()> {
    let location = match (&fields.address, fields.lat, fields.lng) {
        (None, None, None) => None,
        _ => {
            let current = ctx.api.view(&[id])?;
            let existing = current
                .listed_listings
                .first()
                .map(|l| l.location.clone())
                .ok_or_else(|| anyhow!("Listing not found: {}", id))?;
            Some(Location::new(
                fields.address.clone().unwrap_or(existing.address),
                fields.lat.unwrap_or(existing.lat),
                fields.lng.unwrap_or(existing.lng),
            ))
        }
    };

    let patch = ListingPatch {
        name,
        animal_type: animal.as_deref().map(str::parse::<AnimalType>).transpose()?,
        gender: fields.gender.as_deref().map(str::parse::<Gender>).transpose()?,
        breed: fields.breed,
        color: fields.color,
        age: fields.age,
        date_reported: fields.date.as_deref().map(parse_date).transpose()?,
        location,
        image_urls: (!fields.images.is_empty()).then_some(fields.images),
        description: fields.description,
        contact_info: fields.contact,
        ..Default::default()
    };

    output(ctx.api.update(id, &patch)?)
}

/// The acting user, with a join date inferred from their earlier reports.
fn acting_user(ctx: &AppContext, id: Option<String>) -> Option<UserProfile> {
    let id = id.or_else(|| ctx.user.clone())?;
    let listings = ctx.api.store().get_all();
    Some(UserProfile::inferred(
        &id,
        ctx.user_name.as_deref(),
        &listings,
        Utc::now(),
    ))
}

fn handle_profile(ctx: &AppContext, user: Option<String>) -> Result<()> {
    let Some(user) = acting_user(ctx, user) else {
        bail!("No user given, pass a user id or --user");
    };
    let result = ctx.api.profile(&user)?;
    if let Some(summary) = &result.profile {
        print_profile(summary);
    }
    if !result.listed_listings.is_empty() {
        println!();
        print_listings(&result.listed_listings, Utc::now());
    }
    Ok(())
}
