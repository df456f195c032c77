use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "findmypet",
    bin_name = "findmypet",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Report, browse and follow lost pets and sightings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding listings and findmypet.toml
    #[arg(long, global = true, env = "FINDMYPET_DATA_DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Acting user id, recorded as the author of new reports
    #[arg(long, global = true, env = "FINDMYPET_USER", help_heading = "Options")]
    pub user: Option<String>,

    /// Display name of the acting user
    #[arg(long, global = true, env = "FINDMYPET_USER_NAME", help_heading = "Options")]
    pub user_name: Option<String>,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List listings matching the given filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the full details of one or more listings
    #[command(alias = "view")]
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Report a lost pet or a sighting
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// Follow a listing to see it on the followed page
    Follow { id: String },

    /// Stop following a listing
    Unfollow { id: String },

    /// List followed listings, newest first
    Followed,

    /// Set a listing's status (active, found, stale)
    Status { id: String, status: String },

    /// Change fields of a listing
    Update {
        id: String,
        #[command(flatten)]
        fields: ListingFields,
        /// Pet name
        #[arg(long)]
        name: Option<String>,
        /// Animal type
        #[arg(long)]
        animal: Option<String>,
    },

    /// Delete one or more listings
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show a user's stats and badges (defaults to --user)
    Profile { user: Option<String> },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Free-text search over name, address, color and breed
    #[arg(short, long)]
    pub search: Option<String>,

    /// Animal type (dog, cat, bunny, bird, other, all)
    #[arg(short, long)]
    pub animal: Option<String>,

    /// Listing type chip, repeatable (lost, sighting)
    #[arg(short = 't', long = "type")]
    pub kinds: Vec<String>,

    /// Status chip, repeatable (active, found, stale)
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Newest reports first
    #[arg(short, long)]
    pub recent: bool,

    /// Only followed listings
    #[arg(short, long)]
    pub followed: bool,

    /// Breed contains
    #[arg(long, help_heading = "Advanced filters")]
    pub breed: Option<String>,

    /// Address contains
    #[arg(long, help_heading = "Advanced filters")]
    pub location: Option<String>,

    /// Gender (male, female, unknown)
    #[arg(long, help_heading = "Advanced filters")]
    pub gender: Option<String>,

    /// Reported within (today, week, month, 3months)
    #[arg(long, help_heading = "Advanced filters")]
    pub date: Option<String>,

    /// Age group (puppy, young, adult, senior)
    #[arg(long, help_heading = "Advanced filters")]
    pub age: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ReportKind {
    /// Report a pet you lost
    Lost {
        /// Pet name
        #[arg(long)]
        name: String,
        /// Animal type (dog, cat, bunny, bird, other)
        #[arg(long)]
        animal: String,
        #[command(flatten)]
        fields: ListingFields,
    },
    /// Report an animal you spotted
    Sighting {
        /// Pet name, if known
        #[arg(long)]
        name: Option<String>,
        /// Animal type (dog, cat, bunny, bird, other)
        #[arg(long)]
        animal: String,
        #[command(flatten)]
        fields: ListingFields,
    },
}

/// Optional listing attributes shared by `report` and `update`.
#[derive(Args, Debug, Default)]
pub struct ListingFields {
    /// Coat color
    #[arg(long)]
    pub color: Option<String>,

    /// Where the pet was lost or seen
    #[arg(long)]
    pub address: Option<String>,

    /// Latitude of the address
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the address
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Gender (male, female, unknown)
    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub breed: Option<String>,

    /// Free-text age, e.g. "3 years"
    #[arg(long)]
    pub age: Option<String>,

    /// When it happened: RFC 3339 or YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Up to 300 characters
    #[arg(short, long)]
    pub description: Option<String>,

    /// How to reach the reporter
    #[arg(long)]
    pub contact: Option<String>,

    /// Image URL, repeatable (up to 4)
    #[arg(long = "image")]
    pub images: Vec<String>,
}
