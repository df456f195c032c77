use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use findmypetapp::commands::profile::ProfileSummary;
use findmypetapp::commands::{CmdMessage, MessageLevel};
use findmypetapp::model::{Listing, ListingKind, ListingStatus, UserBadge};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 8;
const FOLLOW_MARKER: &str = "♥";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn status_label(status: ListingStatus) -> ColoredString {
    let label = format!("{:<width$}", status.as_str(), width = STATUS_WIDTH);
    match status {
        ListingStatus::Active => label.yellow(),
        ListingStatus::Found => label.green(),
        ListingStatus::Stale => label.dimmed(),
    }
}

fn kind_label(kind: ListingKind) -> ColoredString {
    match kind {
        ListingKind::Lost => "LOST    ".red().bold(),
        ListingKind::Sighting => "SIGHTING".cyan().bold(),
    }
}

/// One line per listing: status, kind, summary, address and age of the report.
pub fn print_listings(listings: &[Listing], now: DateTime<Utc>) {
    for listing in listings {
        println!("{}", listing_line(listing, now));
        println!("    {}", listing.id.dimmed());
    }
}

fn listing_line(listing: &Listing, now: DateTime<Utc>) -> String {
    let marker = if listing.is_followed {
        format!("{} ", FOLLOW_MARKER).red().to_string()
    } else {
        "  ".to_string()
    };

    let summary = format!(
        "{} {} · {} · {}",
        listing.animal_type, listing.name, listing.color, listing.location.address
    );
    // marker + kind + status + separating spaces
    let fixed_width = 2 + 8 + 1 + STATUS_WIDTH + 1 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let summary = truncate_to_width(&summary, available);
    let padding = available.saturating_sub(summary.width());

    format!(
        "{}{} {} {}{}{}",
        marker,
        kind_label(listing.kind),
        status_label(listing.status),
        summary,
        " ".repeat(padding),
        format_time_ago(listing.date_reported, now).dimmed()
    )
}

pub fn print_full_listings(listings: &[Listing], now: DateTime<Utc>) {
    for (i, listing) in listings.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        print_full_listing(listing, now);
    }
}

fn print_full_listing(listing: &Listing, now: DateTime<Utc>) {
    let followed = if listing.is_followed {
        format!(" {}", FOLLOW_MARKER).red().to_string()
    } else {
        String::new()
    };
    println!(
        "{} {} {}{}",
        kind_label(listing.kind),
        listing.name.bold(),
        status_label(listing.status),
        followed
    );
    println!("--------------------------------");

    field("Id", &listing.id);
    field("Animal", listing.animal_type.as_str());
    field("Gender", listing.gender().as_str());
    optional_field("Breed", listing.breed.as_deref());
    field("Color", &listing.color);
    optional_field("Age", listing.age.as_deref());
    field(
        "Reported",
        &format!(
            "{} ({})",
            listing.date_reported.format("%Y-%m-%d %H:%M UTC"),
            format_time_ago(listing.date_reported, now).trim()
        ),
    );
    field(
        "Location",
        &format!(
            "{} ({:.4}, {:.4})",
            listing.location.address, listing.location.lat, listing.location.lng
        ),
    );
    optional_field("Contact", listing.contact_info.as_deref());
    for url in listing.images() {
        field("Image", url);
    }
    if let Some(poster) = &listing.posted_by {
        field(
            "Posted by",
            &format!(
                "{} ({} listings, {} reunions)",
                poster.name, poster.listings_count, poster.verifications_count
            ),
        );
    }
    if let Some(description) = &listing.description {
        println!();
        println!("{}", description);
    }
}

fn field(label: &str, value: &str) {
    println!("{:>10}  {}", label.dimmed(), value);
}

fn optional_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        field(label, value);
    }
}

pub fn print_profile(summary: &ProfileSummary) {
    let user = &summary.user;
    let stats = &summary.stats;
    println!("{} {}", format!("[{}]", user.initials()).yellow(), user.name.bold());
    println!(
        "{}",
        format!(
            "Member since {} · {} days active",
            user.joined_date.format("%Y-%m-%d"),
            stats.days_active
        )
        .dimmed()
    );
    println!();
    field("Listings", &stats.listings_count.to_string());
    field("Active", &stats.active_listings.to_string());
    field("Reunions", &stats.verifications_count.to_string());
    field("Sightings", &stats.sightings_reported.to_string());
    field("Following", &stats.followed_pets.to_string());

    println!();
    println!("{}", "Earned badges".bold());
    for badge in summary.earned_badges() {
        println!("  {} {} {}", "✔".green(), badge.name, badge.description.dimmed());
    }
    println!("{}", "In progress".bold());
    for badge in summary.in_progress_badges() {
        println!("  {} {} {}", progress(badge).yellow(), badge.name, badge.description.dimmed());
    }
}

fn progress(badge: &UserBadge) -> String {
    match (badge.progress, badge.requirement) {
        (Some(progress), Some(requirement)) => format!("{}/{}", progress, requirement),
        _ => "…".to_string(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
