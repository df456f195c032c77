//! Author profiles, statistics and badges.
//!
//! Statistics are derived from the store contents rather than kept as counters, so
//! they are always consistent with what the author has posted. The [`PosterInfo`]
//! attached to a new listing is a snapshot of these numbers at reporting time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{BadgeIcon, Listing, ListingKind, ListingStatus, PosterInfo, UserBadge};
use crate::store::DataStore;

/// The signed-in author, as known to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub joined_date: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, joined_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: String::new(),
            joined_date,
        }
    }

    /// A profile for a user known only by id. The join date is their earliest
    /// report in `listings`, or `now` when they have none.
    pub fn inferred(id: &str, name: Option<&str>, listings: &[Listing], now: DateTime<Utc>) -> Self {
        let joined_date = listings
            .iter()
            .filter(|l| l.created_by.as_deref() == Some(id))
            .map(|l| l.date_reported)
            .min()
            .map_or(now, |earliest| earliest.min(now));
        Self::new(id, name.unwrap_or(id), joined_date)
    }

    /// Up to two uppercase initials, e.g. "Jane Doe" -> "JD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub listings_count: u32,
    pub active_listings: u32,
    /// Listings by the author that ended in a reunion.
    pub verifications_count: u32,
    pub sightings_reported: u32,
    pub followed_pets: u32,
    pub days_active: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub user: UserProfile,
    pub stats: ProfileStats,
    pub badges: Vec<UserBadge>,
}

impl ProfileSummary {
    pub fn earned_badges(&self) -> impl Iterator<Item = &UserBadge> {
        self.badges.iter().filter(|b| b.earned)
    }

    pub fn in_progress_badges(&self) -> impl Iterator<Item = &UserBadge> {
        self.badges.iter().filter(|b| !b.earned)
    }
}

fn count(listings: &[Listing], pred: impl Fn(&Listing) -> bool) -> u32 {
    listings.iter().filter(|l| pred(l)).count() as u32
}

/// Derives the author's statistics. Followed pets are counted over the whole
/// collection since following is local to this device.
pub fn compute_stats(user: &UserProfile, listings: &[Listing], now: DateTime<Utc>) -> ProfileStats {
    let authored: Vec<Listing> = listings
        .iter()
        .filter(|l| l.created_by.as_deref() == Some(user.id.as_str()))
        .cloned()
        .collect();

    let days_active = (now - user.joined_date).num_days().max(0);

    ProfileStats {
        listings_count: authored.len() as u32,
        active_listings: count(&authored, |l| l.status == ListingStatus::Active),
        verifications_count: count(&authored, |l| l.status == ListingStatus::Found),
        sightings_reported: count(&authored, |l| l.kind == ListingKind::Sighting),
        followed_pets: count(listings, |l| l.is_followed),
        days_active: u32::try_from(days_active).unwrap_or(u32::MAX),
    }
}

struct BadgeRule {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: BadgeIcon,
    color: &'static str,
    requirement: u32,
    metric: fn(&ProfileStats) -> u32,
}

/// Catalogue of all badges, in display order. Adding a badge means adding an entry here.
const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        id: "first-listing",
        name: "First Step",
        description: "Created your first listing",
        icon: BadgeIcon::Star,
        color: "from-yellow-400 to-orange-400",
        requirement: 1,
        metric: |s| s.listings_count,
    },
    BadgeRule {
        id: "helper-5",
        name: "Community Helper",
        description: "Helped 5 people find their pets",
        icon: BadgeIcon::Heart,
        color: "from-pink-400 to-rose-400",
        requirement: 5,
        metric: |s| s.verifications_count,
    },
    BadgeRule {
        id: "helper-10",
        name: "Guardian Angel",
        description: "Helped 10 people find their pets",
        icon: BadgeIcon::Trophy,
        color: "from-purple-400 to-indigo-400",
        requirement: 10,
        metric: |s| s.verifications_count,
    },
    BadgeRule {
        id: "sighter-5",
        name: "Eagle Eye",
        description: "Reported 5 sightings",
        icon: BadgeIcon::MapPin,
        color: "from-blue-400 to-cyan-400",
        requirement: 5,
        metric: |s| s.sightings_reported,
    },
    BadgeRule {
        id: "sighter-10",
        name: "Neighborhood Watch",
        description: "Reported 10 sightings",
        icon: BadgeIcon::Target,
        color: "from-green-400 to-emerald-400",
        requirement: 10,
        metric: |s| s.sightings_reported,
    },
    BadgeRule {
        id: "active-30",
        name: "Dedicated Member",
        description: "Active for 30 days",
        icon: BadgeIcon::Zap,
        color: "from-amber-400 to-yellow-400",
        requirement: 30,
        metric: |s| s.days_active,
    },
    BadgeRule {
        id: "follower-10",
        name: "Pet Advocate",
        description: "Following 10 pets",
        icon: BadgeIcon::Users,
        color: "from-teal-400 to-cyan-400",
        requirement: 10,
        metric: |s| s.followed_pets,
    },
    BadgeRule {
        id: "reunion",
        name: "Reunion Hero",
        description: "Helped reunite a pet with their family",
        icon: BadgeIcon::CheckCircle2,
        color: "from-green-500 to-emerald-500",
        requirement: 1,
        metric: |s| s.verifications_count,
    },
];

/// Evaluates the full badge catalogue against `stats`, in catalogue order.
pub fn badges_for(stats: &ProfileStats) -> Vec<UserBadge> {
    BADGE_RULES
        .iter()
        .map(|rule| {
            let progress = (rule.metric)(stats);
            UserBadge {
                id: rule.id.to_string(),
                name: rule.name.to_string(),
                description: rule.description.to_string(),
                earned: progress >= rule.requirement,
                progress: Some(progress),
                requirement: Some(rule.requirement),
                color: rule.color.to_string(),
                icon: rule.icon,
            }
        })
        .collect()
}

/// The snapshot embedded in a listing's `postedBy`. Only earned badges are kept.
pub fn poster_info(user: &UserProfile, stats: &ProfileStats) -> PosterInfo {
    PosterInfo {
        name: user.name.clone(),
        avatar: user.avatar.clone(),
        joined_date: user.joined_date,
        listings_count: stats.listings_count,
        verifications_count: stats.verifications_count,
        active_listings: stats.active_listings,
        sightings_reported: stats.sightings_reported,
        followed_pets: stats.followed_pets,
        days_active: stats.days_active,
        badges: badges_for(stats).into_iter().filter(|b| b.earned).collect(),
    }
}

pub fn summarize(user: &UserProfile, listings: &[Listing], now: DateTime<Utc>) -> ProfileSummary {
    let stats = compute_stats(user, listings, now);
    ProfileSummary {
        user: user.clone(),
        badges: badges_for(&stats),
        stats,
    }
}

pub fn run<S: DataStore>(store: &S, user: &UserProfile, now: DateTime<Utc>) -> Result<CmdResult> {
    let listings = store.get_all();
    let summary = summarize(user, &listings, now);

    let authored = listings
        .into_iter()
        .filter(|l| l.created_by.as_deref() == Some(user.id.as_str()))
        .collect();

    Ok(CmdResult::default()
        .with_listed_listings(authored)
        .with_profile(summary))
}
