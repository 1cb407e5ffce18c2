//! Static content for the Kenduguri Jatiya Vidyalaya site.
//!
//! Everything here is immutable configuration data: literal text, image URLs
//! and icon names baked into the page. Nothing is mutated at runtime; the
//! renderer and the section planner both read these constants.
//!
//! - [`school`]: identity, navigation, principal messages, contact, footer.
//! - [`about`]: hero statistics and the about section.
//! - [`academics`]: student journey and academic programs.
//! - [`activities`]: co-curricular activities, field trips, events.
//! - [`campus`]: facilities, achievements, timeline milestones.

pub mod about;
pub mod academics;
pub mod activities;
pub mod campus;
pub mod school;

use std::fmt;

use serde::Serialize;

/// Named glyph from the icon provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    Baby,
    Beaker,
    BookOpen,
    Building,
    Calendar,
    Camera,
    ChevronDown,
    Clock,
    Droplets,
    Facebook,
    Flag,
    FlaskConical,
    GraduationCap,
    Instagram,
    Leaf,
    Mail,
    MapPin,
    Medal,
    Menu,
    MonitorPlay,
    Music,
    Palette,
    Phone,
    Quote,
    Rocket,
    Send,
    ShieldCheck,
    Star,
    Trophy,
    Twitter,
    Users,
    Wifi,
    X,
    Youtube,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Baby => "baby",
            Self::Beaker => "beaker",
            Self::BookOpen => "book-open",
            Self::Building => "building",
            Self::Calendar => "calendar",
            Self::Camera => "camera",
            Self::ChevronDown => "chevron-down",
            Self::Clock => "clock",
            Self::Droplets => "droplets",
            Self::Facebook => "facebook",
            Self::Flag => "flag",
            Self::FlaskConical => "flask-conical",
            Self::GraduationCap => "graduation-cap",
            Self::Instagram => "instagram",
            Self::Leaf => "leaf",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Medal => "medal",
            Self::Menu => "menu",
            Self::MonitorPlay => "monitor-play",
            Self::Music => "music",
            Self::Palette => "palette",
            Self::Phone => "phone",
            Self::Quote => "quote",
            Self::Rocket => "rocket",
            Self::Send => "send",
            Self::ShieldCheck => "shield-check",
            Self::Star => "star",
            Self::Trophy => "trophy",
            Self::Twitter => "twitter",
            Self::Users => "users",
            Self::Wifi => "wifi",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The badge, title and lead paragraph that open most sections.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Trailing part of the title set in the accent color.
    pub highlight: &'static str,
    pub lead: &'static str,
}

/// A figure with a caption, optionally with an icon.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub icon: Option<Icon>,
    pub value: &'static str,
    pub label: &'static str,
}

/// An icon card with a title and a short description.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ContentError {
    #[error("{section}: image URL `{url}` is not a valid https URL")]
    InvalidImageUrl { section: &'static str, url: &'static str },
    #[error("{section}: `{value}` appears more than once")]
    Duplicate { section: &'static str, value: &'static str },
}

/// Every image URL on the page, tagged with the section that shows it.
pub fn image_urls() -> Vec<(&'static str, &'static str)> {
    let mut urls = vec![("hero", about::HERO_BACKGROUND_URL)];
    urls.extend(
        [school::PRINCIPAL_MESSAGE, school::HS_PRINCIPAL_MESSAGE]
            .iter()
            .map(|m| ("principal-message", m.photo_url)),
    );
    urls.extend(activities::TRIPS.iter().map(|t| ("field-trips", t.image)));
    urls.extend(activities::EVENTS.iter().map(|e| ("events", e.image)));
    urls.extend(campus::ACHIEVEMENTS.iter().map(|a| ("achievements", a.image)));
    urls
}

/// Check that an image URL can be placed in an attribute and fetched as is.
pub fn is_valid_image_url(url: &str) -> bool {
    url.starts_with("https://")
        && url.len() > "https://".len()
        && !url
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '<' | '>' | '\'' | '`'))
}

/// Validate the static content before it is rendered or served.
pub fn validate() -> Result<(), ContentError> {
    for (section, url) in image_urls() {
        if !is_valid_image_url(url) {
            return Err(ContentError::InvalidImageUrl { section, url });
        }
    }

    let mut hrefs = std::collections::HashSet::new();
    for link in school::NAV_LINKS {
        if !hrefs.insert(link.href) {
            return Err(ContentError::Duplicate {
                section: "navbar",
                value: link.href,
            });
        }
    }

    let mut years = std::collections::HashSet::new();
    for milestone in campus::MILESTONES {
        if !years.insert(milestone.year) {
            return Err(ContentError::Duplicate {
                section: "timeline",
                value: milestone.year,
            });
        }
    }

    Ok(())
}

/// All content in one serializable value, as exposed by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSnapshot {
    pub school: school::School,
    pub nav_links: &'static [school::NavLink],
    pub hero_stats: &'static [Stat],
    pub about_facts: &'static [InfoCard],
    pub about_markers: &'static [Stat],
    pub principal_messages: [school::PrincipalMessage; 2],
    pub journey_stages: &'static [academics::JourneyStage],
    pub journey_highlights: &'static [Stat],
    pub streams: &'static [academics::Stream],
    pub general_subjects: &'static [&'static str],
    pub facilities: &'static [InfoCard],
    pub achievement_stats: &'static [Stat],
    pub achievements: &'static [campus::Achievement],
    pub activities: &'static [activities::ActivityCategory],
    pub trip_stats: &'static [Stat],
    pub trips: &'static [activities::Trip],
    pub events: &'static [activities::Event],
    pub milestones: &'static [campus::Milestone],
    pub contact: &'static [school::ContactItem],
    pub quick_links: &'static [school::NavLink],
    pub social_links: &'static [school::SocialLink],
}

pub fn snapshot() -> ContentSnapshot {
    ContentSnapshot {
        school: school::SCHOOL,
        nav_links: school::NAV_LINKS,
        hero_stats: about::HERO_STATS,
        about_facts: about::FACTS,
        about_markers: about::MARKERS,
        principal_messages: [school::PRINCIPAL_MESSAGE, school::HS_PRINCIPAL_MESSAGE],
        journey_stages: academics::JOURNEY_STAGES,
        journey_highlights: academics::JOURNEY_HIGHLIGHTS,
        streams: academics::STREAMS,
        general_subjects: academics::GENERAL_SUBJECTS,
        facilities: campus::FACILITIES,
        achievement_stats: campus::ACHIEVEMENT_STATS,
        achievements: campus::ACHIEVEMENTS,
        activities: activities::ACTIVITY_CATEGORIES,
        trip_stats: activities::TRIP_STATS,
        trips: activities::TRIPS,
        events: activities::EVENTS,
        milestones: campus::MILESTONES,
        contact: school::CONTACT_ITEMS,
        quick_links: school::QUICK_LINKS,
        social_links: school::SOCIAL_LINKS,
    }
}
