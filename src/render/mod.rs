//! HTML rendering and static site output.

pub mod outline;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use askama::Template;
use chrono::{DateTime, Utc};
use kjv_core::Millis;
use serde::Serialize;

use crate::assembly::{self, SectionKind, SectionPlan};
use crate::content::about::{self, HERO_BACKGROUND_URL, HERO_BADGE, HERO_LEAD};
use crate::content::academics::{self, JourneyStage, Stream};
use crate::content::activities::{self, ActivityCategory, Event, Trip};
use crate::content::campus::{self, Achievement, Milestone};
use crate::content::school::{self, ContactItem, NavLink, PrincipalMessage, School, SocialLink};
use crate::content::{self, ContentError, ContentSnapshot, InfoCard, SectionHeading, Stat};

pub const SITE_JS: &str = include_str!("../../assets/site.js");
pub const SITE_CSS: &str = include_str!("../../assets/site.css");

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid content: {0}")]
    Content(#[from] ContentError),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("template reveals `{0}`, which no section plan defines")]
pub struct UnknownRevealKey(pub String);

/// Reveal parameters of one cell, written out as `data-reveal-*` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealAttrs {
    pub key: String,
    pub mode: &'static str,
    pub delay: Millis,
}

impl fmt::Display for RevealAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"data-reveal="{}" data-reveal-delay="{}" data-reveal-key="{}""#,
            self.mode, self.delay, self.key
        )
    }
}

/// Index every revealing cell of the plan by key.
pub fn reveal_index(plans: &[SectionPlan]) -> HashMap<String, RevealAttrs> {
    plans
        .iter()
        .flat_map(|plan| plan.cells())
        .filter_map(|cell| {
            let reveal = cell.reveal?;
            Some((
                cell.key.clone(),
                RevealAttrs {
                    key: cell.key.clone(),
                    mode: reveal.mode(),
                    delay: reveal.delay,
                },
            ))
        })
        .collect()
}

/// Keep only links whose anchor exists on the page.
fn present_links(links: &[NavLink], anchors: &[&str]) -> Vec<NavLink> {
    links
        .iter()
        .filter(|link| anchors.contains(&link.anchor()))
        .copied()
        .collect()
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    school: School,
    sections: Vec<SectionKind>,
    nav_links: Vec<NavLink>,
    quick_links: Vec<NavLink>,
    social_links: &'static [SocialLink],
    hero_background: &'static str,
    hero_badge: &'static str,
    hero_lead: &'static str,
    hero_stats: &'static [Stat],
    about_heading: SectionHeading,
    about_markers: &'static [Stat],
    about_facts: &'static [InfoCard],
    principal: PrincipalMessage,
    hs_principal: PrincipalMessage,
    journey_heading: SectionHeading,
    journey_stages: &'static [JourneyStage],
    journey_highlights: &'static [Stat],
    programs_heading: SectionHeading,
    streams: &'static [Stream],
    general_subjects: &'static [&'static str],
    admissions_title: &'static str,
    admissions_note: &'static str,
    facilities_heading: SectionHeading,
    facilities: &'static [InfoCard],
    achievements_heading: SectionHeading,
    achievement_stats: &'static [Stat],
    achievements: &'static [Achievement],
    activities_heading: SectionHeading,
    activities: &'static [ActivityCategory],
    trips_heading: SectionHeading,
    trip_stats: &'static [Stat],
    trips: &'static [Trip],
    events_heading: SectionHeading,
    events: &'static [Event],
    timeline_heading: SectionHeading,
    milestones: &'static [Milestone],
    contact_heading: SectionHeading,
    contact_items: &'static [ContactItem],
    contact_notice: &'static str,
    reveals: HashMap<String, RevealAttrs>,
}

impl PageTemplate {
    pub fn new(plans: &[SectionPlan]) -> Self {
        let anchors: Vec<&str> = plans.iter().map(|p| p.anchor).collect();

        Self {
            school: school::SCHOOL,
            sections: plans.iter().map(|p| p.kind).collect(),
            nav_links: present_links(school::NAV_LINKS, &anchors),
            quick_links: present_links(school::QUICK_LINKS, &anchors),
            social_links: school::SOCIAL_LINKS,
            hero_background: HERO_BACKGROUND_URL,
            hero_badge: HERO_BADGE,
            hero_lead: HERO_LEAD,
            hero_stats: about::HERO_STATS,
            about_heading: about::ABOUT_HEADING,
            about_markers: about::MARKERS,
            about_facts: about::FACTS,
            principal: school::PRINCIPAL_MESSAGE,
            hs_principal: school::HS_PRINCIPAL_MESSAGE,
            journey_heading: academics::JOURNEY_HEADING,
            journey_stages: academics::JOURNEY_STAGES,
            journey_highlights: academics::JOURNEY_HIGHLIGHTS,
            programs_heading: academics::PROGRAMS_HEADING,
            streams: academics::STREAMS,
            general_subjects: academics::GENERAL_SUBJECTS,
            admissions_title: academics::ADMISSIONS_TITLE,
            admissions_note: academics::ADMISSIONS_NOTE,
            facilities_heading: campus::FACILITIES_HEADING,
            facilities: campus::FACILITIES,
            achievements_heading: campus::ACHIEVEMENTS_HEADING,
            achievement_stats: campus::ACHIEVEMENT_STATS,
            achievements: campus::ACHIEVEMENTS,
            activities_heading: activities::ACTIVITIES_HEADING,
            activities: activities::ACTIVITY_CATEGORIES,
            trips_heading: activities::TRIPS_HEADING,
            trip_stats: activities::TRIP_STATS,
            trips: activities::TRIPS,
            events_heading: activities::EVENTS_HEADING,
            events: activities::EVENTS,
            timeline_heading: campus::TIMELINE_HEADING,
            milestones: campus::MILESTONES,
            contact_heading: school::CONTACT_HEADING,
            contact_items: school::CONTACT_ITEMS,
            contact_notice: school::CONTACT_FORM_NOTICE,
            reveals: reveal_index(plans),
        }
    }

    /// Attributes for the cell `key`. A key the plan does not reveal fails
    /// the render.
    fn reveal(&self, key: &str) -> Result<String, UnknownRevealKey> {
        self.reveals
            .get(key)
            .map(ToString::to_string)
            .ok_or_else(|| UnknownRevealKey(key.to_string()))
    }

    /// Attributes for the cell `{prefix}.{suffix}`.
    fn reveal_at(&self, prefix: &str, suffix: impl fmt::Display) -> Result<String, UnknownRevealKey> {
        self.reveal(&format!("{prefix}.{suffix}"))
    }
}

/// The rendered page plus when it was produced.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub index_html: String,
    pub generated_at: DateTime<Utc>,
}

/// Validate content and render the full page.
pub fn render_page() -> Result<RenderedSite, RenderError> {
    content::validate()?;
    let plans = assembly::page_plan();
    let index_html = PageTemplate::new(&plans).render()?;
    tracing::debug!(bytes = index_html.len(), sections = plans.len(), "page rendered");
    Ok(RenderedSite {
        index_html,
        generated_at: Utc::now(),
    })
}

/// Machine-readable companion to `index.html`.
#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<SectionPlan>,
    pub content: ContentSnapshot,
}

/// Render the site and write it under `out_dir`. Returns the written paths.
pub fn write_site(out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let site = render_page().context("Failed to render page")?;

    let assets = out_dir.join("assets");
    std::fs::create_dir_all(&assets)
        .with_context(|| format!("Failed to create {}", assets.display()))?;

    let manifest = SiteManifest {
        generated_at: site.generated_at,
        sections: assembly::page_plan(),
        content: content::snapshot(),
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)?;

    let files = [
        (out_dir.join("index.html"), site.index_html.as_str()),
        (assets.join("site.js"), SITE_JS),
        (assets.join("site.css"), SITE_CSS),
        (out_dir.join("site.json"), manifest_json.as_str()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, body) in files {
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote");
        written.push(path);
    }

    Ok(written)
}
