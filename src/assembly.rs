//! Page assembly: which sections appear, in what order, and how each of
//! their parts is revealed.
//!
//! A [`SectionPlan`] lists a section's blocks; a block is a grid of cells and
//! a cell may carry a [`CellReveal`]. The renderer reads the same plans to
//! emit `data-reveal-*` attributes, and [`mount_page`] feeds them to a
//! [`PageRuntime`], so the browser and the model share one description.

use kjv_core::{Millis, PageRuntime, RevealRecord, RevealTrigger, RuntimeError, SectionId, Viewport};
use serde::Serialize;

use crate::content::{about, academics, activities, campus};
use crate::layout;

/// Stagger between sibling cards in most grids.
pub const CARD_STAGGER_MS: Millis = 100;
/// Stagger for journey stages, streams and timeline milestones.
pub const STEP_STAGGER_MS: Millis = 150;
/// Hero statistics appear on load, starting at this delay.
pub const HERO_STATS_BASE_MS: Millis = 600;
pub const HERO_STATS_STAGGER_MS: Millis = 200;

/// Delay of the `index`-th sibling in a staggered list.
pub fn stagger(index: usize, step: Millis) -> Millis {
    index as Millis * step
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    About,
    PrincipalMessage,
    HsPrincipalMessage,
    StudentJourney,
    AcademicPrograms,
    Facilities,
    Achievements,
    CoCurricular,
    FieldTrips,
    EventsGallery,
    SchoolTimeline,
    Contact,
    Footer,
}

impl SectionKind {
    /// Display order on the page.
    pub const PAGE_ORDER: [SectionKind; 14] = [
        Self::Hero,
        Self::About,
        Self::PrincipalMessage,
        Self::HsPrincipalMessage,
        Self::StudentJourney,
        Self::AcademicPrograms,
        Self::Facilities,
        Self::Achievements,
        Self::CoCurricular,
        Self::FieldTrips,
        Self::EventsGallery,
        Self::SchoolTimeline,
        Self::Contact,
        Self::Footer,
    ];

    /// Element id of the section root, used by in-page links.
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::About => "about",
            Self::PrincipalMessage => "principal-message",
            Self::HsPrincipalMessage => "hs-principal-message",
            Self::StudentJourney => "student-journey",
            Self::AcademicPrograms => "programs",
            Self::Facilities => "facilities",
            Self::Achievements => "achievements",
            Self::CoCurricular => "co-curricular",
            Self::FieldTrips => "field-trips",
            Self::EventsGallery => "events",
            Self::SchoolTimeline => "timeline",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::About => "About",
            Self::PrincipalMessage => "Principal's Message",
            Self::HsPrincipalMessage => "HS Principal's Message",
            Self::StudentJourney => "Student Journey",
            Self::AcademicPrograms => "Academic Programs",
            Self::Facilities => "Facilities",
            Self::Achievements => "Achievements",
            Self::CoCurricular => "Co-Curricular Activities",
            Self::FieldTrips => "Field Trips",
            Self::EventsGallery => "Events Gallery",
            Self::SchoolTimeline => "School Timeline",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }
}

/// Which element a cell's reveal watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Observes {
    /// The cell's own element.
    #[serde(rename = "self")]
    Itself,
    /// The root of the enclosing section.
    #[serde(rename = "section")]
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellReveal {
    pub delay: Millis,
    pub trigger: RevealTrigger,
    pub observes: Observes,
}

impl CellReveal {
    pub fn own(delay: Millis) -> Self {
        Self {
            delay,
            trigger: RevealTrigger::Intersection,
            observes: Observes::Itself,
        }
    }

    pub fn section(delay: Millis) -> Self {
        Self {
            delay,
            trigger: RevealTrigger::Intersection,
            observes: Observes::Section,
        }
    }

    pub fn on_mount(delay: Millis) -> Self {
        Self {
            delay,
            trigger: RevealTrigger::Mount,
            observes: Observes::Itself,
        }
    }

    /// Value of the `data-reveal` attribute.
    pub fn mode(&self) -> &'static str {
        match (self.trigger, self.observes) {
            (RevealTrigger::Mount, _) => "mount",
            (RevealTrigger::Intersection, Observes::Itself) => "self",
            (RevealTrigger::Intersection, Observes::Section) => "section",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub key: String,
    pub reveal: Option<CellReveal>,
}

/// Column counts at the 0 / 640 / 768 / 1024 px breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Columns {
    pub base: usize,
    pub sm: usize,
    pub md: usize,
    pub lg: usize,
}

impl Columns {
    pub const fn new(base: usize, sm: usize, md: usize, lg: usize) -> Self {
        Self { base, sm, md, lg }
    }

    pub const fn single() -> Self {
        Self::new(1, 1, 1, 1)
    }

    pub fn at(&self, width: f64) -> usize {
        let columns = if width >= layout::BREAKPOINT_LG {
            self.lg
        } else if width >= layout::BREAKPOINT_MD {
            self.md
        } else if width >= layout::BREAKPOINT_SM {
            self.sm
        } else {
            self.base
        };
        columns.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub name: &'static str,
    pub columns: Columns,
    pub row_height: f64,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionPlan {
    pub kind: SectionKind,
    pub anchor: &'static str,
    /// Stretch to at least one viewport height.
    pub fills_viewport: bool,
    pub blocks: Vec<Block>,
}

impl SectionPlan {
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.blocks.iter().flat_map(|b| b.cells.iter())
    }

    pub fn reveal_of(&self, key: &str) -> Option<CellReveal> {
        self.cells().find(|c| c.key == key).and_then(|c| c.reveal)
    }
}

// ============================================================
// Block builders
// ============================================================

const HEADING_HEIGHT: f64 = 220.0;

fn heading(kind: SectionKind) -> Block {
    banner(kind, "heading", HEADING_HEIGHT, Some(CellReveal::section(0)))
}

fn banner(kind: SectionKind, name: &'static str, height: f64, reveal: Option<CellReveal>) -> Block {
    Block {
        name,
        columns: Columns::single(),
        row_height: height,
        cells: vec![Cell {
            key: format!("{}.{}", kind.anchor(), name),
            reveal,
        }],
    }
}

fn grid(
    kind: SectionKind,
    name: &'static str,
    columns: Columns,
    row_height: f64,
    reveals: impl IntoIterator<Item = CellReveal>,
) -> Block {
    Block {
        name,
        columns,
        row_height,
        cells: reveals
            .into_iter()
            .enumerate()
            .map(|(i, reveal)| Cell {
                key: format!("{}.{}.{}", kind.anchor(), name, i),
                reveal: Some(reveal),
            })
            .collect(),
    }
}

fn staggered(count: usize, step: Millis) -> impl Iterator<Item = CellReveal> {
    (0..count).map(move |i| CellReveal::own(stagger(i, step)))
}

// ============================================================
// Plans
// ============================================================

pub fn plan_section(kind: SectionKind) -> SectionPlan {
    use SectionKind::*;

    let blocks = match kind {
        Hero => vec![
            banner(kind, "intro", 520.0, None),
            grid(
                kind,
                "stats",
                Columns::new(2, 2, 4, 4),
                150.0,
                (0..about::HERO_STATS.len()).map(|i| {
                    CellReveal::on_mount(HERO_STATS_BASE_MS + stagger(i, HERO_STATS_STAGGER_MS))
                }),
            ),
        ],
        About => vec![
            heading(kind),
            banner(kind, "markers", 120.0, Some(CellReveal::section(300))),
            grid(
                kind,
                "facts",
                Columns::new(1, 2, 2, 3),
                200.0,
                staggered(about::FACTS.len(), CARD_STAGGER_MS),
            ),
        ],
        PrincipalMessage | HsPrincipalMessage => {
            vec![banner(kind, "message", 520.0, Some(CellReveal::section(0)))]
        }
        StudentJourney => vec![
            heading(kind),
            grid(
                kind,
                "stages",
                Columns::new(2, 2, 5, 5),
                220.0,
                staggered(academics::JOURNEY_STAGES.len(), STEP_STAGGER_MS),
            ),
            banner(kind, "highlights", 100.0, Some(CellReveal::section(500))),
        ],
        AcademicPrograms => vec![
            heading(kind),
            grid(
                kind,
                "streams",
                Columns::new(1, 1, 3, 3),
                320.0,
                staggered(academics::STREAMS.len(), STEP_STAGGER_MS),
            ),
            banner(kind, "subjects", 180.0, Some(CellReveal::section(500))),
            banner(kind, "admissions", 90.0, Some(CellReveal::section(700))),
        ],
        Facilities => vec![
            heading(kind),
            grid(
                kind,
                "items",
                Columns::new(2, 2, 4, 4),
                220.0,
                staggered(campus::FACILITIES.len(), CARD_STAGGER_MS),
            ),
        ],
        Achievements => vec![
            heading(kind),
            banner(kind, "stats", 80.0, Some(CellReveal::section(200))),
            grid(
                kind,
                "cards",
                Columns::new(1, 2, 2, 4),
                340.0,
                staggered(campus::ACHIEVEMENTS.len(), CARD_STAGGER_MS),
            ),
        ],
        CoCurricular => vec![
            heading(kind),
            grid(
                kind,
                "activities",
                Columns::new(1, 2, 2, 3),
                260.0,
                staggered(activities::ACTIVITY_CATEGORIES.len(), CARD_STAGGER_MS),
            ),
        ],
        FieldTrips => vec![
            heading(kind),
            banner(kind, "stats", 100.0, Some(CellReveal::section(200))),
            grid(
                kind,
                "trips",
                Columns::new(1, 2, 2, 4),
                240.0,
                staggered(activities::TRIPS.len(), CARD_STAGGER_MS),
            ),
        ],
        EventsGallery => vec![
            heading(kind),
            grid(
                kind,
                "items",
                Columns::new(2, 2, 3, 3),
                300.0,
                staggered(activities::EVENTS.len(), CARD_STAGGER_MS),
            ),
        ],
        SchoolTimeline => vec![
            heading(kind),
            grid(
                kind,
                "milestones",
                Columns::single(),
                180.0,
                staggered(campus::MILESTONES.len(), STEP_STAGGER_MS),
            ),
        ],
        Contact => vec![
            heading(kind),
            banner(kind, "form", 460.0, Some(CellReveal::section(200))),
            banner(kind, "details", 620.0, Some(CellReveal::section(400))),
        ],
        Footer => vec![banner(kind, "body", 360.0, None)],
    };

    SectionPlan {
        kind,
        anchor: kind.anchor(),
        fills_viewport: kind == Hero,
        blocks,
    }
}

/// Plans for every section, in page order.
pub fn page_plan() -> Vec<SectionPlan> {
    SectionKind::PAGE_ORDER.iter().map(|&kind| plan_section(kind)).collect()
}

/// Anchors present on the assembled page.
pub fn page_anchors() -> Vec<&'static str> {
    SectionKind::PAGE_ORDER.iter().map(|k| k.anchor()).collect()
}

/// Mount every section, top to bottom, at the runtime's current viewport.
pub fn mount_page(runtime: &mut PageRuntime) -> Result<Vec<SectionId>, RuntimeError> {
    let plans = page_plan();
    let specs = layout::layout_page(&plans, runtime.viewport());
    let mut ids = Vec::with_capacity(specs.len());
    for spec in specs {
        ids.push(runtime.mount(spec)?);
    }
    tracing::debug!(sections = ids.len(), "page mounted");
    Ok(ids)
}

/// Tear down every section mounted by [`mount_page`].
pub fn unmount_page(runtime: &mut PageRuntime, ids: &[SectionId]) -> Result<(), RuntimeError> {
    for &id in ids {
        runtime.unmount(id)?;
    }
    Ok(())
}

/// Resize the viewport and move every mounted section to the layout at the
/// new size, as a browser reflows the page.
pub fn resize_page(runtime: &mut PageRuntime, width: f64, height: f64) -> Vec<RevealRecord> {
    let specs = layout::layout_page(&page_plan(), &Viewport::new(width, height));
    runtime.reflow(width, height, &specs)
}

/// Smallest scroll step a simulated visitor may take, in px.
pub const MIN_SCROLL_STEP: f64 = 1.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VisitError {
    #[error("scroll step must be at least {MIN_SCROLL_STEP}px, got {0}")]
    StepTooSmall(f64),
}

/// Scroll a visitor from the top of the page to the bottom, `step` px at a
/// time with `interval` ms between steps, then let every pending reveal fire.
///
/// Returns the number of scroll steps taken.
pub fn simulate_visit(
    runtime: &mut PageRuntime,
    step: f64,
    interval: Millis,
) -> Result<usize, VisitError> {
    if !(step >= MIN_SCROLL_STEP) {
        return Err(VisitError::StepTooSmall(step));
    }

    let bottom = (runtime.document_height() - runtime.viewport().height).max(0.0);
    let mut scroll_y = 0.0;
    let mut steps = 0;
    loop {
        runtime.scroll_to(scroll_y);
        runtime.advance_by(interval);
        steps += 1;
        if scroll_y >= bottom {
            break;
        }
        scroll_y = (scroll_y + step).min(bottom);
    }

    // Jump straight to each deadline; every pass fires at least one timer.
    while let Some(due_at) = runtime.next_timer_due() {
        runtime.advance_by(due_at.saturating_sub(runtime.now()));
    }

    tracing::debug!(steps, reveals = runtime.reveal_log().len(), "visit finished");
    Ok(steps)
}
