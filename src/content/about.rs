use super::{Icon, InfoCard, SectionHeading, Stat};

pub const HERO_BACKGROUND_URL: &str = "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub const HERO_BADGE: &str = "25 Years of Excellence";

pub const HERO_LEAD: &str = "Nurturing minds, building futures. A premier institution committed to academic excellence and holistic development in the heart of Assam.";

pub const HERO_STATS: &[Stat] = &[
    Stat { icon: Some(Icon::Calendar), value: "25+", label: "Years of Excellence" },
    Stat { icon: Some(Icon::Users), value: "500+", label: "Students Enrolled" },
    Stat { icon: Some(Icon::BookOpen), value: "24", label: "Expert Teachers" },
    Stat { icon: Some(Icon::Award), value: "100%", label: "Pass Rate" },
];

pub const ABOUT_HEADING: SectionHeading = SectionHeading {
    eyebrow: "About Us",
    title: "Nurturing Excellence in",
    highlight: "Rural Assam",
    lead: "Kenduguri Jatiya Vidyalaya was established in 2000 as a co-educational private school under the Board of Secondary Education, Assam. We are committed to providing quality education while preserving our rich cultural heritage.",
};

/// The founded / years / future strip under the about heading.
pub const MARKERS: &[Stat] = &[
    Stat { icon: None, value: "2000", label: "Founded" },
    Stat { icon: None, value: "25+", label: "Years" },
    Stat { icon: None, value: "∞", label: "Future" },
];

pub const FACTS: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Building,
        title: "SEBA Affiliated",
        description: "Recognized by Board of Secondary Education, Assam",
    },
    InfoCard {
        icon: Icon::BookOpen,
        title: "Assamese Medium",
        description: "Preserving culture through mother tongue education",
    },
    InfoCard {
        icon: Icon::Users,
        title: "Co-Educational",
        description: "Inclusive learning environment for all students",
    },
    InfoCard {
        icon: Icon::MapPin,
        title: "Rural Excellence",
        description: "Serving Kenduguri and surrounding villages",
    },
    InfoCard {
        icon: Icon::Award,
        title: "Quality Education",
        description: "Commitment to academic excellence since 2000",
    },
    InfoCard {
        icon: Icon::Calendar,
        title: "25+ Years Legacy",
        description: "A quarter century of shaping futures",
    },
];
