use serde::Serialize;

use super::{Icon, InfoCard, SectionHeading, Stat};

pub const FACILITIES_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Infrastructure",
    title: "World-Class",
    highlight: "Facilities",
    lead: "Our campus is equipped with modern amenities to provide the best learning environment for students.",
};

pub const FACILITIES: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Beaker,
        title: "Science Laboratory",
        description: "Well-equipped physics and chemistry labs for practical learning",
    },
    InfoCard {
        icon: Icon::BookOpen,
        title: "Library",
        description: "Extensive collection of books, journals and reference materials",
    },
    InfoCard {
        icon: Icon::MonitorPlay,
        title: "Smart Classrooms",
        description: "Digital learning with projectors and interactive boards",
    },
    InfoCard {
        icon: Icon::Trophy,
        title: "Sports Ground",
        description: "Large playground for athletics and outdoor sports",
    },
    InfoCard {
        icon: Icon::Wifi,
        title: "Computer Lab",
        description: "Modern computers with internet connectivity",
    },
    InfoCard {
        icon: Icon::Users,
        title: "Assembly Hall",
        description: "Spacious hall for events and gatherings",
    },
    InfoCard {
        icon: Icon::Droplets,
        title: "Clean Water",
        description: "Safe drinking water facility for all students",
    },
    InfoCard {
        icon: Icon::ShieldCheck,
        title: "Safe Campus",
        description: "Secure environment with proper safety measures",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub image: &'static str,
    pub name: &'static str,
    pub achievement: &'static str,
    pub category: &'static str,
    pub year: &'static str,
}

impl Achievement {
    /// Accent class for the category badge.
    pub fn category_accent(&self) -> &'static str {
        match self.category.to_ascii_lowercase().as_str() {
            "academic" => "accent-blue",
            "sports" => "accent-green",
            "arts" => "accent-purple",
            _ => "accent-primary",
        }
    }
}

pub const ACHIEVEMENTS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Pride of KJV",
    title: "Our Achievements &",
    highlight: "Accolades",
    lead: "Celebrating the success stories of our talented students who have brought laurels to the institution.",
};

pub const ACHIEVEMENT_STATS: &[Stat] = &[
    Stat { icon: Some(Icon::Trophy), value: "50+", label: "Awards Won" },
    Stat { icon: Some(Icon::Medal), value: "100%", label: "Pass Rate" },
    Stat { icon: Some(Icon::Star), value: "25+", label: "Star Students" },
    Stat { icon: Some(Icon::Award), value: "10+", label: "Distinctions" },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        image: "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        name: "Academic Excellence",
        achievement: "100% pass rate in HSLC and HS examinations with distinction holders",
        category: "Academic",
        year: "2024",
    },
    Achievement {
        image: "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        name: "State Level Sports",
        achievement: "Winners in district and state level athletic competitions",
        category: "Sports",
        year: "2023",
    },
    Achievement {
        image: "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        name: "Cultural Champions",
        achievement: "First prize in Bihu dance and traditional Assamese music competitions",
        category: "Arts",
        year: "2024",
    },
    Achievement {
        image: "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        name: "Science Olympiad",
        achievement: "District level winners in Science and Mathematics Olympiad",
        category: "Academic",
        year: "2023",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Our Journey",
    title: "25 Years of",
    highlight: "Excellence",
    lead: "Key milestones in our journey from a small school to a premier educational institution.",
};

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2000",
        icon: Icon::Flag,
        title: "School Established",
        description: "Kenduguri Jatiya Vidyalaya was founded with a vision to provide quality education in rural Assam.",
    },
    Milestone {
        year: "2005",
        icon: Icon::Building,
        title: "SEBA Affiliation",
        description: "Received official affiliation from Board of Secondary Education, Assam.",
    },
    Milestone {
        year: "2010",
        icon: Icon::Users,
        title: "Campus Expansion",
        description: "New classrooms, library, and science laboratory added to accommodate growing student body.",
    },
    Milestone {
        year: "2015",
        icon: Icon::Award,
        title: "First 100% Pass Rate",
        description: "Achieved 100% pass rate in HSLC examination for the first time.",
    },
    Milestone {
        year: "2020",
        icon: Icon::GraduationCap,
        title: "Higher Secondary Added",
        description: "Expanded to include Higher Secondary education with Science, Commerce, and Arts streams.",
    },
    Milestone {
        year: "2025",
        icon: Icon::Star,
        title: "Silver Jubilee",
        description: "Celebrating 25 years of excellence in education and community service.",
    },
];
