use serde::Serialize;

use super::{Icon, SectionHeading, Stat};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct JourneyStage {
    pub icon: Icon,
    pub stage: &'static str,
    pub grades: &'static str,
    pub description: &'static str,
    /// Accent class for the stage badge.
    pub accent: &'static str,
}

pub const JOURNEY_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Student Journey",
    title: "Your Path to",
    highlight: "Success",
    lead: "From early childhood to higher secondary, we guide students through every milestone of their educational journey.",
};

pub const JOURNEY_STAGES: &[JourneyStage] = &[
    JourneyStage {
        icon: Icon::Baby,
        stage: "Pre-Primary",
        grades: "Nursery - UKG",
        description: "Early learning foundation",
        accent: "accent-rose",
    },
    JourneyStage {
        icon: Icon::BookOpen,
        stage: "Primary",
        grades: "Classes 1-5",
        description: "Building core skills",
        accent: "accent-blue",
    },
    JourneyStage {
        icon: Icon::BookOpen,
        stage: "Middle",
        grades: "Classes 6-8",
        description: "Exploring subjects",
        accent: "accent-green",
    },
    JourneyStage {
        icon: Icon::GraduationCap,
        stage: "Secondary",
        grades: "Classes 9-10",
        description: "Board examination prep",
        accent: "accent-amber",
    },
    JourneyStage {
        icon: Icon::Rocket,
        stage: "Higher Secondary",
        grades: "Classes 11-12",
        description: "Career specialization",
        accent: "accent-primary",
    },
];

pub const JOURNEY_HIGHLIGHTS: &[Stat] = &[
    Stat { icon: None, value: "12+", label: "Years of Education" },
    Stat { icon: None, value: "2", label: "Streams Available" },
    Stat { icon: None, value: "100%", label: "Success Rate" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stream {
    pub icon: Icon,
    pub name: &'static str,
    pub accent: &'static str,
    pub subjects: &'static [&'static str],
    pub description: &'static str,
}

pub const PROGRAMS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Academic Programs",
    title: "Comprehensive",
    highlight: "Curriculum",
    lead: "Our SEBA-affiliated curriculum offers diverse streams to match every student's aspirations and career goals.",
};

pub const STREAMS: &[Stream] = &[
    Stream {
        icon: Icon::FlaskConical,
        name: "Science Stream",
        accent: "accent-blue",
        subjects: &["Physics", "Chemistry", "Biology", "Mathematics"],
        description: "For aspiring doctors, engineers, and scientists",
    },
    Stream {
        icon: Icon::Palette,
        name: "Arts Stream",
        accent: "accent-purple",
        subjects: &[
            "Education",
            "Political Science",
            "Economics",
            "Assamese",
            "Sociology",
            "History",
            "Geography",
        ],
        description: "Exploring humanities and social sciences",
    },
];

pub const GENERAL_SUBJECTS: &[&str] = &["English", "Assamese"];

pub const ADMISSIONS_TITLE: &str = "Admissions Open for 2025-26";
pub const ADMISSIONS_NOTE: &str = "Limited seats available. Apply now!";
