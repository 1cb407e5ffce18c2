use serde::Serialize;

use super::{Icon, SectionHeading, Stat};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivityCategory {
    pub icon: Icon,
    pub title: &'static str,
    pub activities: &'static [&'static str],
    pub accent: &'static str,
}

pub const ACTIVITIES_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Beyond Academics",
    title: "Co-Curricular",
    highlight: "Activities",
    lead: "Holistic development through diverse extracurricular programs that nurture creativity, leadership, and teamwork.",
};

pub const ACTIVITY_CATEGORIES: &[ActivityCategory] = &[
    ActivityCategory {
        icon: Icon::Music,
        title: "Music & Dance",
        activities: &["Bihu Dance", "Sattriya Dance", "Classical Music", "Folk Songs", "Drama Club"],
        accent: "accent-rose",
    },
    ActivityCategory {
        icon: Icon::Palette,
        title: "Art & Craft",
        activities: &["Drawing", "Painting", "Handicrafts", "Pottery"],
        accent: "accent-purple",
    },
    ActivityCategory {
        icon: Icon::BookOpen,
        title: "Literary",
        activities: &["Debate", "Quiz", "Essay Writing", "Recitation"],
        accent: "accent-blue",
    },
    ActivityCategory {
        icon: Icon::Leaf,
        title: "Environment",
        activities: &["Eco Club", "Tree Plantation", "Cleanliness Drives", "Nature Walks"],
        accent: "accent-teal",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Trip {
    pub image: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub year: &'static str,
}

pub const TRIPS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Experiential Learning",
    title: "Field Trips &",
    highlight: "Excursions",
    lead: "Learning beyond the classroom through educational trips to historical sites, wildlife sanctuaries, and cultural destinations.",
};

pub const TRIP_STATS: &[Stat] = &[
    Stat { icon: Some(Icon::MapPin), value: "10+", label: "Destinations" },
    Stat { icon: Some(Icon::Users), value: "400+", label: "Students Participated" },
    Stat { icon: Some(Icon::Calendar), value: "Annual", label: "Trips Organized" },
];

pub const TRIPS: &[Trip] = &[
    Trip {
        image: "https://i.ibb.co/1f73051z/siv-visit.png",
        title: "Sivsagar Visit",
        location: "Sivsagar, Assam",
        year: "2019",
    },
    Trip {
        image: "https://i.ibb.co/xqcPHMN3/siv-visit-koyal.png",
        title: "Sivsagar Visit",
        location: "Sivsagar, Assam",
        year: "2018",
    },
    Trip {
        image: "https://i.ibb.co/spHqSndk/FB-IMG-1768628108070.jpg",
        title: "Tezpur Excursion",
        location: "Tezpur, Assam",
        year: "2024",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Event {
    pub image: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub const EVENTS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Celebrations",
    title: "Annual Events",
    highlight: "Gallery",
    lead: "Glimpses of our vibrant school life through various celebrations, competitions, and cultural programs.",
};

pub const EVENTS: &[Event] = &[
    Event {
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        title: "Annual Day Celebration",
        date: "December 2024",
        category: "Annual",
    },
    Event {
        image: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        title: "Independence Day",
        date: "August 2024",
        category: "National",
    },
    Event {
        image: "https://images.unsplash.com/photo-1511578314322-379afb476865?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        title: "Bihu Celebration",
        date: "April 2024",
        category: "Cultural",
    },
    Event {
        image: "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        title: "Sports Day",
        date: "January 2024",
        category: "Sports",
    },
    Event {
        image: "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        title: "Science Exhibition",
        date: "November 2024",
        category: "Academic",
    },
    Event {
        image: "https://images.unsplash.com/photo-1577896851231-70ef18881754?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        title: "Teacher's Day",
        date: "September 2024",
        category: "Cultural",
    },
];
