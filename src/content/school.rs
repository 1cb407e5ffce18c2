use serde::Serialize;

use super::Icon;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct School {
    pub name: &'static str,
    pub tagline: &'static str,
    pub founded: u16,
    pub affiliation: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub office_hours: &'static str,
    pub map_embed_url: &'static str,
    pub footer_blurb: &'static str,
    pub copyright: &'static str,
}

pub const SCHOOL: School = School {
    name: "Kenduguri Jatiya Vidyalaya",
    tagline: "Excellence in Education Since 2000",
    founded: 2000,
    affiliation: "Affiliated to SEBA, Assam",
    address: "Kenduguri, Jorhat District, Assam, India",
    phone: "+91 7002112276",
    email: "kendugurijatiyabidyalaya2000@gmail.com",
    office_hours: "Mon - Sat: 8:00 AM - 4:00 PM",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3562.227490605319!2d94.23647207543456!3d26.769017476733197!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3746dd2e02dcdca7%3A0xddddd2a58e386c3d!2sKenduguri%20Jatiya%20Vidyalaya!5e0!3m2!1sen!2sin!4v1768545968018!5m2!1sen!2sin",
    footer_blurb: "Committed to providing quality education and nurturing young minds for a brighter future since 2000.",
    copyright: "© 2025 Kenduguri Jatiya Vidyalaya. All rights reserved.",
};

/// An in-page link. `href` is always an anchor (`#about`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// The anchor id without the leading `#`.
    pub fn anchor(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#programs", label: "Programs" },
    NavLink { href: "#facilities", label: "Facilities" },
    NavLink { href: "#achievements", label: "Achievements" },
    NavLink { href: "#events", label: "Events" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { href: "#about", label: "About Us" },
    NavLink { href: "#programs", label: "Programs" },
    NavLink { href: "#facilities", label: "Facilities" },
    NavLink { href: "#achievements", label: "Achievements" },
    NavLink { href: "#events", label: "Events" },
    NavLink { href: "#contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: Icon::Facebook, href: "#", label: "Facebook" },
    SocialLink { icon: Icon::Twitter, href: "#", label: "Twitter" },
    SocialLink { icon: Icon::Instagram, href: "#", label: "Instagram" },
    SocialLink { icon: Icon::Youtube, href: "#", label: "YouTube" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrincipalMessage {
    pub badge: &'static str,
    pub heading: &'static str,
    pub photo_url: &'static str,
    pub paragraphs: &'static [&'static str],
    pub signature: &'static str,
    pub school: &'static str,
}

pub const PRINCIPAL_MESSAGE: PrincipalMessage = PrincipalMessage {
    badge: "School Principal's Message",
    heading: "Shaping Tomorrow's Leaders Today",
    photo_url: "https://i.ibb.co/V6Nh7pS/poly-hazarika.jpg",
    paragraphs: &[
        "At Kenduguri Jatiya Bidyalaya, we believe in nurturing not just academic excellence but also character, creativity, and compassion. Our mission is to provide an environment where every student can discover their potential and grow into responsible citizens.",
        "Education is the most powerful tool we can give to our children. We are committed to making quality education accessible to all students in our community, ensuring no dream remains unfulfilled.",
    ],
    signature: "Poly Hazarika Bora, School Principal",
    school: "Kenduguri Jatiya Bidyalaya",
};

pub const HS_PRINCIPAL_MESSAGE: PrincipalMessage = PrincipalMessage {
    badge: "HS Principal's Message",
    heading: "Nurturing Minds, Shaping Futures",
    photo_url: "https://i.ibb.co/HTRrTxTx/dipalima.jpg",
    paragraphs: &[
        "Education is not merely the acquisition of academic excellence; it is the holistic development of a student’s intellect, ethics, and social responsibility. At Kenduguri Jatiya Vidyalaya, we strive to create an environment that inspires curiosity, critical thinking, creativity, and discipline among our learners.",
        "Rooted in the rich cultural heritage of Assam and guided by modern educational practices, our dedicated faculty works tirelessly to mentor students academically and morally. We emphasize integrity, respect, hard work, and service to society, ensuring that our students are well-prepared to face global challenges while staying connected to their roots.",
    ],
    signature: "Dipalima Duwarah Chaliha, HS Principal",
    school: "Kenduguri Jatiya Vidyalaya",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactItem {
    pub icon: Icon,
    pub title: &'static str,
    pub content: &'static str,
}

pub const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem { icon: Icon::MapPin, title: "Address", content: SCHOOL.address },
    ContactItem { icon: Icon::Phone, title: "Phone", content: SCHOOL.phone },
    ContactItem { icon: Icon::Mail, title: "Email", content: SCHOOL.email },
    ContactItem { icon: Icon::Clock, title: "Office Hours", content: SCHOOL.office_hours },
];

/// Shown next to the contact form, which has no submission backend.
pub const CONTACT_FORM_NOTICE: &str =
    "Online enquiries are not accepted yet. Please call or email the school office.";

pub const CONTACT_HEADING: super::SectionHeading = super::SectionHeading {
    eyebrow: "Get In Touch",
    title: "Contact",
    highlight: "Us",
    lead: "Have questions about admissions or want to learn more? We'd love to hear from you.",
};
