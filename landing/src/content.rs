//! Static copy for every section of the page.
//!
//! Icons are Font Awesome 5 class names (the stylesheet is linked from
//! `index.html`).

use crate::nav::{NavItem, SectionId};

pub const BRAND_NAME: &str = "SAINI";
pub const BRAND_TAGLINE: &str = "COLLECTION";
pub const COMPANY: &str = "SAINI COLLECTION";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", target: SectionId::Home },
    NavItem { label: "About Us", target: SectionId::About },
    NavItem { label: "Services", target: SectionId::Services },
    NavItem { label: "Testimonials", target: SectionId::Testimonials },
    NavItem { label: "Contact", target: SectionId::Contact },
];

// Hero

pub const HERO_CHIP: &str = "IT Services & Solutions";
pub const HERO_SUBTITLE: &str = "We are a young development startup helping individuals & \
    businesses get online with modern websites, custom tools, and digital solutions";
pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
pub const HERO_IMAGE_ALT: &str = "Modern web development and IT solutions by SAINI COLLECTION";

pub const HERO_HIGHLIGHTS: [&str; 4] = [
    "Modern & Clean Design — Websites that look professional & fresh.",
    "Full Stack Expertise — Frontend & Backend, everything covered.",
    "Affordable & Transparent — No hidden costs, clear pricing.",
    "Support & Growth — We grow with you, whenever you need us.",
];

/// Decorative blurred circle behind a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    pub color: &'static str,
    pub size: u32,
    /// Inline CSS offsets, e.g. `"top: -10%; right: -5%;"`.
    pub position: &'static str,
    pub rotation: u16,
}

pub const HERO_SHAPES: [ShapeSpec; 3] = [
    ShapeSpec { color: "var(--secondary)", size: 600, position: "top: -10%; right: -5%;", rotation: 45 },
    ShapeSpec { color: "var(--secondary)", size: 400, position: "bottom: 10%; left: 5%;", rotation: 120 },
    ShapeSpec { color: "#a0aec0", size: 300, position: "top: 30%; left: 15%;", rotation: 0 },
];

pub const SERVICES_SHAPES: [ShapeSpec; 4] = [
    ShapeSpec { color: "var(--secondary)", size: 500, position: "top: 10%; right: -5%;", rotation: 0 },
    ShapeSpec { color: "var(--secondary)", size: 500, position: "top: 20%; right: -10%;", rotation: 0 },
    ShapeSpec { color: "var(--secondary)", size: 400, position: "bottom: 20%; left: -5%;", rotation: 60 },
    ShapeSpec { color: "var(--secondary)", size: 400, position: "bottom: 30%; left: -10%;", rotation: 60 },
];

// About

pub const ABOUT_SUBTITLE: &str = "New beginnings, big ideas — we craft websites & digital tools \
    that help you grow online with ease";
pub const ABOUT_JOURNEY: &str = "Saini Collection started with a simple idea — to make good design \
    & development accessible for everyone. From a small team with big dreams, we're now on our way \
    to help individuals & businesses build their online presence with confidence.";
pub const ABOUT_MISSION: &str = "Our mission is to deliver modern, clean, and reliable digital \
    solutions that help people grow. We believe in clear communication, affordable service, and \
    building trust with every project we deliver.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_STATS: [Highlight; 4] = [
    Highlight { icon: "fas fa-history", title: "Fresh Start", description: "Innovative approach" },
    Highlight { icon: "fas fa-users", title: "Young Team", description: "Passionate developers" },
    Highlight { icon: "fas fa-trophy", title: "Quality First", description: "Focused on results" },
    Highlight { icon: "fas fa-briefcase", title: "Customer Care", description: "We grow with you" },
];

pub const WHY_CHOOSE: [Highlight; 5] = [
    Highlight {
        icon: "fas fa-user-friends",
        title: "Creative Minds",
        description: "A young team with fresh ideas & clean, modern designs.",
    },
    Highlight {
        icon: "fas fa-cog",
        title: "Custom Solutions",
        description: "We build websites & tools exactly how you need them",
    },
    Highlight {
        icon: "fas fa-desktop",
        title: "Friendly Support",
        description: "Clear communication & help whenever you need us",
    },
    Highlight {
        icon: "fas fa-laptop-code",
        title: "Modern Technology",
        description: "We use the latest tech for smooth & secure websites.",
    },
    Highlight {
        icon: "fas fa-dollar-sign",
        title: "Affordable Pricing",
        description: "Quality work at reasonable prices, perfect for growing businesses.",
    },
];

// Services

pub const SERVICES_SUBTITLE: &str =
    "Comprehensive IT solutions designed to optimize your business operations and drive growth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "fas fa-shield-alt",
        title: "Website Design",
        description: "We design modern, clean & responsive websites that look great on any device.",
        features: &["Custom Designs", "Responsive Layouts", "User Experience Focused"],
    },
    Service {
        icon: "fas fa-cloud",
        title: "Frontend & Backend Development",
        description: "We handle the full development process — frontend design & backend logic \
            that works perfectly together.",
        features: &["Clean & maintainable code", "Secure databases & APIs", "Modern Optimization"],
    },
    Service {
        icon: "fas fa-database",
        title: "Maintenance & Support",
        description: "Comprehensive maintenance and support services to ensure your systems run smoothly.",
        features: &["Regular Updates", "Performance Monitoring", "Technical Support"],
    },
    Service {
        icon: "fas fa-cogs",
        title: "E-commerce Solutions",
        description: "We build easy-to-manage online stores to help you sell your products or \
            services smoothly.",
        features: &["Secure payment integration", "Inventory Management", "User-friendly interfaces"],
    },
    Service {
        icon: "fas fa-th-large",
        title: "Branding & UI Design",
        description: "We help you build a strong brand identity with clean UI designs & appealing visuals.",
        features: &["Brand Strategy", "Visual Identity", "User Experience Design"],
    },
    Service {
        icon: "fas fa-code",
        title: "Software Development",
        description: "Custom software solutions designed to solve your unique business challenges.",
        features: &["Web Applications", "Mobile Apps", "Enterprise Software"],
    },
];

// Testimonials

pub const TESTIMONIALS_SUBTITLE: &str = "Hear from people who trusted our work and saw results";

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Number of stars to draw, never more than [`MAX_RATING`].
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Rohit Sharma",
        role: "Freelancer",
        content: "Working with SAINI COLLECTION was smooth and quick. They built my portfolio site \
            exactly how I wanted. Great experience for a new freelancer like me.",
        rating: 5,
    },
    Testimonial {
        name: "Priya Mehra",
        role: "Small Business Owner",
        content: "As a small business, we needed an affordable website. Their team delivered a \
            beautiful site within budget and explained everything clearly.",
        rating: 5,
    },
    Testimonial {
        name: "Ankit Verma",
        role: "Startup Founder",
        content: "Saini Collection helped us launch our startup website fast. Their design and \
            support made it easy for us to get online and start growing.",
        rating: 5,
    },
];

// Contact

pub const CONTACT_EMAIL: &str = "info@sainicollection.com";
pub const CONTACT_PHONE: &str = "+91-8700274294";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: "fas fa-envelope",
        title: "Email",
        content: CONTACT_EMAIL,
        href: Some("mailto:info@sainicollection.com"),
    },
    ContactDetail {
        icon: "fas fa-phone",
        title: "Phone",
        content: CONTACT_PHONE,
        href: Some("tel:+918700274294"),
    },
    ContactDetail {
        icon: "fas fa-map-marker-alt",
        title: "Location",
        content: "Saini Collection, Mahavir Pura, Gurgaon (Haryana), India",
        href: None,
    },
];

pub const BUSINESS_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 9:00 AM - 6:00 PM",
    "Sunday: Closed",
];

// Footer

pub const FOOTER_BLURB: &str = "Driving digital growth with creativity, technology, and care — since 2025.";

pub const SOCIAL_NETWORKS: [&str; 4] = ["facebook", "twitter", "linkedin", "instagram"];

/// Footer "Company" column: every anchor except the hero.
pub fn footer_links() -> impl Iterator<Item = NavItem> {
    NAV_ITEMS
        .into_iter()
        .filter(|item| item.target != SectionId::Home)
}

pub const LEGAL_LINKS: [&str; 3] = ["Privacy", "Terms", "Cookies"];

pub fn copyright_line(year: u32) -> String {
    format!("{year} Crafting ideas into reality — © 2025 {COMPANY}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_covers_every_section_once() {
        let targets: Vec<SectionId> = NAV_ITEMS.iter().map(|i| i.target).collect();
        assert_eq!(targets, SectionId::ALL.to_vec());
    }

    #[test]
    fn footer_links_skip_home() {
        let labels: Vec<&str> = footer_links().map(|i| i.label).collect();
        assert_eq!(labels, ["About Us", "Services", "Testimonials", "Contact"]);
    }

    #[test]
    fn service_titles_are_unique_and_have_features() {
        let titles: HashSet<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
        assert!(SERVICES.iter().all(|s| s.features.len() == 3));
    }

    #[test]
    fn stars_are_capped() {
        let loud = Testimonial { rating: 9, ..TESTIMONIALS[0] };
        assert_eq!(loud.stars(), MAX_RATING);
        assert_eq!(TESTIMONIALS[1].stars(), 5);
    }

    #[test]
    fn copyright_carries_year() {
        assert_eq!(
            copyright_line(2026),
            "2026 Crafting ideas into reality — © 2025 SAINI COLLECTION."
        );
    }
}
