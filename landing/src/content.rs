// Static page copy: single source of truth for every string the page shows

use crate::sections::icons::{IconPaths, ICON_BOOK_OPEN, ICON_COMPASS, ICON_TRENDING_UP, ICON_USERS};

pub const BRAND: &str = "SG Career Atlas";

pub const LOGO_URL: &str =
    "https://cdn.chatandbuild.com/users/684bbe2a00d8c4b56fb7f2bb/logo-atlas-1750691366656-709402992.png";

pub const COPYRIGHT_YEAR: u16 = 2024;

pub const SEARCH_PLACEHOLDER: &str = "Ask about careers, salaries, skills, or industry trends...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: IconPaths,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

const fn link(label: &'static str) -> NavLink {
    NavLink { label, href: "#" }
}

/// Shared by the desktop bar and the mobile panel.
pub const NAV_LINKS: &[NavLink] = &[
    link("Explore Careers"),
    link("Market Insights"),
    link("Skills Assessment"),
    link("Resources"),
];

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Career Paths Mapped" },
    Stat { value: "50K+", label: "Job Market Data Points" },
    Stat { value: "95%", label: "User Satisfaction Rate" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_COMPASS,
        title: "Career Path Discovery",
        description: "Explore diverse career opportunities tailored to Singapore's job market with AI-powered insights.",
    },
    Feature {
        icon: ICON_TRENDING_UP,
        title: "Market Intelligence",
        description: "Get real-time salary benchmarks, industry trends, and growth projections for informed decisions.",
    },
    Feature {
        icon: ICON_BOOK_OPEN,
        title: "Skills Gap Analysis",
        description: "Identify skill gaps and receive personalized learning recommendations to advance your career.",
    },
    Feature {
        icon: ICON_USERS,
        title: "Industry Networks",
        description: "Connect with professionals and discover networking opportunities in your field of interest.",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Platform",
        links: &[
            link("Career Explorer"),
            link("Skills Assessment"),
            link("Market Insights"),
            link("Learning Paths"),
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            link("Career Guides"),
            link("Industry Reports"),
            link("Salary Benchmarks"),
            link("Success Stories"),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            link("About Us"),
            link("Contact"),
            link("Privacy Policy"),
            link("Terms of Service"),
        ],
    },
];

pub fn copyright_line() -> String {
    format!("\u{a9} {COPYRIGHT_YEAR} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_features_with_icons() {
        assert_eq!(FEATURES.len(), 4);
        assert!(FEATURES.iter().all(|f| !f.icon.is_empty()));
    }

    #[test]
    fn footer_columns_have_four_links_each() {
        let headings: Vec<_> = FOOTER_COLUMNS.iter().map(|c| c.heading).collect();
        assert_eq!(headings, vec!["Platform", "Resources", "Company"]);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 4));
    }

    #[test]
    fn copyright_uses_brand_and_year() {
        assert_eq!(
            copyright_line(),
            "\u{a9} 2024 SG Career Atlas. All rights reserved."
        );
    }
}
