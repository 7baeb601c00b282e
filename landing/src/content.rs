//! Literal page content: feature cards, carousel photos and link lists.
//!
//! Everything here is fixed at compile time. Order is display order.

use crate::components::Icon;

/// A card in one of the feature grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Theme colour carried over from the design mock. Cards never read it.
    pub color: Option<&'static str>,
}

/// The six "Why Choose Us" cards.
pub const PRIMARY_FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Heart,
        title: "Family-oriented clinic",
        description: "We treat your pets like family members, providing compassionate care with a personal touch that makes every visit comfortable.",
        color: Some("blue"),
    },
    Feature {
        icon: Icon::Calendar,
        title: "Over 12 years of trusted service",
        description: "Three decades of excellence in veterinary care, building lasting relationships with pets and their families in our community.",
        color: Some("blue"),
    },
    Feature {
        icon: Icon::Shield,
        title: "Exceptional patient care",
        description: "Advanced medical treatments combined with gentle, loving care to ensure your pet receives the best possible treatment.",
        color: Some("blue"),
    },
    Feature {
        icon: Icon::MapPin,
        title: "Convenient location",
        description: "Conveniently located in your neighborhood, making it easy to access quality veterinary care when you need it most.",
        color: Some("blue"),
    },
    Feature {
        icon: Icon::Star,
        title: "Outstanding service providers",
        description: "Our experienced veterinarians and caring staff are dedicated to providing exceptional service and building trust with every interaction.",
        color: Some("blue"),
    },
    Feature {
        icon: Icon::Award,
        title: "Latest diagnostic equipment",
        description: "State-of-the-art medical technology ensures accurate diagnoses and effective treatments for your beloved companions.",
        color: Some("blue"),
    },
];

/// The three smaller cards under the main grid.
pub const SECONDARY_FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::CheckCircle,
        title: "Competitive prices",
        description: "Quality veterinary care at affordable rates, ensuring your pet gets the best treatment without breaking your budget.",
        color: None,
    },
    Feature {
        icon: Icon::Clock,
        title: "Open 7 days a week",
        description: "Available when you need us most, with extended hours including weekends for your convenience.",
        color: None,
    },
    Feature {
        icon: Icon::Heart,
        title: "24/7 emergency care",
        description: "Round-the-clock emergency care because we know pet health emergencies don't wait for business hours.",
        color: None,
    },
];

/// Hero carousel photos, in rotation order.
pub const CAROUSEL_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1601758228041-f3b2795255f1",
    "https://images.unsplash.com/photo-1576201836106-db1758fd1c97",
    "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba",
];

pub const TEAM_PHOTO: &str = "https://images.unsplash.com/photo-1576201836106-db1758fd1c97";
pub const PET_CARE_PHOTO: &str = "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba";

/// Header links, shared by the desktop row and the mobile drawer.
pub const NAV_LINKS: [&str; 4] = ["Home", "About", "Services", "Contact"];

/// Footer "Quick Links" column.
pub const FOOTER_LINKS: [&str; 6] = [
    "Home",
    "About Us",
    "Services",
    "Contact",
    "Emergency Care",
    "Pet Insurance",
];

pub const SOCIAL_NETWORKS: [&str; 4] = ["Facebook", "Twitter", "Instagram", "LinkedIn"];

/// In-page anchor for a link label: `"About Us"` becomes `#about-us`.
pub fn anchor_for(label: &str) -> String {
    format!("#{}", label.to_lowercase().replace(' ', "-"))
}

/// Single-letter badge shown on a social button.
pub fn social_initial(network: &str) -> String {
    network.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_map_to_section_ids() {
        let anchors: Vec<String> = NAV_LINKS.iter().map(|l| anchor_for(l)).collect();
        assert_eq!(anchors, vec!["#home", "#about", "#services", "#contact"]);
    }

    #[test]
    fn footer_links_hyphenate_spaces() {
        let anchors: Vec<String> = FOOTER_LINKS.iter().map(|l| anchor_for(l)).collect();
        assert_eq!(
            anchors,
            vec![
                "#home",
                "#about-us",
                "#services",
                "#contact",
                "#emergency-care",
                "#pet-insurance",
            ]
        );
    }

    #[test]
    fn feature_lists_keep_display_order() {
        let titles: Vec<&str> = PRIMARY_FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.first(), Some(&"Family-oriented clinic"));
        assert_eq!(titles.last(), Some(&"Latest diagnostic equipment"));

        let secondary: Vec<&str> = SECONDARY_FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            secondary,
            vec!["Competitive prices", "Open 7 days a week", "24/7 emergency care"]
        );
    }

    #[test]
    fn only_primary_cards_carry_a_color() {
        assert!(PRIMARY_FEATURES.iter().all(|f| f.color == Some("blue")));
        assert!(SECONDARY_FEATURES.iter().all(|f| f.color.is_none()));
    }

    #[test]
    fn social_initials() {
        let initials: Vec<String> = SOCIAL_NETWORKS.iter().map(|s| social_initial(s)).collect();
        assert_eq!(initials, vec!["F", "T", "I", "L"]);
        assert_eq!(social_initial(""), "");
    }
}
