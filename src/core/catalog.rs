//! Fixed theme and feature labels offered to the user.

pub const THEME_OPTIONS: [&str; 20] = [
    "Space",
    "Cyberpunk",
    "Retro",
    "Minimalist",
    "Nature",
    "Futuristic",
    "Mystery",
    "Adventure",
    "Fantasy",
    "Neon",
    "Steampunk",
    "Cartoon",
    "Abstract",
    "Luxury",
    "Tech",
    "Pop Art",
    "Street",
    "Surreal",
    "Anime",
    "Pixel Art",
];

pub const FEATURE_OPTIONS: [&str; 28] = [
    "Real-time Chat",
    "Push Notifications",
    "File Upload & Storage",
    "Payment Processing",
    "Social Media Integration",
    "Email Automation",
    "Maps & Geolocation",
    "Data Visualization",
    "Advanced Search",
    "Admin Dashboard",
    "REST API",
    "GraphQL API",
    "Multi-language Support",
    "Video/Audio Calls",
    "Calendar Integration",
    "Analytics & Reporting",
    "Data Export/Import",
    "Machine Learning",
    "AI Integration",
    "Blockchain Features",
    "IoT Connectivity",
    "Progressive Web App",
    "Accessibility Features",
    "SEO Optimization",
    "Content Management",
    "Subscription Management",
    "Team Collaboration",
    "Version Control",
];

fn find_label(options: &[&'static str], input: &str) -> Option<&'static str> {
    let needle = input.trim();
    options
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(needle))
}

/// Resolve user input to the canonical theme label (case-insensitive).
pub fn find_theme(input: &str) -> Option<&'static str> {
    find_label(&THEME_OPTIONS, input)
}

/// Resolve user input to the canonical feature label (case-insensitive).
pub fn find_feature(input: &str) -> Option<&'static str> {
    find_label(&FEATURE_OPTIONS, input)
}
