//! Controlled vocabulary seed data.
//!
//! Inserted in order by the vocabulary migration, so the generated ids follow the position in
//! each list starting at 1.

/// Resource types
pub const RESOURCE_TYPES: &[&str] = &[
    "Dataset",
    "Software",
    "Model",
    "Text",
    "Collection",
    "Other",
];

/// Languages as `(code, name)`
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("de", "German"), ("fr", "French")];

/// Licenses as `(name, identifier, uri)`
pub const RIGHTS: &[(&str, &str, &str)] = &[
    (
        "Creative Commons Attribution 4.0 International",
        "CC-BY-4.0",
        "https://creativecommons.org/licenses/by/4.0/legalcode",
    ),
    (
        "Creative Commons Zero v1.0 Universal",
        "CC0-1.0",
        "https://creativecommons.org/publicdomain/zero/1.0/legalcode",
    ),
    (
        "GNU General Public License v3.0 or later",
        "GPL-3.0-or-later",
        "https://www.gnu.org/licenses/gpl-3.0-standalone.html",
    ),
];

/// Title types
pub const TITLE_TYPES: &[&str] = &[
    "Main Title",
    "Alternative Title",
    "Subtitle",
    "Translated Title",
];

/// Contributor roles as `(name, scope)` where scope is `person`, `institution` or `both`
pub const ROLES: &[(&str, &str)] = &[
    ("Contact Person", "person"),
    ("Data Collector", "both"),
    ("Data Curator", "both"),
    ("Data Manager", "both"),
    ("Distributor", "institution"),
    ("Editor", "person"),
    ("Hosting Institution", "institution"),
    ("Producer", "both"),
    ("Project Leader", "person"),
    ("Project Manager", "person"),
    ("Project Member", "person"),
    ("Registration Agency", "institution"),
    ("Registration Authority", "institution"),
    ("Related Person", "person"),
    ("Researcher", "person"),
    ("Research Group", "institution"),
    ("Rights Holder", "both"),
    ("Sponsor", "both"),
    ("Supervisor", "person"),
    ("Work Package Leader", "person"),
    ("Other", "both"),
];

/// Global geopotential model types
pub const MODEL_TYPES: &[&str] = &["Static", "Temporal", "Topographic", "Simulated"];

/// Mathematical representations of a gravity field model
pub const MATHEMATICAL_REPRESENTATIONS: &[&str] =
    &["Spherical harmonics", "Ellipsoidal harmonics"];

/// Model file formats
pub const FILE_FORMATS: &[&str] = &["icgem1.0", "icgem2.0"];
