// Page composition constants: section order and UI tunables

use crate::tracker::SectionSpec;

// (id, label) in display order
pub const PAGE_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("gallery", "Gallery"),
    ("certificates", "Certificates"),
    ("blog", "Blog"),
];

/// Number of "more" entries listed under a post or project
pub const MORE_ENTRIES: usize = 2;

/// Detail header switches to its compact style past this many rows
pub const DETAIL_SCROLLED_AFTER: u32 = 2;

/// Seconds a footer status message stays visible
pub const STATUS_TTL_SECS: u64 = 4;

pub fn page_section_specs() -> Vec<SectionSpec> {
    PAGE_SECTIONS
        .iter()
        .map(|(id, label)| SectionSpec::new(*id, *label))
        .collect()
}
