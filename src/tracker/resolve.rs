// Scroll-offset to active-section resolution and section navigation

use super::{SectionList, TrackerError};

/// How the host should move the viewport for a [`ScrollCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Instruction for the host viewport: scroll to `target_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub target_offset: u32,
    pub behavior: ScrollBehavior,
}

/// Index of the section the viewport is positioned over.
///
/// Scans from the last section to the first and picks the first one whose
/// `anchor_offset - offset_threshold` is at or below `scroll_y`; falls back to
/// the first section when none qualifies. On identical offsets the later
/// section wins.
pub fn resolve_active_index(scroll_y: u32, sections: &SectionList, offset_threshold: u32) -> usize {
    sections
        .iter()
        .rposition(|section| section.anchor_offset.saturating_sub(offset_threshold) <= scroll_y)
        .unwrap_or(0)
}

/// Id of the section the viewport is positioned over. See [`resolve_active_index`].
pub fn resolve_active_section(scroll_y: u32, sections: &SectionList, offset_threshold: u32) -> &str {
    let index = resolve_active_index(scroll_y, sections, offset_threshold);
    &sections.as_slice()[index].id
}

/// True when `resolved` differs from `current` and must be committed.
pub fn should_update(current: &str, resolved: &str) -> bool {
    resolved != current
}

/// Scroll command that brings `section_id` just below a fixed header of
/// `header_height` rows.
pub fn navigate_to(
    section_id: &str,
    sections: &SectionList,
    header_height: u32,
) -> Result<ScrollCommand, TrackerError> {
    let section = sections
        .get(section_id)
        .ok_or_else(|| TrackerError::UnknownSection(section_id.to_string()))?;

    Ok(ScrollCommand {
        target_offset: section.anchor_offset.saturating_sub(header_height),
        behavior: ScrollBehavior::Smooth,
    })
}
