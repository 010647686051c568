// Section model: composition-time specs and measured section lists

use std::cell::RefCell;
use std::collections::HashSet;

use super::TrackerError;

/// A navigable page region as declared at composition time.
///
/// The order of specs is significant: it is both the display order of the
/// navigation entries and the priority used when offsets overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: String,
    pub label: String,
}

impl SectionSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A section together with the anchor offset measured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
    /// Top edge of the section, in rows from the document top
    pub anchor_offset: u32,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>, anchor_offset: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            anchor_offset,
        }
    }
}

/// Layout query used to measure where each section currently starts.
pub trait AnchorSource {
    /// Top-edge offset of the section with `id`, or `None` when the layout
    /// has no such anchor.
    fn anchor_offset(&self, id: &str) -> Option<u32>;
}

impl<T: AnchorSource + ?Sized> AnchorSource for &T {
    fn anchor_offset(&self, id: &str) -> Option<u32> {
        (**self).anchor_offset(id)
    }
}

impl<T: AnchorSource> AnchorSource for RefCell<T> {
    fn anchor_offset(&self, id: &str) -> Option<u32> {
        self.borrow().anchor_offset(id)
    }
}

/// Ordered, non-empty list of sections with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Result<Self, TrackerError> {
        validate_ids(sections.iter().map(|s| s.id.as_str()))?;
        Ok(Self { sections })
    }

    /// Measure every spec against the layout, in spec order.
    ///
    /// Anchors the layout cannot locate are measured at offset 0.
    pub fn measure(specs: &[SectionSpec], layout: &dyn AnchorSource) -> Result<Self, TrackerError> {
        validate_ids(specs.iter().map(|s| s.id.as_str()))?;
        Ok(Self::measure_validated(specs, layout))
    }

    // Callers guarantee `specs` already passed `validate_ids`
    pub(crate) fn measure_validated(specs: &[SectionSpec], layout: &dyn AnchorSource) -> Self {
        let sections = specs
            .iter()
            .map(|spec| {
                let anchor_offset = layout.anchor_offset(&spec.id).unwrap_or_else(|| {
                    tracing::debug!(section = %spec.id, "anchor missing from layout, measuring as 0");
                    0
                });
                Section {
                    id: spec.id.clone(),
                    label: spec.label.clone(),
                    anchor_offset,
                }
            })
            .collect();
        Self { sections }
    }

    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn last(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

/// Check that a list of ids is non-empty and free of duplicates.
pub(crate) fn validate_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), TrackerError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TrackerError::DuplicateSection(id.to_string()));
        }
    }
    if seen.is_empty() {
        return Err(TrackerError::EmptySectionList);
    }
    Ok(())
}
