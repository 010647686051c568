// Section tracker: owns the active-section state and reconciles its two writers

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::listeners::{Listeners, Subscription};
use super::resolve::{ScrollCommand, navigate_to, resolve_active_section, should_update};
use super::section::{AnchorSource, SectionList, SectionSpec, validate_ids};
use super::TrackerError;

/// Where a scroll offset came from, as reported by the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Scroll requested directly by the user (wheel, keys, drag)
    User,
    /// Intermediate frame of a programmatic smooth scroll
    Animating,
    /// Final offset of a programmatic scroll, or a layout change
    Settled,
}

/// One entry of the viewport's scroll-position stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub offset: u32,
    pub phase: ScrollPhase,
}

impl ScrollEvent {
    pub fn new(offset: u32, phase: ScrollPhase) -> Self {
        Self { offset, phase }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerOptions {
    /// Margin subtracted from each anchor before comparing with the scroll offset
    pub offset_threshold: u32,
    /// Height of the fixed header covering the top of the viewport
    pub header_height: u32,
    /// Highlight the navigation target immediately instead of waiting for the scroll
    pub eager_update: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            offset_threshold: 3,
            header_height: 3,
            eager_update: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Scroll,
    Navigation,
}

/// Notification sent to observers whenever the active section changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSectionChange {
    pub previous: String,
    pub current: String,
    pub cause: ChangeCause,
}

#[derive(Debug, Clone)]
struct PendingNavigation {
    section_id: String,
    target_offset: u32,
}

#[derive(Debug)]
struct NavigationState {
    active_section_id: String,
    pending: Option<PendingNavigation>,
}

struct Inner {
    specs: Vec<SectionSpec>,
    options: TrackerOptions,
    state: RefCell<NavigationState>,
    observers: Listeners<ActiveSectionChange>,
}

/// Tracks which section is active and drives section navigation.
///
/// The active section has two writers: scroll-driven resolution
/// ([`handle_scroll`](Self::handle_scroll)) and eager navigation
/// ([`navigate`](Self::navigate)). After an eager navigation, intermediate
/// `Animating` frames do not commit; the next `Settled` or `User` event clears
/// the pending navigation and resolves normally. With
/// `offset_threshold >= header_height` and strictly increasing anchors, the
/// settled resolution equals the navigated section, so nothing flickers.
///
/// Cloning yields another handle to the same tracker.
#[derive(Clone)]
pub struct SectionTracker {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for SectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionTracker")
            .field("specs", &self.inner.specs)
            .field("options", &self.inner.options)
            .field("state", &self.inner.state.borrow())
            .finish()
    }
}

impl SectionTracker {
    pub fn new(specs: Vec<SectionSpec>, options: TrackerOptions) -> Result<Self, TrackerError> {
        validate_ids(specs.iter().map(|s| s.id.as_str()))?;

        if options.offset_threshold < options.header_height {
            tracing::warn!(
                threshold = options.offset_threshold,
                header_height = options.header_height,
                "offset threshold is below the header height; navigation may settle on the previous section"
            );
        }

        let active_section_id = specs[0].id.clone();
        Ok(Self {
            inner: Rc::new(Inner {
                specs,
                options,
                state: RefCell::new(NavigationState {
                    active_section_id,
                    pending: None,
                }),
                observers: Listeners::new(),
            }),
        })
    }

    pub fn specs(&self) -> &[SectionSpec] {
        &self.inner.specs
    }

    pub fn options(&self) -> TrackerOptions {
        self.inner.options
    }

    pub fn active_section(&self) -> String {
        self.inner.state.borrow().active_section_id.clone()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.inner.state.borrow().active_section_id == id
    }

    /// Section of the eager navigation still waiting for its scroll to settle
    pub fn pending_navigation(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .pending
            .as_ref()
            .map(|p| p.section_id.clone())
    }

    /// Observe active-section changes until the returned guard drops.
    pub fn subscribe(&self, observer: impl FnMut(&ActiveSectionChange) + 'static) -> Subscription {
        self.inner.observers.subscribe(observer)
    }

    /// Measure the current layout for every section, in composition order.
    pub fn measure(&self, layout: &dyn AnchorSource) -> SectionList {
        SectionList::measure_validated(&self.inner.specs, layout)
    }

    /// Resolve the active section for a scroll event and commit it if changed.
    ///
    /// Returns the newly active id, or `None` when nothing changed.
    pub fn handle_scroll(&self, event: &ScrollEvent, layout: &dyn AnchorSource) -> Option<String> {
        #[cfg(feature = "dev-logging")]
        tracing::trace!(offset = event.offset, phase = ?event.phase, "scroll event");

        let held_by_navigation = {
            let mut state = self.inner.state.borrow_mut();
            match event.phase {
                ScrollPhase::Animating => state.pending.is_some(),
                ScrollPhase::User | ScrollPhase::Settled => {
                    if let Some(pending) = state.pending.take() {
                        debug!(
                            section = %pending.section_id,
                            target = pending.target_offset,
                            offset = event.offset,
                            phase = ?event.phase,
                            "pending navigation released"
                        );
                    }
                    false
                }
            }
        };
        if held_by_navigation {
            return None;
        }

        let sections = self.measure(layout);
        let resolved = resolve_active_section(event.offset, &sections, self.inner.options.offset_threshold);
        self.commit(resolved, ChangeCause::Scroll)
    }

    /// Compute the scroll command for `section_id`.
    ///
    /// Unknown sections and sections absent from the layout are reported
    /// without touching the state. With `eager_update` the target becomes
    /// active immediately.
    pub fn navigate(&self, section_id: &str, layout: &dyn AnchorSource) -> Result<ScrollCommand, TrackerError> {
        if !self.inner.specs.iter().any(|s| s.id == section_id) {
            return Err(TrackerError::UnknownSection(section_id.to_string()));
        }
        if layout.anchor_offset(section_id).is_none() {
            return Err(TrackerError::AnchorMissing(section_id.to_string()));
        }

        let sections = self.measure(layout);
        let command = navigate_to(section_id, &sections, self.inner.options.header_height)?;
        info!(section = section_id, target = command.target_offset, "navigating to section");

        if self.inner.options.eager_update {
            self.inner.state.borrow_mut().pending = Some(PendingNavigation {
                section_id: section_id.to_string(),
                target_offset: command.target_offset,
            });
            self.commit(section_id, ChangeCause::Navigation);
        }

        Ok(command)
    }

    /// Register this tracker on a scroll stream, measuring against `layout`
    /// on every event. Dropping the guard deregisters the handler.
    pub fn attach(&self, scroll_stream: &Listeners<ScrollEvent>, layout: Rc<dyn AnchorSource>) -> Subscription {
        let tracker = self.clone();
        scroll_stream.subscribe(move |event| {
            tracker.handle_scroll(event, layout.as_ref());
        })
    }

    fn commit(&self, resolved: &str, cause: ChangeCause) -> Option<String> {
        let change = {
            let mut state = self.inner.state.borrow_mut();
            if !should_update(&state.active_section_id, resolved) {
                return None;
            }
            let previous = std::mem::replace(&mut state.active_section_id, resolved.to_string());
            ActiveSectionChange {
                previous,
                current: resolved.to_string(),
                cause,
            }
        };

        debug!(from = %change.previous, to = %change.current, cause = ?change.cause, "active section changed");
        self.inner.observers.emit(&change);
        Some(change.current)
    }
}
