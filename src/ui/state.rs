// Application state management

use ratatui::{layout::Rect, widgets::ListState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::content::{ContentStore, EntrySummary, ImageUrls, Settings};
use crate::host::{SmoothScroll, Viewport};
use crate::tracker::{
    ActiveSectionChange, ChangeCause, SectionSpec, SectionTracker, Subscription, TrackerError,
    TrackerOptions,
};
use crate::ui::constants::{STATUS_TTL_SECS, page_section_specs};
use crate::ui::detail::DetailState;
use crate::ui::help::HelpModalState;
use crate::ui::page::PageLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Page,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= Duration::from_secs(STATUS_TTL_SECS)
    }
}

/// Entry picker overlay: every post and project, newest first per kind
#[derive(Debug, Default)]
pub struct PickerState {
    pub entries: Vec<EntrySummary>,
    pub list_state: ListState,
}

impl PickerState {
    pub fn new(content: &ContentStore) -> Self {
        let mut entries = content.all_posts();
        entries.extend(content.all_projects());
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            list_state,
        }
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| (i + 1).min(self.entries.len() - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    pub fn selected(&self) -> Option<&EntrySummary> {
        self.list_state.selected().and_then(|i| self.entries.get(i))
    }
}

/// The single scrolling page: tracker, viewport and the current layout.
///
/// The tracker listens to the viewport's scroll stream for as long as this
/// state lives; dropping it releases both registrations.
pub struct PageState {
    pub tracker: SectionTracker,
    pub viewport: Viewport,
    pub layout: Rc<RefCell<PageLayout>>,
    /// Area of the fixed header from the last render, for mouse hit-testing
    pub header_area: Rect,
    size: (u16, u32),
    _scroll_link: Subscription,
    _change_log: Subscription,
}

impl std::fmt::Debug for PageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageState")
            .field("tracker", &self.tracker)
            .field("offset", &self.viewport.offset())
            .field("size", &self.size)
            .finish()
    }
}

impl PageState {
    pub fn new(options: TrackerOptions, smooth: SmoothScroll) -> Result<Self, TrackerError> {
        Self::with_sections(page_section_specs(), options, smooth)
    }

    pub fn with_sections(
        specs: Vec<SectionSpec>,
        options: TrackerOptions,
        smooth: SmoothScroll,
    ) -> Result<Self, TrackerError> {
        let tracker = SectionTracker::new(specs, options)?;
        let viewport = Viewport::new(smooth);
        let layout = Rc::new(RefCell::new(PageLayout::default()));

        let scroll_link = tracker.attach(viewport.scroll_stream(), layout.clone());
        let change_log = tracker.subscribe(|change: &ActiveSectionChange| {
            let cause = match change.cause {
                ChangeCause::Scroll => "scroll",
                ChangeCause::Navigation => "navigation",
            };
            tracing::debug!(from = %change.previous, to = %change.current, cause, "active section changed");
        });

        Ok(Self {
            tracker,
            viewport,
            layout,
            header_area: Rect::default(),
            size: (0, 0),
            _scroll_link: scroll_link,
            _change_log: change_log,
        })
    }

    pub fn header_height(&self) -> u32 {
        self.tracker.options().header_height
    }

    /// Lay the page out again when the body size changed. The viewport
    /// re-announces its offset, so the active section is re-resolved against
    /// the new anchors.
    pub fn ensure_layout(&mut self, content: &ContentStore, images: &ImageUrls, width: u16, body_height: u32) {
        if self.size == (width, body_height) {
            return;
        }
        self.relayout(content, images, width, body_height);
    }

    pub fn relayout(&mut self, content: &ContentStore, images: &ImageUrls, width: u16, body_height: u32) {
        let layout = PageLayout::build(content, images, width, self.header_height(), body_height);
        let height = layout.height();
        tracing::debug!(width, body_height, rows = height, "page laid out");

        // the borrow must end before the viewport emits
        *self.layout.borrow_mut() = layout;
        self.size = (width, body_height);
        self.viewport.resize(body_height, height);
    }

    /// Start navigating to `section_id`; the viewport animates there.
    pub fn navigate(&mut self, section_id: &str, now: Instant) -> Result<(), TrackerError> {
        let command = self.tracker.navigate(section_id, &*self.layout)?;
        self.viewport.apply(command, now);
        Ok(())
    }

    /// Navigate to the section `step` places after (or before) the active one.
    pub fn navigate_relative(&mut self, step: isize, now: Instant) -> Result<(), TrackerError> {
        let specs = self.tracker.specs();
        let current = self.tracker.active_section();
        let index = specs.iter().position(|s| s.id == current).unwrap_or(0) as isize;
        let target = (index + step).clamp(0, specs.len() as isize - 1) as usize;
        let id = specs[target].id.clone();
        self.navigate(&id, now)
    }

    pub fn active_label(&self) -> String {
        let active = self.tracker.active_section();
        self.tracker
            .specs()
            .iter()
            .find(|s| s.id == active)
            .map(|s| s.label.clone())
            .unwrap_or(active)
    }

    /// Scroll position as a percentage of the scrollable range
    pub fn progress(&self) -> u16 {
        let max = self.viewport.max_offset();
        if max == 0 {
            return 100;
        }
        ((u64::from(self.viewport.offset()) * 100) / u64::from(max)) as u16
    }
}

pub struct AppState {
    pub current_screen: Screen,
    pub content: ContentStore,
    pub settings: Settings,
    pub images: ImageUrls,
    pub page: PageState,
    pub detail: Option<DetailState>,
    pub help_modal: Option<HelpModalState>,
    pub picker: Option<PickerState>,
    pub resume_open: bool,
    pub status: Option<StatusMessage>,
    pub smooth: SmoothScroll,
    pub wheel_step: u32,
    pub app_version: String,
}

impl AppState {
    pub fn new(content: ContentStore, config: &Config) -> Result<Self, TrackerError> {
        let options = config.tracker_options();
        let smooth = config.smooth_scroll();
        let page = PageState::new(options, smooth)?;
        let settings = content.settings();

        Ok(Self {
            current_screen: Screen::Page,
            settings,
            content,
            images: config.image_urls(),
            page,
            detail: None,
            help_modal: None,
            picker: None,
            resume_open: false,
            status: None,
            smooth,
            wheel_step: config.scroll.wheel_step.max(1),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        if status.is_error {
            tracing::warn!(message = %status.text, "status");
        }
        self.status = Some(status);
    }
}
