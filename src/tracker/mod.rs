// Section tracking and scroll navigation - independent of the UI

pub mod error;
pub mod listeners;
pub mod resolve;
pub mod section;
pub mod state;

pub use error::TrackerError;
pub use listeners::{Listeners, Subscription};
pub use resolve::{
    ScrollBehavior, ScrollCommand, navigate_to, resolve_active_index, resolve_active_section,
    should_update,
};
pub use section::{AnchorSource, Section, SectionList, SectionSpec};
pub use state::{
    ActiveSectionChange, ChangeCause, ScrollEvent, ScrollPhase, SectionTracker, TrackerOptions,
};
