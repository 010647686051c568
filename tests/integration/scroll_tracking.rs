// Integration tests for the tracker driven by a real viewport
//
// These tests wire a SectionTracker to a Viewport's scroll stream and
// check which section is active while navigations animate.

use folio::host::{SmoothScroll, Viewport};
use folio::tracker::{
    ActiveSectionChange, AnchorSource, ChangeCause, SectionTracker, TrackerOptions,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::common::helpers::*;

fn anchors() -> Anchors {
    Anchors(vec![("about", 3), ("experience", 20), ("projects", 45), ("blog", 90)])
}

struct Rig {
    tracker: SectionTracker,
    viewport: Viewport,
    layout: Rc<Anchors>,
    changes: Rc<RefCell<Vec<ActiveSectionChange>>>,
    _link: folio::tracker::Subscription,
    _log: folio::tracker::Subscription,
}

fn rig(options: TrackerOptions, smooth: SmoothScroll) -> Rig {
    let layout = Rc::new(anchors());
    let tracker = SectionTracker::new(layout.specs(), options).unwrap();
    let mut viewport = Viewport::new(smooth);

    let link = tracker.attach(viewport.scroll_stream(), layout.clone() as Rc<dyn AnchorSource>);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let log = tracker.subscribe(move |change| sink.borrow_mut().push(change.clone()));

    // 20 visible rows; tail padded so "blog" can reach the top
    viewport.resize(20, 90 - 3 + 20);
    changes.borrow_mut().clear();

    Rig {
        tracker,
        viewport,
        layout,
        changes,
        _link: link,
        _log: log,
    }
}

/// Tick the viewport in 16ms frames until the animation finishes.
fn animate(viewport: &mut Viewport, start: Instant) -> usize {
    let mut frames = 0;
    let mut now = start;
    while viewport.tick(now) {
        now += Duration::from_millis(16);
        frames += 1;
        assert!(frames < 1000, "animation never settled");
    }
    frames
}

// ============================================================================
// Eager navigation
// ============================================================================

#[test]
fn test_smooth_navigation_commits_target_once() {
    let mut rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let start = Instant::now();

    let command = rig.tracker.navigate("blog", &*rig.layout).unwrap();
    assert_eq!(command.target_offset, 87);
    rig.viewport.apply(command, start);
    assert!(rig.viewport.is_animating());

    let frames = animate(&mut rig.viewport, start);
    assert!(frames > 1, "the scroll should be animated");

    let changes = rig.changes.borrow();
    assert_eq!(changes.len(), 1, "intermediate sections must not flash: {changes:?}");
    assert_eq!(changes[0].previous, "about");
    assert_eq!(changes[0].current, "blog");
    assert_eq!(changes[0].cause, ChangeCause::Navigation);
    assert_eq!(rig.viewport.offset(), 87);
    assert_eq!(rig.tracker.active_section(), "blog");
    assert_eq!(rig.tracker.pending_navigation(), None);
}

#[test]
fn test_navigation_back_up_does_not_flicker() {
    let mut rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let start = Instant::now();

    rig.viewport.scroll_to(87);
    assert_eq!(rig.tracker.active_section(), "blog");
    rig.changes.borrow_mut().clear();

    let command = rig.tracker.navigate("experience", &*rig.layout).unwrap();
    rig.viewport.apply(command, start);
    animate(&mut rig.viewport, start);

    let currents: Vec<String> = rig.changes.borrow().iter().map(|c| c.current.clone()).collect();
    assert_eq!(currents, vec!["experience".to_string()]);
    assert_eq!(rig.tracker.active_section(), "experience");
}

#[test]
fn test_user_scroll_interrupts_navigation() {
    let mut rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let start = Instant::now();

    let command = rig.tracker.navigate("blog", &*rig.layout).unwrap();
    rig.viewport.apply(command, start);
    rig.viewport.tick(start + Duration::from_millis(50));
    assert_eq!(rig.tracker.pending_navigation(), Some("blog".to_string()));

    // the user grabs the page and goes back to the top
    rig.viewport.scroll_to(0);

    assert!(!rig.viewport.is_animating());
    assert_eq!(rig.tracker.pending_navigation(), None);
    assert_eq!(rig.tracker.active_section(), "about");
}

#[test]
fn test_scroll_at_the_edge_still_interrupts_navigation() {
    let mut rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let start = Instant::now();

    let command = rig.tracker.navigate("blog", &*rig.layout).unwrap();
    rig.viewport.apply(command, start);
    assert_eq!(rig.tracker.active_section(), "blog");

    // already at the top, so the offset does not move
    rig.viewport.scroll_by(-1);

    assert_eq!(rig.viewport.offset(), 0);
    assert!(!rig.viewport.is_animating());
    assert_eq!(rig.tracker.pending_navigation(), None);
    assert_eq!(rig.tracker.active_section(), "about");

    // later frames have nothing left to animate
    assert_eq!(animate(&mut rig.viewport, start), 0);
    assert_eq!(rig.tracker.active_section(), "about");
}

#[test]
fn test_scroll_past_the_end_still_interrupts_navigation() {
    let mut rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let start = Instant::now();
    rig.viewport.scroll_to(87);
    assert_eq!(rig.tracker.active_section(), "blog");

    let command = rig.tracker.navigate("about", &*rig.layout).unwrap();
    rig.viewport.apply(command, start);
    assert_eq!(rig.tracker.active_section(), "about");

    rig.viewport.scroll_by(1);

    assert_eq!(rig.viewport.offset(), 87);
    assert_eq!(rig.tracker.pending_navigation(), None);
    assert_eq!(rig.tracker.active_section(), "blog");
}

// ============================================================================
// Scroll-driven resolution
// ============================================================================

#[test]
fn test_lazy_navigation_follows_the_scroll() {
    let options = TrackerOptions {
        eager_update: false,
        ..TrackerOptions::default()
    };
    let mut rig = rig(options, SmoothScroll::default());
    let start = Instant::now();

    let command = rig.tracker.navigate("blog", &*rig.layout).unwrap();
    assert_eq!(rig.tracker.active_section(), "about");
    rig.viewport.apply(command, start);
    animate(&mut rig.viewport, start);

    let changes = rig.changes.borrow();
    assert!(changes.iter().all(|c| c.cause == ChangeCause::Scroll));
    assert_eq!(changes.last().map(|c| c.current.as_str()), Some("blog"));
}

#[test]
fn test_instant_navigation_settles_immediately() {
    let disabled = SmoothScroll {
        enabled: false,
        duration: Duration::from_millis(300),
    };
    let mut rig = rig(TrackerOptions::default(), disabled);

    let command = rig.tracker.navigate("projects", &*rig.layout).unwrap();
    rig.viewport.apply(command, Instant::now());

    assert!(!rig.viewport.is_animating());
    assert_eq!(rig.viewport.offset(), 42);
    assert_eq!(rig.tracker.active_section(), "projects");
    assert_eq!(rig.changes.borrow().len(), 1);
}

#[test]
fn test_wheel_scrolling_walks_through_sections() {
    let mut rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let mut seen = vec![rig.tracker.active_section()];

    for _ in 0..40 {
        rig.viewport.scroll_by(3);
        let active = rig.tracker.active_section();
        if seen.last() != Some(&active) {
            seen.push(active);
        }
    }

    assert_eq!(seen, vec!["about", "experience", "projects", "blog"]);
}

#[test]
fn test_low_threshold_settles_on_previous_section() {
    // a threshold smaller than the header lets the header hide the target
    let options = TrackerOptions {
        offset_threshold: 0,
        header_height: 3,
        eager_update: true,
    };
    let mut rig = rig(options, SmoothScroll::default());
    let start = Instant::now();

    let command = rig.tracker.navigate("projects", &*rig.layout).unwrap();
    rig.viewport.apply(command, start);
    animate(&mut rig.viewport, start);

    assert_eq!(rig.tracker.active_section(), "experience");
}

#[test]
fn test_detached_tracker_stops_listening() {
    let rig = rig(TrackerOptions::default(), SmoothScroll::default());
    let Rig {
        tracker,
        mut viewport,
        _link: link,
        ..
    } = rig;

    drop(link);
    viewport.scroll_to(87);

    assert_eq!(tracker.active_section(), "about");
    assert!(viewport.scroll_stream().is_empty());
}
