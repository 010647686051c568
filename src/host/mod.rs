// Host environment for the tracker: the scrollable viewport and its scroll stream

pub mod viewport;

pub use viewport::{SmoothScroll, Viewport, ease_in_out_cubic};
