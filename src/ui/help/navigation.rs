#[derive(Debug, Clone)]
pub struct HelpModalState {
    pub current_section: HelpSection,
    pub scroll_offset: u16,
    pub max_scroll: u16,
    pub app_version: String,
    pub site_title: String,
    pub offset_threshold: u32,
    pub header_height: u32,
    pub smooth_scroll: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSection {
    About,
    Navigation,
    KeyboardShortcuts,
}

impl HelpSection {
    pub fn next(self) -> Self {
        match self {
            Self::About => Self::Navigation,
            Self::Navigation => Self::KeyboardShortcuts,
            Self::KeyboardShortcuts => Self::About,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::About => Self::KeyboardShortcuts,
            Self::Navigation => Self::About,
            Self::KeyboardShortcuts => Self::Navigation,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::About => "About",
            Self::Navigation => "Navigation",
            Self::KeyboardShortcuts => "Keyboard Shortcuts",
        }
    }

    pub fn all_sections() -> Vec<Self> {
        vec![Self::About, Self::Navigation, Self::KeyboardShortcuts]
    }
}
