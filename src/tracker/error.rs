use thiserror::Error;

/// Errors raised by the section tracker and navigator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("section list is empty; a page needs at least one section")]
    EmptySectionList,

    #[error("section '{0}' appears more than once in the section list")]
    DuplicateSection(String),

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("section '{0}' has no anchor in the current layout")]
    AnchorMissing(String),
}
