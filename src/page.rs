use std::time::Duration;

use crate::nav::Anchor;

/// How long the splash stays up before the page is revealed.
pub const SPLASH_DURATION: Duration = Duration::from_millis(1500);

/// Sections mounted by the page, top to bottom.
pub const SECTIONS: [Anchor; 5] = Anchor::ALL;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    #[default]
    Loading,
    Ready,
}

impl ShellPhase {
    /// The only transition: the splash gate opens and never closes again.
    pub fn advance(self) -> Self {
        ShellPhase::Ready
    }

    pub fn is_ready(self) -> bool {
        self == ShellPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_is_one_way() {
        let phase = ShellPhase::default();
        assert!(!phase.is_ready());
        let phase = phase.advance();
        assert!(phase.is_ready());
        assert_eq!(phase.advance(), ShellPhase::Ready);
    }

    #[test]
    fn test_sections_in_page_order() {
        let ids = SECTIONS.map(Anchor::id);
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
    }
}
