//! Top-level view state.
//!
//! [`AppView`] lives for the whole session. It tracks which screen is shown
//! and carries a scanned barcode from the scanner to whichever form consumes
//! it next. No validation, no failure modes.

/// The screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Main,
    CreateFood,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Main => "main",
            ViewKind::CreateFood => "create-food",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-lifetime navigation state.
#[derive(Debug, Clone)]
pub struct AppView {
    current: ViewKind,
    scanned_barcode: Option<String>,
}

impl AppView {
    /// Creates the view state showing `initial`. The initial view comes from
    /// [`crate::AppConfig`] rather than being hardcoded.
    pub fn new(initial: ViewKind) -> Self {
        Self {
            current: initial,
            scanned_barcode: None,
        }
    }

    pub fn current(&self) -> ViewKind {
        self.current
    }

    pub fn switch_view(&mut self, view: ViewKind) {
        self.current = view;
    }

    /// Stores a barcode decoded by the scanner, en route to the form.
    pub fn record_scanned_barcode(&mut self, barcode: u64) {
        self.scanned_barcode = Some(barcode.to_string());
    }

    pub fn scanned_barcode(&self) -> Option<&str> {
        self.scanned_barcode.as_deref()
    }

    /// Hands the pending barcode to the caller, clearing it so a form can
    /// consume it exactly once.
    pub fn take_scanned_barcode(&mut self) -> Option<String> {
        self.scanned_barcode.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_views_replaces_current() {
        let mut view = AppView::new(ViewKind::CreateFood);
        assert_eq!(view.current(), ViewKind::CreateFood);

        view.switch_view(ViewKind::Main);
        assert_eq!(view.current(), ViewKind::Main);
    }

    #[test]
    fn scanned_barcode_is_consumed_once() {
        let mut view = AppView::new(ViewKind::Main);
        assert_eq!(view.scanned_barcode(), None);

        view.record_scanned_barcode(12345678905);
        assert_eq!(view.scanned_barcode(), Some("12345678905"));

        assert_eq!(view.take_scanned_barcode().as_deref(), Some("12345678905"));
        assert_eq!(view.take_scanned_barcode(), None);
    }
}
