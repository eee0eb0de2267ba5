//! Host capabilities consumed by the effect runner.
//!
//! The engine never touches widgets directly. Whatever toolkit renders the
//! combo box implements [`Host`] and hands it to [`crate::ComboBox::mount`]; the
//! runner forwards focus, highlight and layout effects to it. Every method has
//! a no-op default so a host only implements what it can actually do.

/// Widget-level operations a combo box needs from its host.
pub trait Host {
    /// Moves keyboard focus to the text input.
    fn focus_input(&self) {}

    /// Selects the entire input text.
    fn select_input_text(&self) {}

    /// Highlights the menu row at `index`, or clears the highlight.
    fn highlight_item(&self, _index: Option<usize>) {}

    /// Moves the highlight by `step` rows, skipping disabled rows.
    fn move_highlight(&self, _step: isize) {}

    /// Scrolls the menu so the highlighted row is visible.
    fn scroll_to_highlighted(&self) {}

    /// Activates the highlighted row, usually by calling
    /// [`crate::ComboBox::activate`] with its index.
    fn select_highlighted(&self) {}

    /// Tells layout observers the menu size may have changed.
    fn notify_layout(&self) {}
}

/// Host without any capabilities.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedHost;

impl Host for DetachedHost {}
