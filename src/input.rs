//! Draft text, input auto-sizing and submit-key handling.

use crate::config::ChatConfig;

/// Unsent text of the input control, stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Stores the raw input value. No trimming or validation happens here.
    pub fn on_change(&mut self, raw: impl Into<String>) {
        self.text = raw.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the draft holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clears the draft and returns its previous contents.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    pub fn as_css(&self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
        }
    }
}

/// Computed visual height of the input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHeight {
    pub px: u32,
    pub overflow: Overflow,
}

impl InputHeight {
    pub fn css_height(&self) -> String {
        format!("{}px", self.px)
    }
}

/// Grows the input with its content between a minimum and a maximum height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSizing {
    min_px: u32,
    max_px: u32,
}

impl InputSizing {
    pub fn new(min_px: u32, max_px: u32) -> Self {
        Self { min_px, max_px: max_px.max(min_px) }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.input_min_height_px, config.input_max_height_px)
    }

    /// Height for content measuring `scroll_height_px`. Past the maximum the
    /// height is clamped and the control scrolls.
    pub fn fit(&self, scroll_height_px: u32) -> InputHeight {
        if scroll_height_px > self.max_px {
            InputHeight { px: self.max_px, overflow: Overflow::Auto }
        } else {
            InputHeight { px: scroll_height_px.max(self.min_px), overflow: Overflow::Hidden }
        }
    }

    /// Height of an empty control, applied after a submit.
    pub fn reset(&self) -> InputHeight {
        InputHeight { px: self.min_px, overflow: Overflow::Hidden }
    }
}

impl Default for InputSizing {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Run the send path and suppress the default newline.
    Submit,
    Default,
}

/// Maps a keydown in the input to its action. Shift+Enter keeps inserting a
/// newline.
pub fn key_action(key: &str, shift: bool) -> KeyAction {
    if key == "Enter" && !shift {
        KeyAction::Submit
    } else {
        KeyAction::Default
    }
}

/// "Deep think" toggle shown next to the input. View-local only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepThink(bool);

impl DeepThink {
    pub fn is_active(&self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_change_keeps_raw_text() {
        let mut draft = Draft::default();
        draft.on_change("  two\nlines  ");
        assert_eq!(draft.text(), "  two\nlines  ");
        assert!(!draft.is_blank());
    }

    #[test]
    fn whitespace_only_draft_is_blank() {
        assert!(Draft::new(" \n\t ").is_blank());
        assert!(Draft::default().is_blank());
    }

    #[test]
    fn take_clears_the_draft() {
        let mut draft = Draft::new("hello");
        assert_eq!(draft.take(), "hello");
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn height_follows_content_within_bounds() {
        let sizing = InputSizing::new(44, 192);
        assert_eq!(sizing.fit(20), InputHeight { px: 44, overflow: Overflow::Hidden });
        assert_eq!(sizing.fit(120), InputHeight { px: 120, overflow: Overflow::Hidden });
        assert_eq!(sizing.fit(192), InputHeight { px: 192, overflow: Overflow::Hidden });
    }

    #[test]
    fn height_clamps_and_scrolls_past_maximum() {
        let sizing = InputSizing::new(44, 192);
        let height = sizing.fit(500);
        assert_eq!(height.px, 192);
        assert_eq!(height.overflow, Overflow::Auto);
        assert_eq!(height.css_height(), "192px");
        assert_eq!(height.overflow.as_css(), "auto");
    }

    #[test]
    fn reset_returns_to_minimum() {
        assert_eq!(InputSizing::default().reset().px, 44);
    }

    #[test]
    fn inverted_bounds_collapse_to_minimum() {
        let sizing = InputSizing::new(60, 10);
        assert_eq!(sizing.fit(100).px, 60);
    }

    #[test]
    fn plain_enter_submits_and_shift_enter_does_not() {
        assert_eq!(key_action("Enter", false), KeyAction::Submit);
        assert_eq!(key_action("Enter", true), KeyAction::Default);
        assert_eq!(key_action("a", false), KeyAction::Default);
    }

    #[test]
    fn deep_think_toggles() {
        let mut deep = DeepThink::default();
        deep.toggle();
        assert!(deep.is_active());
        deep.toggle();
        assert!(!deep.is_active());
    }
}
