//! View adapter the controller renders through.
//!
//! The controller owns all time and angle math; the host toolkit implements
//! [`DialView`] to draw positions, header text, and mode transitions.
use std::fmt;

use crate::{
    layout::{DialPosition, DisplayMode},
    time::DayPeriod,
};

/// Named elements a view must provide before the controller can drive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialPart {
    /// Text showing the hour.
    HoursHeader,
    /// Text showing the minute.
    MinutesHeader,
    /// Surface holding the hour positions.
    HoursCanvas,
    /// Surface holding the minute positions.
    MinutesCanvas,
    /// Hand drawn from the centre to the selected hour.
    HoursHand,
}

impl DialPart {
    /// Every part the controller depends on, in check order.
    pub const REQUIRED: [DialPart; 5] = [
        DialPart::HoursHeader,
        DialPart::MinutesHeader,
        DialPart::HoursCanvas,
        DialPart::MinutesCanvas,
        DialPart::HoursHand,
    ];

    /// Human readable part name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            DialPart::HoursHeader => "hours header",
            DialPart::MinutesHeader => "minutes header",
            DialPart::HoursCanvas => "hours canvas",
            DialPart::MinutesCanvas => "minutes canvas",
            DialPart::HoursHand => "hours hand",
        }
    }
}

impl fmt::Display for DialPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text for the header above the dial.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderText {
    /// Two-digit hour, folded to 1-12 in 12-hour mode.
    pub hours: String,
    /// Two-digit minute.
    pub minutes: String,
    /// AM/PM indicator; `None` in 24-hour mode.
    pub period: Option<DayPeriod>,
}

/// Rendering surface for a dial controller.
pub trait DialView {
    /// Returns whether the view can render `part`.
    fn provides(&self, part: DialPart) -> bool;

    /// Replaces every position shown for `member`.
    ///
    /// An empty slice means the canvas is not laid out yet.
    fn render_ring(&mut self, member: DisplayMode, positions: &[DialPosition]);

    /// Marks `selected` as the only checked position of `member`'s ring.
    fn show_selection(&mut self, member: DisplayMode, selected: Option<&DialPosition>);

    /// Updates the header text.
    fn update_header(&mut self, header: &HeaderText);

    /// Switches the visible ring.
    fn transition_to(&mut self, mode: DisplayMode);
}

/// View that provides every part and draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessView;

impl DialView for HeadlessView {
    fn provides(&self, _part: DialPart) -> bool {
        true
    }

    fn render_ring(&mut self, _member: DisplayMode, _positions: &[DialPosition]) {}

    fn show_selection(&mut self, _member: DisplayMode, _selected: Option<&DialPosition>) {}

    fn update_header(&mut self, _header: &HeaderText) {}

    fn transition_to(&mut self, _mode: DisplayMode) {}
}

/// Returns the first required part `view` cannot provide.
pub fn first_missing_part(view: &impl DialView) -> Option<DialPart> {
    DialPart::REQUIRED
        .into_iter()
        .find(|&part| !view.provides(part))
}


#[cfg(test)]
mod tests {
    use super::{testing::RecordingView, *};

    #[test]
    fn test_first_missing_part() {
        assert_eq!(first_missing_part(&HeadlessView), None);
        assert_eq!(
            first_missing_part(&RecordingView::without(DialPart::MinutesCanvas)),
            Some(DialPart::MinutesCanvas)
        );
    }

    #[test]
    fn test_part_names_are_readable() {
        assert_eq!(DialPart::HoursHand.to_string(), "hours hand");
    }
}
