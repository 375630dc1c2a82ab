//! Form row positioning for mouse event handling
//!
//! The renderer and the mouse handler share these constants so a click maps
//! to the same row that was drawn there.

use super::FormField;
use ratatui::layout::Rect;

/// Border/margin around the form content, on every side
pub const FORM_TOP: u16 = 1;

/// Height of the status bar under the form
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of a bordered input box (top border + content + bottom border)
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the error line below each input
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Height of an input row including its error line
pub const FIELD_ROW_HEIGHT: u16 = INPUT_HEIGHT + ERROR_LINE_HEIGHT;

/// Height of the submit button row
pub const BUTTON_ROW_HEIGHT: u16 = 3;

/// Width of the submit button
pub const BUTTON_WIDTH: u16 = 14;

/// Height of the help text under the button
pub const HELP_HEIGHT: u16 = 2;

/// Smallest form area that fits every row at its full height.
///
/// Below this ratatui shrinks the rows and `FormLayout` no longer matches what
/// is on screen.
pub const MIN_FORM_HEIGHT: u16 =
    FORM_TOP + 4 * FIELD_ROW_HEIGHT + BUTTON_ROW_HEIGHT + HELP_HEIGHT + FORM_TOP;

/// Vertical layout of the registration form
///
/// ```text
/// Row 0:      Outer border
/// Row 1-4:    Email (input + error line)
/// Row 5-8:    Password
/// Row 9-12:   Repeat password
/// Row 13-16:  Terms checkbox
/// Row 17-19:  Submit button
/// ```
pub struct FormLayout;

impl FormLayout {
    /// Height of the given row in the layout
    #[inline]
    pub const fn row_height(field: FormField) -> u16 {
        match field {
            FormField::SubmitButton => BUTTON_ROW_HEIGHT,
            _ => FIELD_ROW_HEIGHT,
        }
    }

    /// Starting Y of the given row, relative to the form area
    pub fn start_y(field: FormField) -> u16 {
        FORM_TOP
            + FormField::ALL
                .iter()
                .take_while(|f| **f != field)
                .map(|f| Self::row_height(*f))
                .sum::<u16>()
    }

    /// Map a row relative to the form area to the form field drawn there
    pub fn field_at_row(row: u16) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| {
            let start = Self::start_y(*field);
            // Clicks on the error line under an input don't focus it
            let clickable = match field {
                FormField::SubmitButton => BUTTON_ROW_HEIGHT,
                _ => INPUT_HEIGHT,
            };
            row >= start && row < start + clickable
        })
    }

    /// Map a click inside `form_area` to the form field drawn under it.
    ///
    /// Returns `None` when the area is too short for the fixed layout, or the
    /// click misses every field.
    pub fn field_at(form_area: Rect, column: u16, row: u16) -> Option<FormField> {
        if form_area.height < MIN_FORM_HEIGHT {
            return None;
        }
        let column = column.checked_sub(form_area.x)?;
        let row = row.checked_sub(form_area.y)?;
        if column < FORM_TOP || column >= form_area.width.saturating_sub(FORM_TOP) {
            return None;
        }
        let field = Self::field_at_row(row)?;
        if field == FormField::SubmitButton && column >= FORM_TOP + BUTTON_WIDTH {
            return None;
        }
        Some(field)
    }
}
