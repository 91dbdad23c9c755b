//! Detail overlay: a modal showing one asset.
//!
//! Closed → Open(asset) → Closed, closed only by Escape, a backdrop click,
//! or the Close control. The opener registers the table row it was opened
//! from; on close the overlay hands that row back so the cursor can be
//! restored, falling back to the first row when the opener is gone.

use crate::domain::assets::Asset;

/// Focusable controls inside the overlay, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayControl {
    Close,
    CopyId,
}

impl OverlayControl {
    pub const ALL: [OverlayControl; 2] = [OverlayControl::Close, OverlayControl::CopyId];

    pub fn title(&self) -> &'static str {
        match self {
            OverlayControl::Close => "Close",
            OverlayControl::CopyId => "Copy id",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailOverlay {
    /// Snapshot of the asset on display; independent of the query state.
    pub asset: Asset,
    pub focused: OverlayControl,
    opener_row: usize,
}

impl DetailOverlay {
    /// Focus lands on the Close control when the overlay opens.
    pub fn open(asset: Asset, opener_row: usize) -> Self {
        Self {
            asset,
            focused: OverlayControl::Close,
            opener_row,
        }
    }

    /// Tab: next control, wrapping from last to first.
    pub fn focus_next(&mut self) {
        let idx = Self::control_index(self.focused);
        self.focused = OverlayControl::ALL[(idx + 1) % OverlayControl::ALL.len()];
    }

    /// Shift+Tab: previous control, wrapping from first to last.
    pub fn focus_prev(&mut self) {
        let len = OverlayControl::ALL.len();
        let idx = Self::control_index(self.focused);
        self.focused = OverlayControl::ALL[(idx + len - 1) % len];
    }

    /// Row the cursor should return to, given the current view length.
    pub fn return_row(&self, view_len: usize) -> usize {
        if self.opener_row < view_len {
            self.opener_row
        } else {
            0
        }
    }

    fn control_index(control: OverlayControl) -> usize {
        OverlayControl::ALL
            .iter()
            .position(|c| *c == control)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assets::mock_assets;

    #[test]
    fn test_focus_cycles_both_directions() {
        let asset = mock_assets().remove(0);
        let mut overlay = DetailOverlay::open(asset, 0);
        assert_eq!(overlay.focused, OverlayControl::Close);

        overlay.focus_next();
        assert_eq!(overlay.focused, OverlayControl::CopyId);
        overlay.focus_next();
        assert_eq!(overlay.focused, OverlayControl::Close);

        overlay.focus_prev();
        assert_eq!(overlay.focused, OverlayControl::CopyId);
    }

    #[test]
    fn test_return_row_falls_back_to_first() {
        let asset = mock_assets().remove(0);
        let overlay = DetailOverlay::open(asset, 3);
        assert_eq!(overlay.return_row(5), 3);
        assert_eq!(overlay.return_row(2), 0);
        assert_eq!(overlay.return_row(0), 0);
    }
}
