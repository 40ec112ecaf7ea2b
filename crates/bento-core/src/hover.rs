//! Hover tracking for a grid of focus tiles.

/// How a tile should be drawn given the grid's hover state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileEmphasis {
    /// Nothing in the grid is hovered
    Resting,
    /// This tile is hovered: title overlay fully visible
    Focused,
    /// Another tile is hovered: blurred and slightly shrunk
    Dimmed,
}

impl TileEmphasis {
    /// Returns the CSS modifier class for this state
    pub fn class(&self) -> &'static str {
        match self {
            TileEmphasis::Resting => "focus-card",
            TileEmphasis::Focused => "focus-card focused",
            TileEmphasis::Dimmed => "focus-card dimmed",
        }
    }

    /// Whether the title overlay is shown
    pub fn shows_title(&self) -> bool {
        matches!(self, TileEmphasis::Focused)
    }
}

/// At most one hovered tile per grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered tile `index`
    pub fn enter(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Pointer left a tile. Any tile leaving clears the hover.
    pub fn leave(&mut self) {
        self.index = None;
    }

    /// Forget the hovered tile because the tiles themselves changed.
    ///
    /// Returns whether a tile was hovered.
    pub fn clear(&mut self) -> bool {
        self.index.take().is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn emphasis(&self, index: usize) -> TileEmphasis {
        match self.index {
            None => TileEmphasis::Resting,
            Some(hovered) if hovered == index => TileEmphasis::Focused,
            Some(_) => TileEmphasis::Dimmed,
        }
    }
}
