//! Reusable UI components for the popup.

mod button;
mod focus_cards;
mod input;
mod suffix_select;

pub use button::*;
pub use focus_cards::*;
pub use input::*;
pub use suffix_select::*;
