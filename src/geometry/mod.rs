//! Spatial mapping from named regions onto the 1-D pixel chain

mod layout;
mod pattern_table;

pub use layout::PanelLayout;
pub use pattern_table::PatternTable;
