//! Standard widgets for Horizon Trellis.
//!
//! This module provides common UI widgets:
//!
//! - [`Label`]: Text display widget
//! - [`PushButton`]: Standard clickable button
//! - [`CheckBox`]: Two-state toggle button
//! - [`Slider`]: Bounded integer value selector
//! - [`Panel`]: Plain container over a child list
//! - [`EntryList`]: Scrolling vertical list of entries
//! - [`TabbedPane`]: Tab selector column with a content area

mod checkbox;
mod entry_list;
mod label;
mod panel;
mod push_button;
mod slider;
mod tabbed;

pub use checkbox::CheckBox;
pub use entry_list::EntryList;
pub use label::Label;
pub use panel::Panel;
pub use push_button::PushButton;
pub use slider::Slider;
pub use tabbed::{PaneRegion, TabError, TabList, TabListEntry, TabbedPane};
