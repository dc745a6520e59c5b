mod pager;
mod picker;

pub use pager::PagerState;
pub use picker::{PickerItem, PickerState};

/// The modal surface drawn over the chat, if any.
///
/// Only one overlay is open at a time; opening a new one replaces the
/// current one.
#[derive(Debug)]
pub enum OverlayState {
    None,
    Help,
    EnginePicker(PickerState),
    ChatPicker(PickerState),
    Pager(PagerState),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
