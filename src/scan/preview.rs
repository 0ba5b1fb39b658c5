// SPDX-License-Identifier: MPL-2.0
//! Registry of preview image handles.
//!
//! Each accepted upload gets exactly one live preview. The controller
//! releases it when the image is replaced or the lifecycle resets, so the
//! number of live previews never exceeds one.

use iced::widget::image::Handle;
use std::collections::HashMap;

/// Reference to a preview held by a [`PreviewRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

#[derive(Debug, Default)]
pub struct PreviewRegistry {
    handles: HashMap<PreviewId, Handle>,
    next_id: u64,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers encoded image bytes and returns a reference to them.
    pub fn create(&mut self, bytes: Vec<u8>) -> PreviewId {
        let id = PreviewId(self.next_id);
        self.next_id += 1;
        self.handles.insert(id, Handle::from_bytes(bytes));
        id
    }

    #[must_use]
    pub fn get(&self, id: PreviewId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    /// Releases a preview. Returns `false` if it was already released.
    pub fn release(&mut self, id: PreviewId) -> bool {
        self.handles.remove(&id).is_some()
    }

    /// Number of previews not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}
