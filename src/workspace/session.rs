use crate::model::SectionId;

/// Left-group tab being dragged. `source_index` is where `id` sat when the
/// drag started; the session is void once that no longer holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub id: SectionId,
    pub source_index: usize,
    pub hover_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    /// Distance between the pointer and the splitter's left edge at grab time.
    pub grab_offset: f32,
}

/// The single pointer interaction slot. At most one session runs at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    TabDrag(DragState),
    Resize(ResizeSession),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn begin_drag(&mut self, id: SectionId, source_index: usize) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Interaction::TabDrag(DragState {
            id,
            source_index,
            hover_index: source_index,
        });
        log::debug!("drag start: {} at tab {}", id, source_index);
        true
    }

    pub fn begin_resize(&mut self, grab_offset: f32) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Interaction::Resize(ResizeSession { grab_offset });
        log::debug!("resize start (grab offset {})", grab_offset);
        true
    }

    pub fn hover(&mut self, index: usize) {
        if let Interaction::TabDrag(drag) = self {
            drag.hover_index = index;
        }
    }

    /// Ends whatever session is running and hands it back for the caller to
    /// commit. The slot is `Idle` afterwards regardless.
    pub fn finish(&mut self) -> Interaction {
        std::mem::take(self)
    }

    pub fn cancel(&mut self) {
        if !self.is_idle() {
            log::debug!("interaction cancelled");
        }
        *self = Interaction::Idle;
    }
}
