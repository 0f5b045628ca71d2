pub const MIN_RATIO: f32 = 0.2;
pub const MAX_RATIO: f32 = 0.8;

/// Share of the editor width given to the left group while split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitRatio(f32);

impl SplitRatio {
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(MIN_RATIO, MAX_RATIO))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self(0.5)
    }
}

/// Converts a splitter drag position into a ratio.
///
/// The left pane width is `pointer_x - container_left - grab_offset`, kept so
/// that both panes are at least `min_pane` wide, then expressed as a fraction
/// of `container_width` and clamped to the ratio bounds. Returns `None` for a
/// zero-width container.
pub fn ratio_from_pointer(
    pointer_x: f32,
    container_left: f32,
    grab_offset: f32,
    container_width: f32,
    min_pane: f32,
) -> Option<f32> {
    if container_width <= 0.0 {
        return None;
    }
    let upper = (container_width - min_pane).max(min_pane);
    let left_width = (pointer_x - container_left - grab_offset).clamp(min_pane, upper);
    Some(SplitRatio::new(left_width / container_width).get())
}
