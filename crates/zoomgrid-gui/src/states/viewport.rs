/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Size of the last rendered composite.
    pub image_size: Option<[usize; 2]>,
    /// Scroll offset added on top of the centred position.
    pub pan_offset: egui::Vec2,
    /// `pan_offset` when the current primary drag began. Pointer positions
    /// are mapped with it so scrolling mid-drag does not feed back into the
    /// drag deltas.
    pub drag_pan: Option<egui::Vec2>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            pan_offset: egui::Vec2::ZERO,
            drag_pan: None,
        }
    }
}
