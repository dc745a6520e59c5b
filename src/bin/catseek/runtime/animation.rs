/// Frame counter behind the status-line cat.
///
/// Ticks once per runtime tick while enabled. Render code derives the
/// visible frame from the counter so a disabled animation simply
/// freezes on the resting face.
#[derive(Debug)]
pub struct AnimationState {
    enabled: bool,
    frame: usize,
}

impl AnimationState {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, frame: 0 }
    }

    pub fn tick(&mut self) {
        if self.enabled {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    /// Turns the animation off for the rest of the session. Used when
    /// frames render too slowly to keep up with the tick rate.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.frame = 0;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn frame(&self) -> usize {
        self.frame
    }
}
