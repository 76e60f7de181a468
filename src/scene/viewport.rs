/// Drawable surface size and pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    max_pixel_ratio: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32, max_pixel_ratio: f32) -> Self {
        let mut viewport = Self {
            width: 1,
            height: 1,
            pixel_ratio: 1.0,
            max_pixel_ratio,
        };
        viewport.resize(width, height, device_pixel_ratio);
        viewport
    }

    /// Applies a new window size. Zero dimensions are clamped to one pixel.
    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(self.max_pixel_ratio)
        } else {
            1.0
        };
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Size of the backing buffer in physical pixels.
    #[must_use]
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width as f32 * self.pixel_ratio).round() as u32,
            (self.height as f32 * self.pixel_ratio).round() as u32,
        )
    }
}
