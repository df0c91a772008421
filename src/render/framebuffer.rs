/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }
}

/// 渲染目標：只需要清除與填充矩形兩種操作
pub trait RenderSink {
    fn clear(&mut self, color: u32);
    fn fill_rect(&mut self, rect: Rect, color: u32);
}

/// 0RGB 幀緩衝區，可直接交給 minifb
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

impl RenderSink for FrameBuffer {
    fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        // 超出邊界的部分直接裁掉
        let x_end = (rect.x + rect.w).min(self.width);
        let y_end = (rect.y + rect.h).min(self.height);
        if rect.x >= x_end {
            return;
        }
        for y in rect.y..y_end {
            let row = y * self.width;
            self.pixels[row + rect.x..row + x_end].fill(color);
        }
    }
}
