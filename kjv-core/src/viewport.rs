use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in document coordinates (pixels, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The overlapping region, if the rectangles overlap with non-zero area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scroll_y: 0.0,
        }
    }

    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }

    /// Fraction of `element`'s area currently inside the viewport, in `0.0..=1.0`.
    ///
    /// Zero-area elements count as fully visible while their top edge lies
    /// inside the viewport.
    pub fn intersection_ratio(&self, element: &Rect) -> f64 {
        let visible = self.visible_rect();

        if element.area() <= 0.0 {
            let inside = element.y >= visible.y && element.y <= visible.bottom();
            return if inside { 1.0 } else { 0.0 };
        }

        match element.intersection(&visible) {
            Some(overlap) => (overlap.area() / element.area()).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}
