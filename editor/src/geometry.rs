//! Points, rectangles and the image/container view transform.
//!
//! Two coordinate spaces meet here. *Image space* addresses pixels of the
//! unscaled source image and is always integral. *Container space* is the
//! on-screen surface the image is drawn into. A [`ViewTransform`] maps one to
//! the other with `container = image * scale + offset`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either image or container space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    #[must_use]
    pub fn offset_by(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Axis-aligned rectangle given by two opposite corners.
///
/// Not normalized: `x1 > x2` or `y1 > y2` is legal while a resize drags one
/// edge past the other. Use [`Rect::normalized`] when min/max order matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The rectangle spanned by two arbitrary corner points, normalized.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y).normalized()
    }

    /// Same rectangle with `x1 <= x2` and `y1 <= y2`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// All four coordinates shifted by `delta`.
    #[must_use]
    pub fn translated(self, delta: Point) -> Self {
        Self {
            x1: self.x1 + delta.x,
            y1: self.y1 + delta.y,
            x2: self.x2 + delta.x,
            y2: self.y2 + delta.y,
        }
    }

    /// Inclusive containment test; works on inverted rectangles too.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let n = self.normalized();
        p.x >= n.x1 && p.x <= n.x2 && p.y >= n.y1 && p.y <= n.y2
    }
}

/// Pixel dimensions of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// How the source image is scaled and positioned inside the container.
///
/// `scale` stays within the configured bounds; every zoom path goes through
/// [`ViewTransform::zoomed`] or [`clamp_scale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0, offset: Point::default() }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn new(scale: f64, offset: Point) -> Self {
        Self { scale, offset }
    }

    /// Convert an image-space point to container space.
    #[must_use]
    pub fn image_to_container(&self, image: Point) -> Point {
        Point {
            x: image.x * self.scale + self.offset.x,
            y: image.y * self.scale + self.offset.y,
        }
    }

    /// Convert a container-space point to image space, rounded to whole pixels.
    #[must_use]
    pub fn container_to_image(&self, container: Point) -> Point {
        Point {
            x: ((container.x - self.offset.x) / self.scale).round(),
            y: ((container.y - self.offset.y) / self.scale).round(),
        }
    }

    /// Convert both corners of an image-space rectangle to container space.
    #[must_use]
    pub fn rect_image_to_container(&self, rect: Rect) -> Rect {
        let a = self.image_to_container(Point::new(rect.x1, rect.y1));
        let b = self.image_to_container(Point::new(rect.x2, rect.y2));
        Rect::new(a.x, a.y, b.x, b.y)
    }

    /// Convert both corners of a container-space rectangle to image space.
    #[must_use]
    pub fn rect_container_to_image(&self, rect: Rect) -> Rect {
        let a = self.container_to_image(Point::new(rect.x1, rect.y1));
        let b = self.container_to_image(Point::new(rect.x2, rect.y2));
        Rect::new(a.x, a.y, b.x, b.y)
    }

    /// Container-space bounds of an image of the given size.
    #[must_use]
    pub fn image_bounds(&self, size: Size) -> Rect {
        self.rect_image_to_container(Rect::new(0.0, 0.0, size.width, size.height))
    }

    /// Offset shifted by a container-space delta.
    #[must_use]
    pub fn panned(self, delta: Point) -> Self {
        Self { scale: self.scale, offset: self.offset.offset_by(delta) }
    }

    /// Scale multiplied by `factor` and clamped to `[min, max]`, keeping the
    /// image point under `anchor` (container space) fixed on screen.
    #[must_use]
    pub fn zoomed(self, factor: f64, anchor: Point, min: f64, max: f64) -> Self {
        let scale = clamp_scale(self.scale * factor, min, max);
        let ratio = scale / self.scale;
        Self {
            scale,
            offset: Point {
                x: anchor.x - (anchor.x - self.offset.x) * ratio,
                y: anchor.y - (anchor.y - self.offset.y) * ratio,
            },
        }
    }
}

/// Clamp a scale into `[min, max]`.
#[must_use]
pub fn clamp_scale(scale: f64, min: f64, max: f64) -> f64 {
    scale.clamp(min, max)
}

/// Free-function form of [`ViewTransform::image_to_container`].
#[must_use]
pub fn image_to_container(point: Point, transform: &ViewTransform) -> Point {
    transform.image_to_container(point)
}

/// Free-function form of [`ViewTransform::container_to_image`].
#[must_use]
pub fn container_to_image(point: Point, transform: &ViewTransform) -> Point {
    transform.container_to_image(point)
}

/// Free-function form of [`ViewTransform::rect_image_to_container`].
#[must_use]
pub fn rect_image_to_container(rect: Rect, transform: &ViewTransform) -> Rect {
    transform.rect_image_to_container(rect)
}

/// Free-function form of [`ViewTransform::rect_container_to_image`].
#[must_use]
pub fn rect_container_to_image(rect: Rect, transform: &ViewTransform) -> Rect {
    transform.rect_container_to_image(rect)
}
