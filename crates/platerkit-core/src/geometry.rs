//! Window geometry
//!
//! Position and size of a top-level window, as persisted between sessions.

use serde::{Deserialize, Serialize};

/// Screen position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grow each dimension to at least `min`
    pub fn clamp_min(self, min: Size) -> Size {
        Size {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Saved window placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub maximized: bool,
}

impl WindowGeometry {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
            maximized: false,
        }
    }

    pub fn with_maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_min_grows_small_dimensions() {
        let min = Size::new(760, 490);
        assert_eq!(Size::new(640, 800).clamp_min(min), Size::new(760, 800));
        assert_eq!(Size::new(1200, 300).clamp_min(min), Size::new(1200, 490));
        assert_eq!(Size::new(1920, 1080).clamp_min(min), Size::new(1920, 1080));
    }

    #[test]
    fn test_geometry_accessors() {
        let geometry = WindowGeometry::new(Point::new(10, -20), Size::new(800, 600));
        assert_eq!(geometry.position(), Point::new(10, -20));
        assert_eq!(geometry.size().to_string(), "800x600");
        assert!(!geometry.maximized);
        assert!(geometry.with_maximized(true).maximized);
    }

    #[test]
    fn test_geometry_missing_maximized_defaults_to_false() {
        let geometry: WindowGeometry =
            serde_json::from_str(r#"{"x":1,"y":2,"width":800,"height":600}"#).unwrap();
        assert_eq!(geometry.size(), Size::new(800, 600));
        assert!(!geometry.maximized);
    }
}
