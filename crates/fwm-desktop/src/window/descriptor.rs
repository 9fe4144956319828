//! Window descriptor: the geometry a new window is created from

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::DescriptorError;
use crate::math::{Point, Size};

/// Geometry and optional title for creating a window
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WindowDescriptor {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Title shown by the chrome (not used by the core)
    #[serde(default)]
    pub title: Option<String>,
}

impl WindowDescriptor {
    /// Create a descriptor without a title
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height, title: None }
    }

    /// Attach a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build from textual attributes.
    ///
    /// `lookup` is asked for `x`, `y`, `width`, `height` and `title`.
    /// Geometry values are trimmed and parsed strictly as base-10 integers;
    /// a missing or unparsable value rejects the whole descriptor.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, DescriptorError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let int = |field: &'static str| -> Result<i32, DescriptorError> {
            let raw = lookup(field).ok_or(DescriptorError::Missing { field })?;
            raw.trim()
                .parse::<i32>()
                .map_err(|_| DescriptorError::NotAnInteger { field, value: raw })
        };

        Ok(Self {
            x: int("x")?,
            y: int("y")?,
            width: int("width")?,
            height: int("height")?,
            title: lookup("title"),
        })
    }

    /// Build from a string map keyed by field name
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, DescriptorError> {
        Self::from_attributes(|field| map.get(field).cloned())
    }

    /// Decode a JSON object `{"x":..,"y":..,"width":..,"height":..,"title":..}`
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Requested size (before minimum clamping)
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
