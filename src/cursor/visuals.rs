//! Visual parameters per cursor variant.

use super::state::{CursorVariant, Position};
use crate::constants::{
    CURSOR_ACCENT, CURSOR_FOREGROUND_DARK, CURSOR_FOREGROUND_LIGHT, TRAIL_DOT_SIZE,
    TRAIL_MAX_OPACITY,
};
use crate::preferences::ColorScheme;

/// How one marker looks in a given variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Translation from the pointer to the marker's unscaled top-left corner
    pub offset: f32,
    /// Scale applied around the marker's center
    pub scale: f32,
    pub opacity: f32,
    /// 0xRRGGBB
    pub color: u32,
}

impl MarkerStyle {
    /// Top-left corner of the unscaled marker box for a pointer position
    pub fn anchor(&self, pointer: Position) -> Position {
        Position::new(pointer.x - self.offset, pointer.y - self.offset)
    }
}

/// Ring and dot styles for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorStyle {
    pub ring: MarkerStyle,
    pub dot: MarkerStyle,
}

impl CursorStyle {
    pub fn for_variant(variant: CursorVariant, scheme: ColorScheme) -> Self {
        let foreground = foreground_for(scheme);
        match variant {
            CursorVariant::Default => Self {
                ring: MarkerStyle {
                    offset: 16.0,
                    scale: 1.0,
                    opacity: 0.6,
                    color: foreground,
                },
                dot: MarkerStyle {
                    offset: 4.0,
                    scale: 1.0,
                    opacity: 1.0,
                    color: foreground,
                },
            },
            CursorVariant::Hover => Self {
                ring: MarkerStyle {
                    offset: 20.0,
                    scale: 1.4,
                    opacity: 0.8,
                    color: CURSOR_ACCENT,
                },
                dot: MarkerStyle {
                    offset: 4.0,
                    scale: 0.6,
                    opacity: 1.0,
                    color: CURSOR_ACCENT,
                },
            },
            CursorVariant::Click => Self {
                ring: MarkerStyle {
                    offset: 24.0,
                    scale: 1.8,
                    opacity: 0.9,
                    color: CURSOR_ACCENT,
                },
                dot: MarkerStyle {
                    offset: 4.0,
                    scale: 1.2,
                    opacity: 1.0,
                    color: CURSOR_ACCENT,
                },
            },
        }
    }
}

pub fn foreground_for(scheme: ColorScheme) -> u32 {
    match scheme {
        ColorScheme::Dark => CURSOR_FOREGROUND_DARK,
        ColorScheme::Light => CURSOR_FOREGROUND_LIGHT,
    }
}

/// Opacity of the trail marker at `index` (0 = oldest) in a trail of `len`.
pub fn trail_opacity(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    (index + 1) as f32 / len as f32 * TRAIL_MAX_OPACITY
}

/// Top-left corner of a trail marker centered on `point`.
pub fn trail_anchor(point: Position) -> Position {
    let half = TRAIL_DOT_SIZE / 2.0;
    Position::new(point.x - half, point.y - half)
}
