pub use kurbo::{Point, Rect, Vec2};

/// A packed 16-bit RGB565 color value, the native format of the target
/// displays.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Black (`0x0000`), also the documented fallback for missing palette
    /// entries.
    pub const BLACK: Self = Self(0x0000);
    /// White (`0xFFFF`).
    pub const WHITE: Self = Self(0xFFFF);
    /// Pure red (`0xF800`).
    pub const RED: Self = Self(0xF800);

    /// Pack an 8-bit-per-channel color into RGB565.
    pub fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r = u16::from(r >> 3);
        let g = u16::from(g >> 2);
        let b = u16::from(b >> 3);
        Self((r << 11) | (g << 5) | b)
    }
}

/// Rendering color depth of the target surface.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum ColorDepth {
    /// Full 16-bit palette colors.
    #[default]
    Color,
    /// 1-bit surface: foreground roles force the ink value, background roles
    /// force the eraser value, bypassing the palette.
    Monochrome,
}

impl ColorDepth {
    /// True for the 1-bit mode.
    pub fn is_monochrome(self) -> bool {
        self == Self::Monochrome
    }
}

/// Facial expression driving the shape-parameter branches of every renderer.
///
/// The set is closed; renderer code treats any combination it has no special
/// handling for as [`Expression::Neutral`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Expression {
    /// Resting face, and the fallback for unhandled combinations.
    #[default]
    Neutral,
    /// Strong positive; eyes wink closed, mouth widens fully.
    Happy,
    /// Brows and lids tilt inward, mouth lifts.
    Angry,
    /// Brows and lids tilt outward, mouth droops.
    Sad,
    /// Skeptical; lids half-lowered, mouth narrows.
    Doubt,
    /// Eyes forced fully closed regardless of the open ratio.
    Sleepy,
    /// Mild positive; mouth widens fully.
    Smile,
    /// Open-mouthed positive.
    Laugh,
    /// Wide-eyed.
    Surprised,
    /// Softened resting face.
    Relax,
}

/// Which side of the face a mirrored part sits on.
///
/// Mirroring is expressed by threading [`Side::sign`] through offset
/// computations, never by separate code paths per side.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Side {
    /// Viewer's left.
    Left,
    /// Viewer's right.
    Right,
}

impl Side {
    /// Horizontal mirror factor: `+1.0` for left, `-1.0` for right.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// True for [`Side::Left`].
    pub fn is_left(self) -> bool {
        self == Self::Left
    }
}

/// Gaze direction as a 2D offset with components in `[-1, 1]`.
///
/// Renderers scale it into a pixel offset for the iris position.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gaze {
    /// Horizontal component, positive toward +x.
    pub horizontal: f64,
    /// Vertical component, positive toward +y (down).
    pub vertical: f64,
}

impl Gaze {
    /// Build a gaze offset, clamping both components into `[-1, 1]`.
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
        }
    }
}

/// Clamp an open ratio into `[0, 1]`. NaN collapses to 0.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
