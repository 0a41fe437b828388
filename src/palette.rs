use std::collections::HashMap;

use crate::foundation::core::{ColorDepth, Rgb565};
use crate::foundation::error::{VisageError, VisageResult};

/// Ink value forced for foreground roles on 1-bit surfaces.
pub const MONO_INK: Rgb565 = Rgb565(1);

/// Reserved eraser value forced for background roles on 1-bit surfaces.
pub const MONO_ERASER: Rgb565 = Rgb565(0);

/// Semantic drawing slot a color applies to.
///
/// The set is small and closed; a face style expresses "no such feature" by
/// leaving the slot out of its palette, which renderers check with
/// [`ColorPalette::contains`] before drawing optional decorative layers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DrawingLocation {
    /// Face background the parts are drawn over (the eraser role).
    Skin,
    /// Eye pupil.
    Pupil,
    /// Eyelash triangle overlay.
    Eyelash,
    /// Eyelid arc overlay.
    Eyelid,
    /// Inner iris ring.
    Iris1,
    /// Lower iris half-moon.
    Iris2,
    /// Iris outline.
    IrisOutline,
    /// Iris highlight dot.
    EyeHighlight,
    /// Eye white, the background the iris stack is layered onto.
    Sclera,
    /// Sclera outline.
    ScleraOutline,
    /// Eyebrow.
    Eyebrow,
    /// Mouth outline and lip color.
    MouthBackground,
    /// Inside of an open mouth.
    InnerMouth,
    /// Tongue.
    Tongue,
    /// Primary cheek blush.
    Cheek1,
    /// Secondary cheek blush.
    Cheek2,
    /// Speech balloon outline and text.
    BalloonForeground,
    /// Speech balloon fill.
    BalloonBackground,
}

impl DrawingLocation {
    /// Resolve a legacy string key from the original palette format.
    ///
    /// Applied once when loading palette configuration, never inside
    /// renderers.
    pub fn from_legacy(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Sclera),
            "secondary" => Some(Self::Cheek1),
            "background" => Some(Self::Skin),
            "balloon_f" => Some(Self::BalloonForeground),
            "balloon_b" => Some(Self::BalloonBackground),
            _ => None,
        }
    }

    fn from_config_name(name: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(name.to_owned()))
            .ok()
            .or_else(|| Self::from_legacy(name))
    }
}

/// Mapping from [`DrawingLocation`] to a concrete color for the active face
/// style.
///
/// Owned by the host; mutable between frames, read-only during a render pass.
/// Lookups of absent keys return black rather than failing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorPalette {
    slots: HashMap<DrawingLocation, Rgb565>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        use DrawingLocation as L;
        Self {
            slots: HashMap::from([
                (L::Sclera, Rgb565::WHITE),
                (L::Skin, Rgb565::BLACK),
                (L::BalloonForeground, Rgb565::BLACK),
                (L::BalloonBackground, Rgb565::WHITE),
            ]),
        }
    }
}

impl ColorPalette {
    /// An empty palette with no slots assigned.
    pub fn empty() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Color for `key`, or black if the slot was never set.
    pub fn get(&self, key: DrawingLocation) -> Rgb565 {
        match self.slots.get(&key) {
            Some(color) => *color,
            None => {
                tracing::debug!(?key, "no palette entry, falling back to black");
                Rgb565::BLACK
            }
        }
    }

    /// Insert or silently overwrite the color for `key`.
    pub fn set(&mut self, key: DrawingLocation, color: Rgb565) {
        self.slots.insert(key, color);
    }

    /// Whether a color has been assigned to `key`.
    pub fn contains(&self, key: DrawingLocation) -> bool {
        self.slots.contains_key(&key)
    }

    /// Remove every slot assignment.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Load a palette from a JSON object of `key name -> color`.
    ///
    /// Keys are canonical snake_case slot names; legacy names from the
    /// original palette format ("primary", "background", ...) are accepted
    /// through the compatibility table. Colors are packed RGB565 numbers or
    /// `"#RRGGBB"` strings.
    pub fn from_json(json: &str) -> VisageResult<Self> {
        let raw: HashMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| VisageError::serde(e.to_string()))?;

        let mut palette = Self::empty();
        for (name, value) in raw {
            let key = DrawingLocation::from_config_name(&name)
                .ok_or_else(|| VisageError::validation(format!("unknown palette key `{name}`")))?;
            palette.set(key, parse_color(&name, &value)?);
        }
        Ok(palette)
    }
}

fn parse_color(name: &str, value: &serde_json::Value) -> VisageResult<Rgb565> {
    match value {
        serde_json::Value::Number(n) => {
            let packed = n
                .as_u64()
                .filter(|v| *v <= u64::from(u16::MAX))
                .ok_or_else(|| {
                    VisageError::validation(format!("palette key `{name}`: color out of range"))
                })?;
            Ok(Rgb565(packed as u16))
        }
        serde_json::Value::String(s) => {
            let hex = s.strip_prefix('#').ok_or_else(|| {
                VisageError::validation(format!("palette key `{name}`: expected `#RRGGBB`"))
            })?;
            if hex.len() != 6 {
                return Err(VisageError::validation(format!(
                    "palette key `{name}`: expected `#RRGGBB`"
                )));
            }
            let packed = u32::from_str_radix(hex, 16).map_err(|_| {
                VisageError::validation(format!("palette key `{name}`: expected `#RRGGBB`"))
            })?;
            Ok(Rgb565::from_rgb888(
                (packed >> 16) as u8,
                (packed >> 8) as u8,
                packed as u8,
            ))
        }
        _ => Err(VisageError::validation(format!(
            "palette key `{name}`: expected a number or `#RRGGBB` string"
        ))),
    }
}

/// Depth-aware palette view for one frame.
///
/// On 1-bit surfaces foreground roles force [`MONO_INK`] and background roles
/// force [`MONO_ERASER`]; otherwise both resolve through the palette.
/// Optional decorative layers resolve through [`Paint::layer`], which yields
/// `None` when the slot was never assigned.
#[derive(Clone, Copy, Debug)]
pub struct Paint<'a> {
    palette: &'a ColorPalette,
    depth: ColorDepth,
}

impl<'a> Paint<'a> {
    /// Bundle a palette with the surface color depth.
    pub fn new(palette: &'a ColorPalette, depth: ColorDepth) -> Self {
        Self { palette, depth }
    }

    /// Color for a foreground (drawn-shape) role.
    pub fn foreground(&self, key: DrawingLocation) -> Rgb565 {
        if self.depth.is_monochrome() {
            MONO_INK
        } else {
            self.palette.get(key)
        }
    }

    /// Color for a background (masking/erasing) role.
    pub fn background(&self, key: DrawingLocation) -> Rgb565 {
        if self.depth.is_monochrome() {
            MONO_ERASER
        } else {
            self.palette.get(key)
        }
    }

    /// Color for an optional decorative layer, or `None` when the face style
    /// has no such feature.
    pub fn layer(&self, key: DrawingLocation) -> Option<Rgb565> {
        self.palette.contains(key).then(|| self.palette.get(key))
    }
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
