//! Material definitions for scene objects
//!
//! Each object owns its own [`Material`]. The hover highlight writes into the
//! emissive slot and restores it afterwards, which is only well defined when no
//! two objects share one material instance.

/// Linear RGB color with components in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| ((c.clamp(0.0, 1.0) * 255.0).round() as u32) & 0xff;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self::rgb(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_array4(&self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Surface description with the PBR-style factors the renderer understands
///
/// `emissive` is `None` for materials that cannot be highlighted.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub base_color: Color,
    pub metallic: f32,
    pub roughness: f32,
    emissive: Option<Color>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: Color::rgb(0.8, 0.8, 0.8),
            metallic: 0.0,
            roughness: 0.5,
            emissive: Some(Color::BLACK),
        }
    }
}

impl Material {
    /// Creates a new material with a black emissive term
    ///
    /// # Arguments
    /// * `name` - Descriptive name for this material
    /// * `base_color` - Diffuse color
    /// * `metallic` - Metallic factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(name: &str, base_color: Color, metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            emissive: Some(Color::BLACK),
        }
    }

    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = Some(emissive);
        self
    }

    /// Removes the emissive slot, making the material ineligible for highlighting
    pub fn without_emissive(mut self) -> Self {
        self.emissive = None;
        self
    }

    pub fn emissive(&self) -> Option<Color> {
        self.emissive
    }

    /// Overwrites the emissive color; returns false if the material has no emissive slot
    pub fn set_emissive(&mut self, emissive: Color) -> bool {
        match self.emissive.as_mut() {
            Some(slot) => {
                *slot = emissive;
                true
            }
            None => false,
        }
    }
}
