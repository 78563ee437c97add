/// Shared surface parameters for the orbiting meshes, live-editable from
/// the control panel.
#[derive(Clone, Copy, Debug)]
pub struct MaterialParams {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            // #c6b3ff
            color: [198.0 / 255.0, 179.0 / 255.0, 255.0 / 255.0],
            metalness: 0.86,
            roughness: 0.37,
        }
    }
}

impl MaterialParams {
    pub fn set_metalness(&mut self, v: f32) {
        self.metalness = v.clamp(0.0, 1.0);
    }

    pub fn set_roughness(&mut self, v: f32) {
        self.roughness = v.clamp(0.0, 1.0);
    }
}

/// Parse a `#rrggbb` (or bare `rrggbb`) hex color into linear-ish rgb.
#[inline]
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}
