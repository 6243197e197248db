use iced::Color;

use crate::layout::FlowerVariant;

/// Core color palette for the night-garden scene.
#[derive(Debug, Clone, Copy)]
pub struct ScenePalette {
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub star: Color,
    pub stem: Color,
    pub letter_background: Color,
    pub letter_text: Color,
    pub letter_muted: Color,
    pub blush: Color,
}

impl Default for ScenePalette {
    fn default() -> Self {
        Self {
            sky_top: Color::from_rgb8(0x09, 0x0A, 0x0F),
            sky_bottom: Color::from_rgb8(0x1B, 0x27, 0x35),
            star: Color::WHITE,
            stem: Color::from_rgb8(0x48, 0xBB, 0x78),
            letter_background: Color {
                a: 0.95,
                ..Color::WHITE
            },
            letter_text: Color::from_rgb8(0x1A, 0x20, 0x2C),
            letter_muted: Color::from_rgb8(0x4A, 0x55, 0x68),
            blush: Color::from_rgb8(0xFE, 0xD7, 0xE2),
        }
    }
}

impl ScenePalette {
    /// Petal color of a primary flower.
    pub fn petal(&self, variant: FlowerVariant) -> Color {
        match variant {
            FlowerVariant::Teal => Color::from_rgb8(0x9B, 0xE6, 0xD5),
            FlowerVariant::Violet => Color::from_rgb8(0xB7, 0x94, 0xF4),
        }
    }

    /// Center disc color of a primary flower.
    pub fn center(&self, variant: FlowerVariant) -> Color {
        match variant {
            FlowerVariant::Teal => Color::from_rgb8(0xFC, 0xD3, 0x4D),
            FlowerVariant::Violet => Color::from_rgb8(0xDD, 0xD6, 0xFE),
        }
    }

    /// Petal color of a small companion flower.
    pub fn small_petal(&self, variant: FlowerVariant) -> Color {
        match variant {
            FlowerVariant::Teal => Color::from_rgb8(0x98, 0xF5, 0xE1),
            FlowerVariant::Violet => Color::from_rgb8(0xFE, 0xD7, 0xE2),
        }
    }

    /// Center disc color of a small companion flower.
    pub fn small_center(&self, variant: FlowerVariant) -> Color {
        match variant {
            FlowerVariant::Teal => Color::from_rgb8(0x34, 0xD3, 0x99),
            FlowerVariant::Violet => Color::from_rgb8(0xF6, 0x87, 0xB3),
        }
    }
}

/// Returns the default palette for the scene.
pub fn palette() -> ScenePalette {
    ScenePalette::default()
}

/// The four colors fireworks draw from.
pub fn firework_palette() -> [Color; 4] {
    [
        Color::from_rgb8(0xFE, 0xD7, 0xE2),
        Color::from_rgb8(0xB7, 0x94, 0xF4),
        Color::from_rgb8(0x9B, 0xE6, 0xD5),
        Color::from_rgb8(0xFC, 0xD3, 0x4D),
    ]
}

/// Moves a color toward white. `amount` of 0.0 is the input color, 1.0 is
/// pure white; used for the brightness pulse on petals and centers.
pub fn brighten(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    Color {
        r: color.r + (1.0 - color.r) * amount,
        g: color.g + (1.0 - color.g) * amount,
        b: color.b + (1.0 - color.b) * amount,
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brighten_bounds() {
        let c = Color::from_rgb8(0x48, 0xBB, 0x78);
        let same = brighten(c, 0.0);
        assert!((same.r - c.r).abs() < 1e-6);
        let white = brighten(c, 1.0);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn variants_have_distinct_petals() {
        let pal = palette();
        assert_ne!(
            pal.petal(FlowerVariant::Teal),
            pal.petal(FlowerVariant::Violet)
        );
    }
}
