// Simple color struct, created from an unsigned 32 representing RRGGBBAA,
// with helpers for formatting as CSS color strings for the 2d context

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    // The alpha byte is ignored here; link opacity is recomputed per pair
    // every frame from the distance
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x1e90ffff);
        assert_eq!(
            c,
            Color {
                r: 30,
                g: 144,
                b: 255,
                a: 255
            }
        );
    }

    #[test]
    fn formats_css_strings() {
        let c = Color::from_u32(0x1e90ffff);
        assert_eq!(c.to_css(), "rgb(30, 144, 255)");
        assert_eq!(c.to_css_with_alpha(0.5), "rgba(30, 144, 255, 0.5)");
    }
}
