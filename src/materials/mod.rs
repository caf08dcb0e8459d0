use crate::math::RGBColor;

/// Index of a material inside the scene's material arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct MaterialId(pub usize);

/// Phong reflection coefficients.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
    pub shininess: u32,
}

impl Material {
    pub const fn new(
        ambient: RGBColor,
        diffuse: RGBColor,
        specular: RGBColor,
        shininess: u32,
    ) -> Material {
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Same color for the ambient and diffuse terms, no highlight.
    pub const fn matte(color: RGBColor) -> Material {
        Material::new(color, color, RGBColor::BLACK, 1)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::matte(RGBColor::new(0.5, 0.5, 0.5))
    }
}
