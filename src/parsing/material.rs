use crate::materials::Material;
use crate::math::RGBColor;

use anyhow::bail;
use serde::{Deserialize, Serialize};

fn default_shininess() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialData {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    #[serde(default)]
    pub specular: RGBColor,
    #[serde(default = "default_shininess")]
    pub shininess: u32,
}

impl MaterialData {
    pub fn transform(self, name: &str) -> anyhow::Result<Material> {
        for (term, color) in [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ] {
            if !color.is_finite() || color.0.iter().any(|e| *e < 0.0) {
                bail!(
                    "material {} has an invalid {} coefficient {:?}",
                    name,
                    term,
                    color
                );
            }
        }
        Ok(Material::new(
            self.ambient,
            self.diffuse,
            self.specular,
            self.shininess,
        ))
    }
}
