use crate::camera::Camera;
use crate::film::Film;
use crate::math::RGBColor;
use crate::renderer::{render, RenderSettings};
use crate::scene::Scene;
use crate::shading::Illuminator;

/// Everything a render needs: geometry and materials, lighting, the camera and the film settings.
#[derive(Clone, Debug)]
pub struct World {
    pub scene: Scene,
    pub illuminator: Illuminator,
    pub camera: Camera,
    pub settings: RenderSettings,
}

impl World {
    pub fn render(&self, show_progress: bool) -> Film<RGBColor> {
        render(
            &self.scene,
            &self.illuminator,
            &self.camera,
            &self.settings,
            show_progress,
        )
    }
}
