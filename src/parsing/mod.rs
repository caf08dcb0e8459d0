mod material;
mod primitives;

pub use material::MaterialData;
pub use primitives::PrimitiveData;

use primitives::{direction, point};

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::camera::Camera;
use crate::materials::MaterialId;
use crate::math::RGBColor;
use crate::renderer::RenderSettings;
use crate::scene::Scene;
use crate::shading::{Illuminator, PointLight, DEFAULT_EPSILON};
use crate::world::World;

use anyhow::{bail, Context};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

fn default_ambient_light() -> RGBColor {
    RGBColor::new(0.3, 0.3, 0.3)
}

fn default_light_intensity() -> RGBColor {
    RGBColor::new(0.7, 0.7, 0.7)
}

fn default_shadow_epsilon() -> f64 {
    DEFAULT_EPSILON
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightData {
    pub position: [f64; 3],
    #[serde(default = "default_light_intensity")]
    pub intensity: RGBColor,
}

impl Default for LightData {
    fn default() -> Self {
        LightData {
            position: [0.0, 60.0, -30.0],
            intensity: default_light_intensity(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraData {
    pub eye: [f64; 3],
    pub look_at: [f64; 3],
    pub up: [f64; 3],
    pub window_width: f64,
    pub window_height: f64,
    pub window_distance: f64,
}

impl Default for CameraData {
    fn default() -> Self {
        CameraData {
            eye: [0.0, 0.0, 0.0],
            look_at: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            window_width: 60.0,
            window_height: 60.0,
            window_distance: 30.0,
        }
    }
}

impl CameraData {
    pub fn transform(self) -> anyhow::Result<Camera> {
        let eye = point(self.eye, "camera eye")?;
        let look_at = point(self.look_at, "camera look_at")?;
        let forward = direction(
            (look_at - eye).as_array(),
            "direction from camera eye to look_at",
        )?;
        let up = direction(self.up, "camera up")?;
        if forward.cross(up).norm_squared() == 0.0 {
            bail!("camera up {:?} is parallel to the view direction", self.up);
        }
        for (what, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("window_distance", self.window_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                bail!("camera {} must be positive, got {}", what, value);
            }
        }
        Ok(Camera::new(
            eye,
            look_at,
            up,
            self.window_width,
            self.window_height,
            self.window_distance,
        ))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub background: RGBColor,
    #[serde(default = "default_ambient_light")]
    pub ambient_light: RGBColor,
    #[serde(default)]
    pub light: LightData,
    #[serde(default)]
    pub camera: CameraData,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default = "default_shadow_epsilon")]
    pub shadow_epsilon: f64,
    pub materials: BTreeMap<String, MaterialData>,
    pub primitives: Vec<PrimitiveData>,
}

impl TryFrom<SceneData> for World {
    type Error = anyhow::Error;

    fn try_from(data: SceneData) -> anyhow::Result<World> {
        let resolution = data.render.resolution;
        if resolution.width == 0 || resolution.height == 0 {
            bail!(
                "film resolution must be nonzero, got {}x{}",
                resolution.width,
                resolution.height
            );
        }
        if data.render.threads == Some(0) {
            bail!("thread count must be at least 1");
        }
        if !(data.shadow_epsilon.is_finite() && data.shadow_epsilon >= 0.0) {
            bail!("shadow_epsilon must be non-negative, got {}", data.shadow_epsilon);
        }

        let mut scene = Scene::new();
        // BTreeMap iteration is sorted by name, so ids are stable across runs
        let mut material_name_to_id: HashMap<String, MaterialId> = HashMap::new();
        for (name, material) in data.materials {
            let id = scene.add_material(material.transform(&name)?);
            debug!("material {} -> {:?}", name, id);
            material_name_to_id.insert(name, id);
        }

        for (index, primitive) in data.primitives.into_iter().enumerate() {
            let name = primitive.name();
            let primitive = primitive
                .transform(&material_name_to_id)
                .with_context(|| format!("invalid {} at primitives[{}]", name, index))?;
            scene.add(primitive);
        }

        let light = PointLight::new(
            point(data.light.position, "light position")?,
            data.light.intensity,
        );
        let illuminator = Illuminator::new(data.ambient_light, light, data.background)
            .with_epsilon(data.shadow_epsilon);

        Ok(World {
            scene,
            illuminator,
            camera: data.camera.transform()?,
            settings: data.render,
        })
    }
}

pub fn load_json<T>(path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let mut input = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", path.display()))?;

    let data: T = serde_json::from_str(&input)
        .with_context(|| format!("couldn't parse {}", path.display()))?;
    Ok(data)
}

pub fn construct_world(path: impl AsRef<Path>) -> anyhow::Result<World> {
    let path = path.as_ref();
    let data: SceneData = load_json(path)?;
    let world = World::try_from(data)
        .with_context(|| format!("invalid scene description in {}", path.display()))?;
    info!(
        "loaded {} primitives and {} materials from {}",
        world.scene.len(),
        world.scene.materials.len(),
        path.display()
    );
    Ok(world)
}
