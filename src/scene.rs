use crate::geometry::{HitRecord, Primitive, PrimitiveEnum};
use crate::materials::{Material, MaterialId};
use crate::math::Ray;

/// Flat list of primitives plus the materials they refer to.
/// Traversal is linear; there is no acceleration structure.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub primitives: Vec<PrimitiveEnum>,
    pub materials: Vec<Material>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    pub fn add<P: Into<PrimitiveEnum>>(&mut self, primitive: P) {
        self.primitives.push(primitive.into());
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.materials.push(material);
        id
    }

    /// Panics if `id` was not handed out by this scene's `add_material`.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest hit over every primitive with time in `(t0, t1]`.
    pub fn hit(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let mut closest_so_far = t1;
        let mut hit_record: Option<HitRecord> = None;
        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(r, t0, closest_so_far) {
                closest_so_far = hit.time;
                hit_record = Some(hit);
            }
        }
        hit_record
    }
}

impl Primitive for Scene {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        self.hit(r, t0, t1)
    }
}
