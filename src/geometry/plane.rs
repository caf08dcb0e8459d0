use crate::geometry::{in_range, HitRecord, Primitive};
use crate::materials::MaterialId;
use crate::math::{Point3, Ray, Vec3};

/// rays closer to parallel than this never hit an infinite plane
const PARALLEL_EPSILON: f64 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
    pub material_id: MaterialId,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3, material_id: MaterialId) -> Self {
        Plane {
            point,
            normal: normal.normalized(),
            material_id,
        }
    }
    pub const NAME: &'static str = "Plane";
}

impl Primitive for Plane {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let denominator = self.normal * r.direction;
        if denominator.abs() < PARALLEL_EPSILON {
            return None;
        }
        let time = ((self.point - r.origin) * self.normal) / denominator;
        if !in_range(time, t0, t1) {
            return None;
        }
        Some(HitRecord::new(
            time,
            r.at(time),
            self.normal,
            r.direction,
            self.material_id,
        ))
    }
}
