use crate::geometry::{in_range, HitRecord, Primitive, DENOMINATOR_EPSILON};
use crate::materials::MaterialId;
use crate::math::{Point3, Ray, Vec3};

/// Flat circular region. Also serves as the cap of cylinders and the base of cones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    pub radius: f64,
    pub center: Point3,
    pub normal: Vec3,
    pub material_id: MaterialId,
}

impl Disk {
    pub fn new(radius: f64, center: Point3, normal: Vec3, material_id: MaterialId) -> Self {
        Disk {
            radius: radius.max(0.0),
            center,
            normal: normal.normalized(),
            material_id,
        }
    }
    pub const NAME: &'static str = "Disk";
}

impl Primitive for Disk {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        if self.radius == 0.0 {
            return None;
        }
        let denominator = r.direction * self.normal;
        if denominator.abs() < DENOMINATOR_EPSILON {
            return None;
        }
        let time = ((self.center - r.origin) * self.normal) / denominator;
        if !in_range(time, t0, t1) {
            return None;
        }
        let point = r.at(time);
        if (point - self.center).norm_squared() > self.radius * self.radius {
            return None;
        }
        Some(HitRecord::new(
            time,
            point,
            self.normal,
            r.direction,
            self.material_id,
        ))
    }
}
