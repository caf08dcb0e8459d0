use crate::geometry::{in_range, HitRecord, Primitive};
use crate::materials::MaterialId;
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub center: Point3,
    pub material_id: MaterialId,
}

impl Sphere {
    pub fn new(radius: f64, center: Point3, material_id: MaterialId) -> Sphere {
        Sphere {
            radius: radius.max(0.0),
            center,
            material_id,
        }
    }
    pub const NAME: &'static str = "Sphere";
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        // a point-sized sphere has no surface to shade
        if self.radius == 0.0 {
            return None;
        }
        let oc: Vec3 = self.center - r.origin;
        let a = r.direction * r.direction;
        let h = r.direction * oc;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        for time in [(h - discriminant_sqrt) / a, (h + discriminant_sqrt) / a] {
            if in_range(time, t0, t1) {
                let point = r.at(time);
                let normal = (point - self.center) / self.radius;
                return Some(HitRecord::new(
                    time,
                    point,
                    normal.normalized(),
                    r.direction,
                    self.material_id,
                ));
            }
        }
        None
    }
}
