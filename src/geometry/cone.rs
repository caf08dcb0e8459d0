use crate::geometry::{in_range, nearest, Disk, HitRecord, Primitive, DENOMINATOR_EPSILON};
use crate::materials::MaterialId;
use crate::math::{solve_half_b_quadratic, Point3, Ray, Vec3};

/// Finite cone with its base disk centered at `base` and its apex at `base + axis * height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    pub base: Point3,
    pub axis: Vec3,
    pub height: f64,
    pub radius: f64,
    pub has_base: bool,
    pub material_id: MaterialId,
    apex: Point3,
    cos2_theta: f64,
}

impl Cone {
    pub fn new(
        base: Point3,
        axis: Vec3,
        height: f64,
        radius: f64,
        has_base: bool,
        material_id: MaterialId,
    ) -> Self {
        let axis = axis.normalized();
        let height = height.max(0.0);
        let radius = radius.max(0.0);
        let slant_squared = height * height + radius * radius;
        let cos2_theta = if slant_squared > 0.0 {
            height * height / slant_squared
        } else {
            1.0
        };
        Cone {
            base,
            axis,
            height,
            radius,
            has_base,
            material_id,
            apex: base + axis * height,
            cos2_theta,
        }
    }
    pub const NAME: &'static str = "Cone";

    pub fn apex(&self) -> Point3 {
        self.apex
    }

    pub fn cos2_theta(&self) -> f64 {
        self.cos2_theta
    }

    fn base_disk(&self) -> Disk {
        Disk {
            radius: self.radius,
            center: self.base,
            normal: -self.axis,
            material_id: self.material_id,
        }
    }

    fn lateral_candidate(&self, r: Ray, time: f64, t0: f64, t1: f64) -> Option<HitRecord> {
        if !in_range(time, t0, t1) {
            return None;
        }
        let point = r.at(time);
        // rejects the mirrored nappe above the apex and anything below the base
        let depth = (self.apex - point) * self.axis;
        if depth < 0.0 || depth > self.height {
            return None;
        }
        let w = point - self.apex;
        let gradient = (w * self.axis) * self.axis - self.cos2_theta * w;
        let length = gradient.norm();
        if length < DENOMINATOR_EPSILON {
            // the apex has no well defined normal
            return None;
        }
        Some(HitRecord::new(
            time,
            point,
            gradient / length,
            r.direction,
            self.material_id,
        ))
    }

    fn intersect_lateral(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        if self.height == 0.0 {
            return None;
        }
        let d = r.direction;
        let n = self.axis;
        let v = self.apex - r.origin;
        let cos2 = self.cos2_theta;

        let dn = d * n;
        let vn = v * n;
        let vd = v * d;

        let a = dn * dn - (d * d) * cos2;
        if a.abs() < DENOMINATOR_EPSILON {
            return None;
        }
        let half_b = vd * cos2 - vn * dn;
        let c = vn * vn - (v * v) * cos2;
        let roots = solve_half_b_quadratic(a, half_b, c)?;

        // with a < 0 the first root is the larger one, so compare by value
        nearest(
            roots
                .into_iter()
                .map(|time| self.lateral_candidate(r, time, t0, t1)),
        )
    }
}

impl Primitive for Cone {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let base = if self.has_base {
            self.base_disk().intersect(r, t0, t1)
        } else {
            None
        };
        nearest([base, self.intersect_lateral(r, t0, t1)])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::random;

    fn funnel(has_base: bool) -> Cone {
        Cone::new(Point3::ORIGIN, Vec3::Y, 10.0, 5.0, has_base, MaterialId(4))
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).norm() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_precomputed_values() {
        let cone = Cone::new(
            Point3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 2.0, 0.0),
            4.0,
            3.0,
            true,
            MaterialId(0),
        );
        assert_eq!(cone.axis, Vec3::Y);
        assert_eq!(cone.apex(), Point3::new(1.0, 6.0, 3.0));
        assert!((cone.cos2_theta() - 16.0 / 25.0).abs() < 1e-15);
    }

    #[test]
    fn test_horizontal_ray_takes_nearest_root() {
        let cone = funnel(false);
        let ray = Ray::new(Point3::new(-10.0, 5.0, 0.0), Vec3::X);
        let hit = cone.intersect(ray, 0.001, f64::INFINITY).unwrap();
        assert!((hit.time - 7.5).abs() < 1e-9, "{:?}", hit);
        assert_close(hit.point, Point3::new(-2.5, 5.0, 0.0));
        assert_close(hit.normal, Vec3::new(-2.0, 1.0, 0.0).normalized());
        assert_eq!(hit.material_id, MaterialId(4));

        // exit point on the far side, seen from inside
        let hit = cone.intersect(ray, 10.0, f64::INFINITY).unwrap();
        assert!((hit.time - 12.5).abs() < 1e-9, "{:?}", hit);
        assert_close(hit.normal, Vec3::new(-2.0, -1.0, 0.0).normalized());
    }

    #[test]
    fn test_base_disk() {
        let ray = Ray::new(Point3::new(1.0, -5.0, 0.0), Vec3::Y);

        let hit = funnel(true).intersect(ray, 0.001, f64::INFINITY).unwrap();
        assert_eq!(hit.time, 5.0);
        assert_eq!(hit.point, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(hit.normal, -Vec3::Y);

        // without the base the ray climbs inside until it meets the slanted wall
        let hit = funnel(false).intersect(ray, 0.001, f64::INFINITY).unwrap();
        assert!((hit.time - 13.0).abs() < 1e-9, "{:?}", hit);
        assert_close(hit.point, Point3::new(1.0, 8.0, 0.0));
        assert_close(hit.normal, Vec3::new(-2.0, -1.0, 0.0).normalized());
    }

    #[test]
    fn test_apex_is_rejected() {
        // 45 degree cone so every quantity below is exact
        let make = |has_base| Cone::new(Point3::ORIGIN, Vec3::Y, 4.0, 4.0, has_base, MaterialId(0));
        let ray = Ray::new(Point3::new(0.0, 8.0, 0.0), -Vec3::Y);
        assert!(make(false).intersect(ray, 0.001, f64::INFINITY).is_none());

        let hit = make(true).intersect(ray, 0.001, f64::INFINITY).unwrap();
        assert_eq!(hit.time, 8.0);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_miss() {
        let cone = funnel(true);
        // passes beside the cone
        let ray = Ray::new(Point3::new(-10.0, 5.0, 3.0), Vec3::X);
        assert!(cone.intersect(ray, 0.001, f64::INFINITY).is_none());
        // passes through the mirrored nappe above the apex only
        let ray = Ray::new(Point3::new(-10.0, 15.0, 0.0), Vec3::X);
        assert!(cone.intersect(ray, 0.001, f64::INFINITY).is_none());
    }

    #[test]
    fn test_negative_dimensions_are_clamped() {
        let cone = Cone::new(Point3::ORIGIN, Vec3::Y, -1.0, -1.0, true, MaterialId(0));
        assert_eq!(cone.height, 0.0);
        assert_eq!(cone.radius, 0.0);
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        assert!(cone.intersect(ray, 0.001, f64::INFINITY).is_none());
    }

    #[test]
    fn test_normals_face_against_random_rays() {
        let cone = Cone::new(
            Point3::new(-0.5, 0.0, 1.0),
            Vec3::new(0.2, 1.0, 0.4),
            3.0,
            2.0,
            true,
            MaterialId(0),
        );
        let mut hits = 0;
        for _ in 0..2000 {
            let origin = Point3::new(
                random::<f64>() * 12.0 - 6.0,
                random::<f64>() * 12.0 - 6.0,
                random::<f64>() * 12.0 - 6.0,
            );
            let target = cone.base + cone.axis * (random::<f64>() * 1.5);
            let ray = Ray::new(origin, target - origin);
            let first = cone.intersect(ray, 0.001, f64::INFINITY);
            if let Some(hit) = first {
                hits += 1;
                assert!(hit.normal * ray.direction <= 0.0, "{:?} {:?}", ray, hit);
                assert!((hit.normal.norm() - 1.0).abs() < 1e-9);
                assert_eq!(first, cone.intersect(ray, 0.001, f64::INFINITY));
            }
        }
        assert!(hits > 0);
    }
}
