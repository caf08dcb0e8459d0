use crate::geometry::{in_range, nearest, Disk, HitRecord, Primitive, DENOMINATOR_EPSILON};
use crate::materials::MaterialId;
use crate::math::{solve_half_b_quadratic, Point3, Ray, Vec3};

/// Finite cylinder around `axis`, starting at `base` and extending `height` along the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub base: Point3,
    pub axis: Vec3,
    pub height: f64,
    pub radius: f64,
    pub bottom_cap: bool,
    pub top_cap: bool,
    pub material_id: MaterialId,
    top: Point3,
}

impl Cylinder {
    pub fn new(
        base: Point3,
        axis: Vec3,
        height: f64,
        radius: f64,
        bottom_cap: bool,
        top_cap: bool,
        material_id: MaterialId,
    ) -> Self {
        let axis = axis.normalized();
        let height = height.max(0.0);
        Cylinder {
            base,
            axis,
            height,
            radius: radius.max(0.0),
            bottom_cap,
            top_cap,
            material_id,
            top: base + axis * height,
        }
    }
    pub const NAME: &'static str = "Cylinder";

    pub fn top(&self) -> Point3 {
        self.top
    }

    fn bottom_disk(&self) -> Disk {
        Disk {
            radius: self.radius,
            center: self.base,
            normal: -self.axis,
            material_id: self.material_id,
        }
    }

    fn top_disk(&self) -> Disk {
        Disk {
            radius: self.radius,
            center: self.top,
            normal: self.axis,
            material_id: self.material_id,
        }
    }

    fn lateral_candidate(&self, r: Ray, time: f64, t0: f64, t1: f64) -> Option<HitRecord> {
        if !in_range(time, t0, t1) {
            return None;
        }
        let point = r.at(time);
        let offset = point - self.base;
        let along_axis = offset * self.axis;
        if along_axis < 0.0 || along_axis > self.height {
            return None;
        }
        let normal = offset.reject_from(self.axis).normalized();
        Some(HitRecord::new(
            time,
            point,
            normal,
            r.direction,
            self.material_id,
        ))
    }

    fn intersect_lateral(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        if self.radius == 0.0 {
            return None;
        }
        // project the problem onto the plane orthogonal to the axis
        let w = r.direction.reject_from(self.axis);
        let v = (r.origin - self.base).reject_from(self.axis);

        let a = w * w;
        if a.abs() < DENOMINATOR_EPSILON {
            // parallel to the axis
            return None;
        }
        let half_b = v * w;
        let c = v * v - self.radius * self.radius;
        let roots = solve_half_b_quadratic(a, half_b, c)?;

        nearest(
            roots
                .into_iter()
                .map(|time| self.lateral_candidate(r, time, t0, t1)),
        )
    }
}

impl Primitive for Cylinder {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let bottom = if self.bottom_cap {
            self.bottom_disk().intersect(r, t0, t1)
        } else {
            None
        };
        let top = if self.top_cap {
            self.top_disk().intersect(r, t0, t1)
        } else {
            None
        };
        nearest([bottom, top, self.intersect_lateral(r, t0, t1)])
    }
}
