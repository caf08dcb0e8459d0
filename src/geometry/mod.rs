use ordered_float::OrderedFloat;

use crate::materials::MaterialId;
use crate::math::{Point3, Ray, Vec3};

mod cone;
mod cylinder;
mod disk;
mod plane;
mod sphere;

pub use cone::Cone;
pub use cylinder::Cylinder;
pub use disk::Disk;
pub use plane::Plane;
pub use sphere::Sphere;

/// threshold for near-zero denominators and leading coefficients
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f64,
    pub point: Point3,
    pub normal: Vec3,
    pub material_id: MaterialId,
}

impl HitRecord {
    /// `normal` must already be unit length. It is flipped if needed so that it
    /// faces against `direction`.
    pub fn new(
        time: f64,
        point: Point3,
        normal: Vec3,
        direction: Vec3,
        material_id: MaterialId,
    ) -> Self {
        let normal = if direction * normal > 0.0 {
            -normal
        } else {
            normal
        };
        HitRecord {
            time,
            point,
            normal,
            material_id,
        }
    }
}

pub trait Primitive {
    /// Nearest intersection with `time` in `(t0, t1]`, or `None`.
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord>;
}

#[inline(always)]
pub(crate) fn in_range(time: f64, t0: f64, t1: f64) -> bool {
    time > t0 && time <= t1
}

/// Smallest-time hit among the candidates. Ties keep the earlier candidate.
pub(crate) fn nearest<I>(candidates: I) -> Option<HitRecord>
where
    I: IntoIterator<Item = Option<HitRecord>>,
{
    candidates
        .into_iter()
        .flatten()
        .min_by_key(|hit| OrderedFloat(hit.time))
}

#[macro_export]
macro_rules! generate_primitive_enum {
    ( $name:ident, $( $s:ident),+) => {

        #[derive(Copy, Clone, Debug, PartialEq)]
        pub enum $name {
            $(
                $s($s),
            )+
        }
        $(
            impl From<$s> for $name {
                fn from(value: $s) -> Self {
                    $name::$s(value)
                }
            }
        )+

        impl $name {
            pub fn get_name(&self) -> &str {
                match self {
                    $($name::$s(_) => $s::NAME,)+
                }
            }
        }

        impl Primitive for $name {
            fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
                match self {
                    $($name::$s(prim) => prim.intersect(r, t0, t1),)+
                }
            }
        }
    };
}

generate_primitive_enum!(PrimitiveEnum, Sphere, Plane, Cylinder, Cone, Disk);
