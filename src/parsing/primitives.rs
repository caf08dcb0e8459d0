use std::collections::HashMap;

use crate::{
    geometry::{Cone, Cylinder, Disk, Plane, PrimitiveEnum, Sphere},
    materials::MaterialId,
    math::{Point3, Vec3},
};

use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: String,
    },
    Plane {
        point: [f64; 3],
        normal: [f64; 3],
        material: String,
    },
    Disk {
        center: [f64; 3],
        normal: [f64; 3],
        radius: f64,
        material: String,
    },
    Cylinder {
        base: [f64; 3],
        axis: [f64; 3],
        height: f64,
        radius: f64,
        #[serde(default = "default_true")]
        bottom_cap: bool,
        #[serde(default = "default_true")]
        top_cap: bool,
        material: String,
    },
    Cone {
        base: [f64; 3],
        axis: [f64; 3],
        height: f64,
        radius: f64,
        #[serde(default = "default_true")]
        has_base: bool,
        material: String,
    },
}

pub(super) fn point(value: [f64; 3], what: &str) -> anyhow::Result<Point3> {
    let point = Point3::from(value);
    if !point.is_finite() {
        bail!("{} {:?} is not finite", what, value);
    }
    Ok(point)
}

/// Finite, nonzero vector. Normalization happens in the primitive constructors.
pub(super) fn direction(value: [f64; 3], what: &str) -> anyhow::Result<Vec3> {
    let v = Vec3::from(value);
    if !v.is_finite() || v.norm_squared() == 0.0 {
        bail!("{} {:?} must be a finite, nonzero vector", what, value);
    }
    Ok(v)
}

fn length(value: f64, what: &str, primitive: &str) -> anyhow::Result<f64> {
    if !value.is_finite() {
        bail!("{} {} of {} is not finite", what, value, primitive);
    }
    if value < 0.0 {
        warn!("negative {} {} on {}, clamping to 0", what, value, primitive);
    }
    Ok(value)
}

fn lookup(material_mapping: &HashMap<String, MaterialId>, name: &str) -> anyhow::Result<MaterialId> {
    material_mapping
        .get(name)
        .copied()
        .ok_or_else(|| anyhow!("material {} not present in material mapping", name))
}

impl PrimitiveData {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => Sphere::NAME,
            Self::Plane { .. } => Plane::NAME,
            Self::Disk { .. } => Disk::NAME,
            Self::Cylinder { .. } => Cylinder::NAME,
            Self::Cone { .. } => Cone::NAME,
        }
    }

    pub fn transform(
        self,
        material_mapping: &HashMap<String, MaterialId>,
    ) -> anyhow::Result<PrimitiveEnum> {
        let name = self.name();
        let primitive = match self {
            Self::Sphere {
                center,
                radius,
                material,
            } => PrimitiveEnum::Sphere(Sphere::new(
                length(radius, "radius", name)?,
                point(center, "sphere center")?,
                lookup(material_mapping, &material)?,
            )),
            Self::Plane {
                point: p,
                normal,
                material,
            } => PrimitiveEnum::Plane(Plane::new(
                point(p, "plane point")?,
                direction(normal, "plane normal")?,
                lookup(material_mapping, &material)?,
            )),
            Self::Disk {
                center,
                normal,
                radius,
                material,
            } => PrimitiveEnum::Disk(Disk::new(
                length(radius, "radius", name)?,
                point(center, "disk center")?,
                direction(normal, "disk normal")?,
                lookup(material_mapping, &material)?,
            )),
            Self::Cylinder {
                base,
                axis,
                height,
                radius,
                bottom_cap,
                top_cap,
                material,
            } => PrimitiveEnum::Cylinder(Cylinder::new(
                point(base, "cylinder base")?,
                direction(axis, "cylinder axis")?,
                length(height, "height", name)?,
                length(radius, "radius", name)?,
                bottom_cap,
                top_cap,
                lookup(material_mapping, &material)?,
            )),
            Self::Cone {
                base,
                axis,
                height,
                radius,
                has_base,
                material,
            } => PrimitiveEnum::Cone(Cone::new(
                point(base, "cone base")?,
                direction(axis, "cone axis")?,
                length(height, "height", name)?,
                length(radius, "radius", name)?,
                has_base,
                lookup(material_mapping, &material)?,
            )),
        };
        Ok(primitive)
    }
}
