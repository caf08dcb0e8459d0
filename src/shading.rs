use crate::geometry::HitRecord;
use crate::math::{reflect, Point3, RGBColor, Ray};
use crate::scene::Scene;

/// offset along the normal for secondary rays, and the lower bound of every query
pub const DEFAULT_EPSILON: f64 = 0.001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub intensity: RGBColor,
}

impl PointLight {
    pub const fn new(position: Point3, intensity: RGBColor) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}

/// Phong shading with a single point light, one ambient term and hard shadows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Illuminator {
    pub ambient: RGBColor,
    pub light: PointLight,
    pub background: RGBColor,
    pub epsilon: f64,
}

impl Illuminator {
    pub const fn new(ambient: RGBColor, light: PointLight, background: RGBColor) -> Self {
        Illuminator {
            ambient,
            light,
            background,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Color seen along `r`, or the background color if nothing is hit.
    pub fn trace(&self, scene: &Scene, r: Ray) -> RGBColor {
        match scene.hit(r, self.epsilon, f64::INFINITY) {
            Some(hit) => self.shade(scene, r, &hit),
            None => self.background,
        }
    }

    /// Whether anything in the scene sits strictly between the hit point and the light.
    /// Occluders at the light's own distance do not count.
    pub fn in_shadow(&self, scene: &Scene, hit: &HitRecord) -> bool {
        let to_light = self.light.position - hit.point;
        let light_distance = to_light.norm();
        let shadow_ray = Ray::new(
            hit.point + hit.normal * self.epsilon,
            to_light / light_distance,
        );
        // the nearest hit in (epsilon, distance] decides whether anything lies in (epsilon, distance)
        scene
            .hit(shadow_ray, self.epsilon, light_distance)
            .map_or(false, |occluder| occluder.time < light_distance)
    }

    pub fn shade(&self, scene: &Scene, r: Ray, hit: &HitRecord) -> RGBColor {
        let material = scene.material(hit.material_id);
        let ambient = material.ambient * self.ambient;

        if self.in_shadow(scene, hit) {
            return ambient;
        }

        let n = hit.normal;
        let l = (self.light.position - hit.point).normalized();
        let v = (-r.direction).normalized();
        let reflected = reflect(-l, n);

        let diffuse_factor = (l * n).max(0.0);
        let specular_factor = (v * reflected)
            .max(0.0)
            .powf(material.shininess as f64);

        let intensity = self.light.intensity;
        ambient
            + intensity * material.diffuse * diffuse_factor
            + intensity * material.specular * specular_factor
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Cone, Plane, Primitive, Sphere};
    use crate::materials::Material;
    use crate::math::Vec3;

    const AMBIENT: RGBColor = RGBColor::new(0.3, 0.3, 0.3);
    const BACKGROUND: RGBColor = RGBColor::new(0.1, 0.2, 0.3);

    fn floor_scene() -> (Scene, Material) {
        let mut scene = Scene::new();
        let material = Material::new(
            RGBColor::new(0.2, 0.4, 0.6),
            RGBColor::new(0.5, 0.25, 0.125),
            RGBColor::new(0.25, 0.25, 0.25),
            10,
        );
        let id = scene.add_material(material);
        scene.add(Plane::new(Point3::ORIGIN, Vec3::Y, id));
        (scene, material)
    }

    fn illuminator(light_position: Point3) -> Illuminator {
        Illuminator::new(
            AMBIENT,
            PointLight::new(light_position, RGBColor::new(0.7, 0.7, 0.7)),
            BACKGROUND,
        )
    }

    fn assert_close(a: RGBColor, b: RGBColor) {
        assert!(
            (a.0 - b.0).norm() < 1e-12,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_background_on_miss() {
        let (scene, _) = floor_scene();
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert_eq!(illuminator(Point3::new(0.0, 10.0, 0.0)).trace(&scene, ray), BACKGROUND);
    }

    #[test]
    fn test_light_straight_above() {
        let (scene, material) = floor_scene();
        let illuminator = illuminator(Point3::new(0.0, 10.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        // light, eye and normal all line up: both factors are exactly 1
        let expected = material.ambient * AMBIENT
            + RGBColor::new(0.7, 0.7, 0.7) * material.diffuse
            + RGBColor::new(0.7, 0.7, 0.7) * material.specular;
        assert_close(illuminator.trace(&scene, ray), expected);
    }

    #[test]
    fn test_diffuse_falls_off_with_angle() {
        let (scene, material) = floor_scene();
        // light at 45 degrees, eye looking down from straight above
        let illuminator = illuminator(Point3::new(10.0, 10.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let hit = scene.hit(ray, illuminator.epsilon, f64::INFINITY).unwrap();
        let color = illuminator.shade(&scene, ray, &hit);

        let cos = std::f64::consts::FRAC_1_SQRT_2;
        let specular = cos.powi(10);
        let expected = material.ambient * AMBIENT
            + RGBColor::new(0.7, 0.7, 0.7) * material.diffuse * cos
            + RGBColor::new(0.7, 0.7, 0.7) * material.specular * specular;
        assert_close(color, expected);
    }

    #[test]
    fn test_light_below_surface_gives_ambient_only() {
        let (scene, material) = floor_scene();
        let illuminator = illuminator(Point3::new(0.0, -10.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        // a light behind the surface adds neither diffuse nor specular
        assert_eq!(illuminator.trace(&scene, ray), material.ambient * AMBIENT);
    }

    #[test]
    fn test_shadowed_point_is_exactly_ambient() {
        let (mut scene, material) = floor_scene();
        let blocker = scene.add_material(Material::default());
        scene.add(Sphere::new(1.0, Point3::new(0.0, 5.0, 0.0), blocker));
        let illuminator = illuminator(Point3::new(0.0, 10.0, 0.0));

        // from several viewing angles the floor point under the sphere stays ambient
        for origin in [
            Point3::new(3.0, 3.0, 0.0),
            Point3::new(-2.0, 1.0, 2.0),
            Point3::new(0.0, 2.0, 3.0),
        ] {
            let ray = Ray::new(origin, Point3::new(0.0, 0.0, 0.0) - origin);
            let hit = scene.hit(ray, illuminator.epsilon, f64::INFINITY).unwrap();
            assert!(hit.point.norm() < 1e-9);
            assert!(illuminator.in_shadow(&scene, &hit));
            assert_eq!(illuminator.shade(&scene, ray, &hit), material.ambient * AMBIENT);
        }
    }

    #[test]
    fn test_occluder_at_light_distance_casts_no_shadow() {
        // epsilon 0.5 keeps every distance below exactly representable
        let illuminator = illuminator(Point3::new(0.0, 8.0, 0.0)).with_epsilon(0.5);
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        for (height, shadowed) in [(8.5, false), (7.5, true)] {
            let (mut scene, _) = floor_scene();
            let blocker = scene.add_material(Material::default());
            scene.add(Plane::new(Point3::new(0.0, height, 0.0), Vec3::Y, blocker));
            let hit = scene.hit(ray, illuminator.epsilon, f64::INFINITY).unwrap();
            assert_eq!(hit.point, Point3::ORIGIN);
            assert_eq!(illuminator.in_shadow(&scene, &hit), shadowed, "{}", height);
        }
    }

    #[test]
    fn test_huge_shininess_keeps_highlight_bounded() {
        let mut scene = Scene::new();
        let material = Material::new(
            RGBColor::new(0.2, 0.4, 0.6),
            RGBColor::new(0.5, 0.25, 0.125),
            RGBColor::WHITE,
            3_000_000_000,
        );
        let id = scene.add_material(material);
        scene.add(Plane::new(Point3::ORIGIN, Vec3::Y, id));
        let illuminator = illuminator(Point3::new(10.0, 10.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);

        let color = illuminator.trace(&scene, ray);
        assert!(color.is_finite(), "{:?}", color);
        // (1/sqrt 2)^3e9 underflows to zero, leaving ambient and diffuse
        let expected = material.ambient * AMBIENT
            + RGBColor::new(0.7, 0.7, 0.7) * material.diffuse * std::f64::consts::FRAC_1_SQRT_2;
        assert_close(color, expected);
    }

    #[test]
    fn test_occluder_beyond_light_casts_no_shadow() {
        let (mut scene, material) = floor_scene();
        let blocker = scene.add_material(Material::default());
        scene.add(Sphere::new(1.0, Point3::new(0.0, 20.0, 0.0), blocker));
        let illuminator = illuminator(Point3::new(0.0, 10.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let hit = scene.hit(ray, illuminator.epsilon, f64::INFINITY).unwrap();
        assert!(!illuminator.in_shadow(&scene, &hit));
        assert!(illuminator.shade(&scene, ray, &hit).r() > (material.ambient * AMBIENT).r());
    }

    #[test]
    fn test_specular_may_exceed_one() {
        let mut scene = Scene::new();
        let shiny = scene.add_material(Material::new(
            RGBColor::new(1.0, 1.0, 1.0),
            RGBColor::new(1.0, 1.0, 1.0),
            RGBColor::new(1.0, 1.0, 1.0),
            50,
        ));
        let cone = Cone::new(Point3::new(0.0, -5.0, -10.0), Vec3::Y, 4.0, 4.0, true, shiny);
        scene.add(cone);
        let illuminator = Illuminator::new(
            RGBColor::new(0.3, 0.3, 0.3),
            PointLight::new(Point3::new(0.0, -20.0, -10.0), RGBColor::new(1.0, 1.0, 1.0)),
            RGBColor::BLACK,
        );
        // look straight up at the base disk with the light behind the eye
        let ray = Ray::new(Point3::new(0.0, -15.0, -10.0), Vec3::Y);
        let hit = cone.intersect(ray, illuminator.epsilon, f64::INFINITY).unwrap();
        assert_eq!(hit.normal, -Vec3::Y);
        let color = illuminator.trace(&scene, ray);
        assert_close(color, RGBColor::new(2.3, 2.3, 2.3));
    }
}
