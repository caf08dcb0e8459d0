use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera looking through a rectangular window placed in front of the eye.
/// Rays start at the eye and pass through pixel centers on the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    pub direction: Vec3,
    pub side: Vec3,
    pub up: Vec3,
    pub window_width: f64,
    pub window_height: f64,
    pub window_distance: f64,
}

impl Camera {
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        up: Vec3,
        window_width: f64,
        window_height: f64,
        window_distance: f64,
    ) -> Camera {
        let direction = (look_at - look_from).normalized();
        let side = direction.cross(up).normalized();
        let real_up = side.cross(direction).normalized();
        Camera {
            origin: look_from,
            direction,
            side,
            up: real_up,
            window_width,
            window_height,
            window_distance,
        }
    }

    /// Ray through the center of pixel `(col, row)` of a `cols` x `rows` grid.
    /// Row 0 is the top of the window.
    pub fn get_ray(&self, (col, row): (usize, usize), (cols, rows): (usize, usize)) -> Ray {
        let dx = self.window_width / cols as f64;
        let dy = self.window_height / rows as f64;

        let x = -self.window_width / 2.0 + dx / 2.0 + col as f64 * dx;
        let y = self.window_height / 2.0 - dy / 2.0 - row as f64 * dy;

        let on_window = self.origin
            + self.direction * self.window_distance
            + self.side * x
            + self.up * y;

        Ray::new(self.origin, on_window - self.origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Point3::ORIGIN, -Vec3::Z, Vec3::Y, 60.0, 60.0, 30.0)
    }
}
