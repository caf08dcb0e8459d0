pub mod camera;
pub mod film;
pub mod geometry;
pub mod materials;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod world;
