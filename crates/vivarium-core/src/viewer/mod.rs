pub mod animation;
pub mod camera;
pub mod lighting;
pub mod model;
pub mod scene;
