use glam::{Mat4, Vec3};

use crate::config::RenderConfig;

/// Axis the cube spins around, before normalization.
pub const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

/// Fixed camera looking down -Z at the origin from `distance` units away.
pub struct Camera {
    pub distance: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(config: &RenderConfig, width: u32, height: u32) -> Self {
        Self {
            distance: 3.0,
            fov: config.fov,
            aspect_ratio: aspect_ratio(width, height),
            near: config.near,
            far: config.far,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect_ratio = aspect_ratio(width, height);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

/// Model matrix for the cube after `elapsed` seconds.
pub fn spin_model(elapsed: f32, degrees_per_sec: f32) -> Mat4 {
    let angle = (elapsed * degrees_per_sec).to_radians();
    Mat4::from_axis_angle(SPIN_AXIS.normalize(), angle)
}

/// A minimized window reports a zero height; clamp it so the aspect stays finite.
fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn camera(width: u32, height: u32) -> Camera {
        Camera::new(&RenderConfig::default(), width, height)
    }

    #[test]
    fn test_spin_starts_at_identity() {
        assert!(spin_model(0.0, 50.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_spin_keeps_axis_fixed() {
        let axis = SPIN_AXIS.normalize();
        let model = spin_model(2.7, 50.0);
        assert!(model.transform_vector3(axis).abs_diff_eq(axis, 1e-5));
    }

    #[test]
    fn test_spin_full_turn() {
        // 360 degrees at 50 deg/s takes 7.2 seconds.
        assert!(spin_model(7.2, 50.0).abs_diff_eq(Mat4::IDENTITY, 1e-4));
        assert!(!spin_model(3.6, 50.0).abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn test_view_pushes_scene_back() {
        let origin = camera(800, 600).view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin, Vec4::new(0.0, 0.0, -3.0, 1.0));
    }

    #[test]
    fn test_projection_keeps_cube_in_clip_volume() {
        let cam = camera(800, 600);
        let clip_from_model = cam.projection_matrix() * cam.view_matrix();

        for x in [-0.5f32, 0.5] {
            for y in [-0.5f32, 0.5] {
                for z in [-0.5f32, 0.5] {
                    let clip = clip_from_model * Vec4::new(x, y, z, 1.0);
                    let ndc = clip.truncate() / clip.w;
                    assert!(ndc.abs().max_element() <= 1.0, "corner {:?} clipped", ndc);
                }
            }
        }
    }

    #[test]
    fn test_zero_height_is_clamped() {
        let mut cam = camera(800, 600);
        assert!((cam.aspect_ratio - 800.0 / 600.0).abs() < 1e-6);

        cam.resize(640, 0);
        assert_eq!(cam.aspect_ratio, 640.0);
        assert!(cam.projection_matrix().is_finite());

        cam.resize(0, 0);
        assert_eq!(cam.aspect_ratio, 1.0);
        assert!(cam.projection_matrix().is_finite());
    }
}
