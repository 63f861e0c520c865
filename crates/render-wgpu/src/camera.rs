use glam::{Mat4, Vec3};

/// Orbit camera circling the scene center.
///
/// Dragging changes yaw and pitch; scrolling scales the distance.
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 2.5,
            yaw: 90.0_f32.to_radians(),
            pitch: 25.0_f32.to_radians(),
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.01,
            far: 100.0,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            min_distance: 0.5,
            max_distance: 20.0,
        }
    }
}

impl OrbitCamera {
    /// Eye position on the orbit sphere.
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + offset * self.distance
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self.pitch.clamp(
            -89.0_f32.to_radians(),
            89.0_f32.to_radians(),
        );
    }

    /// Positive `lines` move towards the target.
    pub fn zoom(&mut self, lines: f32) {
        let factor = (1.0 - lines * self.zoom_speed).max(0.1);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera() {
        let cam = OrbitCamera::default();
        assert!(cam.position().y > 0.0);
        assert!((cam.position().length() - cam.distance).abs() < 1e-5);
        let vp = cam.projection_matrix() * cam.view_matrix();
        assert!(vp.is_finite());
    }

    #[test]
    fn rotate_keeps_distance_and_clamps_pitch() {
        let mut cam = OrbitCamera::default();
        let start = cam.position();
        cam.rotate(100.0, 0.0);
        assert_ne!(cam.position(), start);
        assert!((cam.position().length() - cam.distance).abs() < 1e-5);

        cam.rotate(0.0, 1.0e6);
        assert!(cam.pitch <= 89.0_f32.to_radians());
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        for _ in 0..100 {
            cam.zoom(5.0);
        }
        assert_eq!(cam.distance, cam.min_distance);
        for _ in 0..100 {
            cam.zoom(-5.0);
        }
        assert_eq!(cam.distance, cam.max_distance);
    }

    #[test]
    fn aspect_survives_zero_height() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(800, 0);
        assert_eq!(cam.aspect, 800.0);
    }
}
