use glam::{Vec2, Vec3};

use super::config::{InputSource, SceneConfig};
use super::constants::*;

/// Owns every piece of interaction state for the scene: viewport sizes,
/// the decaying rotation speed, the accumulated orbit angle, per-object
/// spin, the normalized cursor offset, and the parallax camera offset.
///
/// Pure and host-testable; event wiring and the render loop only call
/// into it, never the other way around.
pub struct ViewportController {
    config: SceneConfig,
    width: f32,
    height: f32,
    speed: f32,
    angle: f32,
    spin: [Vec2; ORBIT_COUNT],
    cursor: Vec2,
    touch_y: Option<f32>,
    camera_offset: Vec2,
}

impl ViewportController {
    pub fn new(config: SceneConfig, width: f32, height: f32) -> Self {
        Self {
            config,
            width,
            height,
            speed: 0.0,
            angle: 0.0,
            spin: [Vec2::ZERO; ORBIT_COUNT],
            cursor: Vec2::ZERO,
            touch_y: None,
            camera_offset: Vec2::ZERO,
        }
    }

    /// Add a raw pixel delta to the rotation speed.
    pub fn on_impulse(&mut self, delta: f32) {
        self.speed += delta * IMPULSE_GAIN;
    }

    /// Wheel impulse source; honored only when the active profile routes
    /// wheel input (desktop widths under the gated default).
    pub fn on_wheel(&mut self, delta_y: f32) {
        if self.accepts_wheel() {
            self.on_impulse(delta_y);
        }
    }

    /// Capture the baseline Y for subsequent touch-move deltas.
    pub fn on_touch_start(&mut self, y: f32) {
        if self.accepts_touch() {
            self.touch_y = Some(y);
        }
    }

    /// Touch impulse source: the delta from the previous sample drives the
    /// speed, and the sample becomes the new baseline. A move arriving
    /// without a prior start only seeds the baseline.
    pub fn on_touch_move(&mut self, y: f32) {
        if !self.accepts_touch() {
            return;
        }
        if let Some(prev) = self.touch_y {
            self.on_impulse(y - prev);
        }
        self.touch_y = Some(y);
    }

    /// Track the cursor as a normalized offset from the viewport center,
    /// each component in [-0.5, 0.5].
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.width > 0.0 && self.height > 0.0 {
            self.cursor = Vec2::new(x / self.width - 0.5, y / self.height - 0.5);
        }
    }

    /// Record new viewport dimensions. Every derived value (breakpoint
    /// flag, camera distance, object scale, particle count) is computed
    /// from the current width, so profile switches are symmetric across
    /// the breakpoint in both directions.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance one animation tick. Order matters: the angle integrates the
    /// current speed, then the speed decays. Spin and parallax scale with
    /// wall-clock `dt`; the orbit does not.
    pub fn tick(&mut self, dt: f32) {
        self.angle += self.speed;
        self.speed *= SPEED_DECAY;

        for s in &mut self.spin {
            s.x += SPIN_RATE_X * dt;
            s.y += SPIN_RATE_Y * dt;
        }

        if self.config.parallax {
            let limit = PARALLAX_MAX_OFFSET;
            self.camera_offset.x =
                (self.camera_offset.x - self.cursor.x * PARALLAX_RATE * dt).clamp(-limit, limit);
            self.camera_offset.y =
                (self.camera_offset.y + self.cursor.y * PARALLAX_RATE * dt).clamp(-limit, limit);
        }
    }

    /// Positions of the orbiting objects, a quarter turn apart on the
    /// fixed circle in the xz-plane.
    pub fn orbit_positions(&self) -> [Vec3; ORBIT_COUNT] {
        let mut out = [Vec3::ZERO; ORBIT_COUNT];
        for (i, p) in out.iter_mut().enumerate() {
            let phase = self.angle + ORBIT_PHASE_STEP * i as f32;
            p.x = ORBIT_CENTER_X + ORBIT_RADIUS * phase.cos();
            p.z = ORBIT_CENTER_Z + ORBIT_RADIUS * phase.sin();
        }
        out
    }

    pub fn spin_angles(&self) -> [Vec2; ORBIT_COUNT] {
        self.spin
    }

    pub fn is_mobile(&self) -> bool {
        self.width < self.config.mobile_breakpoint
    }

    pub fn camera_z(&self) -> f32 {
        if self.is_mobile() {
            self.config.far_camera_z
        } else {
            self.config.near_camera_z
        }
    }

    pub fn object_scale(&self) -> f32 {
        if self.is_mobile() {
            self.config.mobile_scale
        } else {
            1.0
        }
    }

    pub fn particle_count(&self) -> usize {
        if self.is_mobile() {
            self.config.particles_mobile
        } else {
            self.config.particles_desktop
        }
    }

    pub fn camera_eye(&self) -> Vec3 {
        Vec3::new(self.camera_offset.x, self.camera_offset.y, self.camera_z())
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera_offset
    }

    fn accepts_wheel(&self) -> bool {
        match self.config.input_source {
            InputSource::WheelOnly => true,
            InputSource::TouchOnly => false,
            InputSource::BreakpointGated => !self.is_mobile(),
        }
    }

    fn accepts_touch(&self) -> bool {
        match self.config.input_source {
            InputSource::WheelOnly => false,
            InputSource::TouchOnly => true,
            InputSource::BreakpointGated => self.is_mobile(),
        }
    }
}

/// Optional frame-rate cap for the render loop: work is skipped until the
/// target interval has elapsed since the last drawn frame. The loop still
/// reschedules itself every animation frame.
pub struct FramePacer {
    min_interval_ms: Option<f64>,
    last_draw_ms: Option<f64>,
}

impl FramePacer {
    pub fn new(cap_fps: Option<f32>) -> Self {
        Self {
            min_interval_ms: cap_fps.map(|fps| 1000.0 / fps as f64),
            last_draw_ms: None,
        }
    }

    /// Whether a frame arriving at `now_ms` should do work. The first
    /// frame always draws.
    pub fn should_draw(&mut self, now_ms: f64) -> bool {
        let interval = match self.min_interval_ms {
            Some(ms) => ms,
            None => return true,
        };
        match self.last_draw_ms {
            Some(last) if now_ms - last < interval => false,
            _ => {
                self.last_draw_ms = Some(now_ms);
                true
            }
        }
    }
}
