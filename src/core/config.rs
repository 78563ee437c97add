/// Which window events feed rotation impulses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Wheel events only, regardless of viewport width.
    WheelOnly,
    /// Touch events only, regardless of viewport width.
    TouchOnly,
    /// Wheel on desktop widths, touch below the mobile breakpoint.
    BreakpointGated,
}

/// Scene profile: the handful of thresholds that differ between
/// deployments of this scene, collapsed into one explicit struct.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Viewport widths below this are treated as mobile.
    pub mobile_breakpoint: f32,
    /// Camera distance on desktop widths.
    pub near_camera_z: f32,
    /// Camera distance on mobile widths (pulled back to fit the orbit).
    pub far_camera_z: f32,
    /// Uniform object scale applied on mobile widths.
    pub mobile_scale: f32,
    /// Ambient particle counts per profile.
    pub particles_mobile: usize,
    pub particles_desktop: usize,
    /// Optional frame-rate cap in frames per second.
    pub frame_rate_cap: Option<f32>,
    /// Nudge the camera toward the cursor each tick.
    pub parallax: bool,
    pub input_source: InputSource,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            near_camera_z: 6.0,
            far_camera_z: 10.0,
            mobile_scale: 0.7,
            particles_mobile: 300,
            particles_desktop: 700,
            frame_rate_cap: None,
            parallax: false,
            input_source: InputSource::BreakpointGated,
        }
    }
}
