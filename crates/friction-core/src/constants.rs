// Shared gesture tuning constants and option defaults.

// Sampling
pub const SAMPLE_REFRESH_MS: f64 = 30.0; // minimum spacing between cached velocity samples

// Option defaults
pub const DEFAULT_FLICK_DURATION_MS: f64 = 500.0;
pub const DEFAULT_FLICK_THRESHOLD: f64 = 1.0; // release distance per element size
pub const DEFAULT_FRICTION: f64 = 2.0;
pub const DEFAULT_MAX_ROTATION: f64 = 1.5; // radians
pub const DEFAULT_RETURN_DURATION_MS: f64 = 200.0;

// Option keys as exposed to the host page
pub const OPT_FLICK_DURATION: &str = "flickDuration";
pub const OPT_FLICK_THRESHOLD: &str = "flickThreshold";
pub const OPT_FRICTION: &str = "friction";
pub const OPT_MAX_ROTATION: &str = "maxRotation";
pub const OPT_RETURN_DURATION: &str = "returnDuration";
pub const OPT_RESET_POSITION: &str = "resetPosition";
pub const OPT_FLICKED: &str = "flicked";
pub const OPT_COMPLETE: &str = "complete";
