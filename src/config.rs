//! Fixed knobs shared across pages. Values match the original site.

/// sessionStorage key holding `"true"` while a member is signed in.
pub const LOGGED_IN_KEY: &str = "limcoma_logged_in";
/// sessionStorage key holding the signed-in email, if any.
pub const USER_EMAIL_KEY: &str = "limcoma_user_email";

/// Where the session guard and logout send the browser.
pub const SIGNIN_PATH: &str = "/signin";
pub const MEMBERSHIP_PATH: &str = "/membership";

/// Milliseconds between revealed characters in the hero headline.
pub const TYPING_SPEED_MS: u32 = 50;
/// How long the post-submit banner stays visible.
pub const BANNER_HIDE_MS: u32 = 1_800;
/// Particles drifting on the hero canvas.
pub const PARTICLE_COUNT: usize = 70;
/// Auto-advance period for the programs carousel.
pub const CAROUSEL_PERIOD_MS: u32 = 5_000;
/// Lifetime of a spawned ripple span on the hero button.
pub const RIPPLE_CLEANUP_MS: u32 = 600;
