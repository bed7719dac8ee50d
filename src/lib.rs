#![no_std]

pub mod constants;
pub mod indicator;
pub mod level;

// Hardware-facing modules only build for the target; the pure modules above
// also compile on the host so their unit tests can run there.
#[cfg(target_os = "none")]
pub mod neo_pixel;
#[cfg(target_os = "none")]
pub mod ultrasonic;
