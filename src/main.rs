#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app;

/// Host builds (unit tests) compile this stub; the firmware entry point
/// lives in `app`.
#[cfg(not(target_os = "none"))]
fn main() {}
