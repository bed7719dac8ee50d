//! # Hardware Constants Module
//!
//! Commonly used constants for the distance warning indicator, organized by
//! functional area.

/// Ultrasonic Ranging Constants
pub mod ranging {
    /// Setup delay with the trigger held low before a pulse (2µs)
    pub const TRIGGER_SETUP_DELAY_US: u64 = 2;

    /// Trigger pulse width (10µs per the HC-SR04 datasheet)
    pub const TRIGGER_PULSE_DURATION_US: u64 = 10;

    /// Delay per iteration of the echo polling loops (1µs)
    pub const POLLING_DELAY_US: u64 = 1;

    /// Round-trip echo time to millimeters, empirically calibrated for this
    /// sensor. Calibration-dependent, not a physical constant: the
    /// physics-derived value at 20°C would be ~0.1716 mm/µs (half the speed
    /// of sound).
    pub const ECHO_US_TO_MM: f32 = 0.1715;

    /// Longest range an HC-SR04 class sensor can report (~4m)
    pub const SENSOR_MAX_RANGE_MM: f32 = 4000.0;

    /// Safety factor applied to the computed echo timeout
    pub const TIMEOUT_SAFETY_FACTOR: f32 = 1.5;

    /// Ranging attempts per loop cycle before holding the last indicator state
    pub const ATTEMPTS_PER_CYCLE: u8 = 2;

    /// Convert a round-trip echo time to whole millimeters (rounded)
    pub fn round_trip_us_to_mm(elapsed_us: u64) -> i32 {
        (elapsed_us as f32 * ECHO_US_TO_MM + 0.5) as i32
    }

    // Budget for each echo edge: time for sound to cover the sensor's
    // maximum range and back, with headroom for slow echoes.
    const fn calculate_echo_timeout_us() -> u64 {
        let max_time_us = SENSOR_MAX_RANGE_MM / ECHO_US_TO_MM;
        (max_time_us * TIMEOUT_SAFETY_FACTOR) as u64
    }

    /// Maximum wait for either echo edge before the read fails (~35ms)
    pub const ECHO_TIMEOUT_US: u64 = calculate_echo_timeout_us();
}

/// Closeness Level Constants
pub mod levels {
    /// Distance at or below which the indicator saturates toward the alarm end
    pub const MIN_DISTANCE_MM: i32 = 400;

    /// Distance at or above which the indicator reads as clear
    pub const MAX_DISTANCE_MM: i32 = 800;

    /// Number of discrete closeness levels (one per pixel)
    pub const MAX_LEVEL: i32 = 8;
}

/// LED and Display Constants
pub mod display {
    /// Number of LEDs in the NeoPixel strip
    pub const NEOPIXEL_COUNT: usize = 8;
}

/// Timing Constants (in milliseconds unless specified)
pub mod timing {
    /// Fixed delay at the end of every measure-map-render cycle (50ms)
    pub const CYCLE_DELAY_MS: u64 = 50;
}
