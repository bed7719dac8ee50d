//! Closeness-level rendering policy for the 8-pixel strip.
//!
//! Decides what the strip should show for a given level and skips frames
//! whose level matches the last one rendered. Pure data in, data out: the
//! actual strip write happens in [`crate::neo_pixel`], which keeps this
//! policy host-testable.

use smart_leds::RGB8;

use crate::constants::display::NEOPIXEL_COUNT;
use crate::constants::levels::MAX_LEVEL;

/// "Clear" white, deliberately dimmed to match the calibrated strip brightness
pub const WHITE: RGB8 = RGB8 {
    r: 120,
    g: 120,
    b: 120,
};
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const ORANGE: RGB8 = RGB8 {
    r: 255,
    g: 165,
    b: 0,
};
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Fixed per-pixel ramp: green nearest the far end, red nearest the alarm end
const RAMP: [RGB8; NEOPIXEL_COUNT] = [GREEN, GREEN, GREEN, GREEN, ORANGE, ORANGE, RED, RED];

/// Computes the full frame for a closeness level.
///
/// Saturates at both ends: levels at or below 0 read as "clear" (all white),
/// levels above [`MAX_LEVEL`] as the too-close alarm (all red). Level 0 takes
/// the white branch and level 8 the general ramp; the clamp branches are
/// exactly `<= 0` and `> 8`.
pub fn frame_for_level(level: i32) -> [RGB8; NEOPIXEL_COUNT] {
    if level <= 0 {
        return [WHITE; NEOPIXEL_COUNT];
    }
    if level > MAX_LEVEL {
        return [RED; NEOPIXEL_COUNT];
    }

    let mut frame = [OFF; NEOPIXEL_COUNT];
    for (i, pixel) in frame.iter_mut().enumerate() {
        if (i as i32) < level {
            *pixel = RAMP[i];
        }
    }
    frame
}

/// Owns the last-rendered level so redundant identical frames are skipped.
///
/// A fresh indicator has rendered nothing, so the first [`update`] always
/// produces a frame regardless of level.
///
/// [`update`]: Indicator::update
pub struct Indicator {
    last_level: Option<i32>,
}

impl Indicator {
    pub const fn new() -> Self {
        Self { last_level: None }
    }

    /// Returns the frame to write for `level`, or `None` when the level
    /// matches the last rendered one and the strip write can be skipped.
    pub fn update(&mut self, level: i32) -> Option<[RGB8; NEOPIXEL_COUNT]> {
        if self.last_level == Some(level) {
            return None;
        }
        self.last_level = Some(level);
        Some(frame_for_level(level))
    }

    /// Level most recently handed to the strip, if any
    pub fn last_level(&self) -> Option<i32> {
        self.last_level
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_4_lights_first_four_pixels_green() {
        let frame = frame_for_level(4);
        assert_eq!(&frame[..4], &[GREEN; 4]);
        assert_eq!(&frame[4..], &[OFF; 4]);
    }

    #[test]
    fn level_6_reaches_into_the_orange_band() {
        let frame = frame_for_level(6);
        assert_eq!(frame, [GREEN, GREEN, GREEN, GREEN, ORANGE, ORANGE, OFF, OFF]);
    }

    #[test]
    fn level_8_lights_the_full_ramp() {
        assert_eq!(frame_for_level(8), RAMP);
    }

    #[test]
    fn zero_and_below_render_clear_white() {
        assert_eq!(frame_for_level(0), [WHITE; NEOPIXEL_COUNT]);
        assert_eq!(frame_for_level(-1), [WHITE; NEOPIXEL_COUNT]);
        assert_eq!(frame_for_level(-30), [WHITE; NEOPIXEL_COUNT]);
    }

    #[test]
    fn overflow_renders_all_red() {
        assert_eq!(frame_for_level(9), [RED; NEOPIXEL_COUNT]);
        assert_eq!(frame_for_level(100), [RED; NEOPIXEL_COUNT]);
    }

    #[test]
    fn repeated_level_is_rendered_once() {
        let mut indicator = Indicator::new();
        assert!(indicator.update(4).is_some());
        assert!(indicator.update(4).is_none());
        assert!(indicator.update(5).is_some());
        assert!(indicator.update(4).is_some());
    }

    #[test]
    fn first_update_renders_even_at_level_zero() {
        // A fresh indicator must not pretend level 0 was already shown.
        let mut indicator = Indicator::new();
        assert_eq!(indicator.last_level(), None);
        assert_eq!(indicator.update(0), Some([WHITE; NEOPIXEL_COUNT]));
        assert_eq!(indicator.last_level(), Some(0));
    }

    #[test]
    fn out_of_range_levels_still_memoize() {
        let mut indicator = Indicator::new();
        assert!(indicator.update(12).is_some());
        assert!(indicator.update(12).is_none());
        // A different overflow level is a new frame even though it renders
        // the same all-red pattern.
        assert!(indicator.update(13).is_some());
    }
}
