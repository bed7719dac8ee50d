//! Distance to closeness-level mapping.
//!
//! Pure arithmetic, no hardware access, so it unit tests on the host.

use crate::constants::levels::{MAX_DISTANCE_MM, MAX_LEVEL, MIN_DISTANCE_MM};

/// Maps a distance in millimeters to a closeness level.
///
/// `floor(8 - (distance - MIN) / (MAX - MIN) * 8)`, computed exactly with
/// euclidean division so negative intermediate values still floor toward
/// negative infinity. The result is intentionally NOT clamped: values below 0
/// or above [`MAX_LEVEL`] are legal and saturated by the render policy, which
/// treats them as "clear" and "too close" respectively.
pub fn closeness_level(distance_mm: i32) -> i32 {
    let range = MAX_DISTANCE_MM - MIN_DISTANCE_MM;
    let diff = distance_mm - MIN_DISTANCE_MM;
    (MAX_LEVEL * (range - diff)).div_euclid(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_range_distance_maps_to_level_4() {
        // 600mm -> diff = 200, floor(8 - 200/400 * 8) = 4
        assert_eq!(closeness_level(600), 4);
    }

    #[test]
    fn thresholds_map_to_boundary_levels() {
        assert_eq!(closeness_level(MIN_DISTANCE_MM), MAX_LEVEL);
        assert_eq!(closeness_level(MAX_DISTANCE_MM), 0);
    }

    #[test]
    fn distances_below_min_saturate_at_or_past_max_level() {
        assert_eq!(closeness_level(350), 9);
        assert_eq!(closeness_level(0), 16);
        for d in 0..=MIN_DISTANCE_MM {
            assert!(closeness_level(d) >= MAX_LEVEL, "distance {}", d);
        }
        // Strict overflow (all-red clamp) starts below 351mm
        for d in 0..=350 {
            assert!(closeness_level(d) > MAX_LEVEL, "distance {}", d);
        }
    }

    #[test]
    fn just_below_min_floors_to_exactly_max_level() {
        // 351-399mm: diff is negative but small, so the floor lands on 8
        // and the display shows the full general ramp, not the red clamp.
        for d in 351..MIN_DISTANCE_MM {
            assert_eq!(closeness_level(d), MAX_LEVEL, "distance {}", d);
        }
        assert_eq!(closeness_level(399), MAX_LEVEL);
    }

    #[test]
    fn distances_beyond_max_go_negative() {
        assert_eq!(closeness_level(850), -1);
        for d in (MAX_DISTANCE_MM + 1)..2000 {
            assert!(closeness_level(d) <= 0, "distance {}", d);
        }
    }

    #[test]
    fn level_is_monotonic_in_distance() {
        let mut prev = closeness_level(0);
        for d in 1..2000 {
            let level = closeness_level(d);
            assert!(level <= prev, "level rose between {} and {}", d - 1, d);
            prev = level;
        }
    }

    #[test]
    fn floor_rounds_down_between_buckets() {
        // 601mm -> 8 - 201/400 * 8 = 3.98, floors to 3
        assert_eq!(closeness_level(601), 3);
        // 599mm -> 8 - 199/400 * 8 = 4.02, floors to 4
        assert_eq!(closeness_level(599), 4);
    }
}
