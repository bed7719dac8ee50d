use defmt::*;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::{Duration, Instant, Timer};

use crate::constants::ranging;

/// Why a ranging attempt produced no distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum EchoError {
    /// Echo pin never rose after the trigger pulse (sensor absent or faulty)
    StartTimeout,
    /// Echo pin rose but never fell within the timeout budget
    EndTimeout,
}

/// Ultrasonic rangefinder driver for HC-SR04 style sensors.
///
/// Both echo edges are awaited with a deadline-based poll bounded by
/// [`ranging::ECHO_TIMEOUT_US`], so a disconnected sensor yields an
/// [`EchoError`] instead of blocking the loop forever.
pub struct UltrasonicSensor<'a> {
    trig_pin: Output<'a>,
    echo_pin: Input<'a>,
}

impl<'a> UltrasonicSensor<'a> {
    pub fn new(trig_pin: Output<'a>, echo_pin: Input<'a>) -> Self {
        Self { trig_pin, echo_pin }
    }

    /// Triggers one measurement and returns the distance in millimeters.
    pub async fn measure_distance_mm(&mut self) -> Result<i32, EchoError> {
        // Ensure trigger pin starts low, then send the trigger pulse
        self.trig_pin.set_low();
        Timer::after(Duration::from_micros(ranging::TRIGGER_SETUP_DELAY_US)).await;
        self.trig_pin.set_high();
        Timer::after(Duration::from_micros(ranging::TRIGGER_PULSE_DURATION_US)).await;
        self.trig_pin.set_low();

        let timeout = Duration::from_micros(ranging::ECHO_TIMEOUT_US);

        // Wait for echo to go high (start of echo pulse)
        let trigger_done = Instant::now();
        while self.echo_pin.get_level() == Level::Low {
            if trigger_done.elapsed() > timeout {
                return Err(EchoError::StartTimeout);
            }
            // Yield so the timer can make progress
            Timer::after(Duration::from_micros(ranging::POLLING_DELAY_US)).await;
        }

        // Wait for echo to go low (end of echo pulse)
        let echo_start = Instant::now();
        while self.echo_pin.get_level() == Level::High {
            if echo_start.elapsed() > timeout {
                return Err(EchoError::EndTimeout);
            }
            Timer::after(Duration::from_micros(ranging::POLLING_DELAY_US)).await;
        }

        let elapsed_us = echo_start.elapsed().as_micros();
        Ok(ranging::round_trip_us_to_mm(elapsed_us))
    }

    /// Measures with a bounded number of attempts per cycle.
    ///
    /// Returns the first successful reading, or the last error once
    /// [`ranging::ATTEMPTS_PER_CYCLE`] attempts are exhausted. Repeated
    /// failure is non-fatal for the caller, which holds its last indicator
    /// state.
    pub async fn measure_with_retry(&mut self) -> Result<i32, EchoError> {
        let mut last_err = EchoError::StartTimeout;
        for attempt in 1..=ranging::ATTEMPTS_PER_CYCLE {
            match self.measure_distance_mm().await {
                Ok(distance_mm) => return Ok(distance_mm),
                Err(e) => {
                    debug!("ranging attempt {} failed: {}", attempt, e);
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}
