use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use crate::constants::display::NEOPIXEL_COUNT;
use crate::indicator::OFF;

/// NeoPixel strip wrapper for easier management.
///
/// Owns the pixel buffer; [`show`](Self::show) transmits the whole strip in
/// one DMA write, so a frame is always written in full or not at all.
pub struct NeoPixelStrip<'a> {
    ws2812: PioWs2812<'a, PIO0, 0, NEOPIXEL_COUNT>,
    buffer: [RGB8; NEOPIXEL_COUNT],
}

impl<'a> NeoPixelStrip<'a> {
    pub fn new(ws2812: PioWs2812<'a, PIO0, 0, NEOPIXEL_COUNT>) -> Self {
        Self {
            ws2812,
            buffer: [RGB8::default(); NEOPIXEL_COUNT],
        }
    }

    /// Replace the whole buffer with a new frame
    pub fn set_frame(&mut self, frame: &[RGB8; NEOPIXEL_COUNT]) {
        self.buffer = *frame;
    }

    /// Turn all LEDs off
    pub fn clear(&mut self) {
        self.buffer = [OFF; NEOPIXEL_COUNT];
    }

    /// Write the current buffer to the LED strip
    pub async fn show(&mut self) {
        self.ws2812.write(&self.buffer).await;
    }
}
