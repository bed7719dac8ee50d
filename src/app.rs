use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::{Duration, Timer};

use distance_warning::constants::timing;
use distance_warning::indicator::Indicator;
use distance_warning::level::closeness_level;
use distance_warning::neo_pixel::NeoPixelStrip;
use distance_warning::ultrasonic::UltrasonicSensor;

use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Program metadata for `picotool info`.
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Distance Warning"),
    embassy_rp::binary_info::rp_program_description!(
        c"Ultrasonic distance warning on an 8-pixel NeoPixel strip"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    info!("Distance warning starting");
    info!("Pin connections:");
    info!("  Trigger: GPIO 3");
    info!("  Echo: GPIO 2");
    info!("  NeoPixel data: GPIO 0");

    // HC-SR04 ultrasonic sensor: Trig on GPIO 3, Echo on GPIO 2
    let trig = Output::new(p.PIN_3, Level::Low);
    let echo = Input::new(p.PIN_2, Pull::None);
    let mut sensor = UltrasonicSensor::new(trig, echo);

    // WS2812 strip on GPIO 0 via PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_0, &program);
    let mut strip = NeoPixelStrip::new(ws2812);

    // Start from a defined state
    strip.clear();
    strip.show().await;

    let mut indicator = Indicator::new();

    loop {
        match sensor.measure_with_retry().await {
            Ok(distance_mm) => {
                let level = closeness_level(distance_mm);
                debug!("distance {} mm, level {}", distance_mm, level);

                if let Some(frame) = indicator.update(level) {
                    info!("rendering level {} ({} mm)", level, distance_mm);
                    strip.set_frame(&frame);
                    strip.show().await;
                }
            }
            // Non-fatal: hold the last indicator state for this cycle
            Err(e) => warn!("ranging failed, holding last state: {}", e),
        }

        Timer::after(Duration::from_millis(timing::CYCLE_DELAY_MS)).await;
    }
}
