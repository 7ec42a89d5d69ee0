//! kbdemu firmware - nRF52840 enumerates as a USB boot keyboard and types
//! a demo string periodically.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};
use kbdemu::config;
use kbdemu::usb::hid_device::{self, KeyboardWriter, UsbDriver};
use kbdemu::usb::run_report_loop;
use kbdemu::Keyboard;
use {defmt_rtt as _, panic_probe as _};

static KEYBOARD: Keyboard<CriticalSectionRawMutex> = Keyboard::new();

#[embassy_executor::task]
async fn usb_task(device: embassy_usb::UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn report_task(mut writer: KeyboardWriter) -> ! {
    run_report_loop(&KEYBOARD, &mut writer, config::KEYBOARD_ENDPOINT).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // USB needs the high-frequency crystal running.
    let clock = embassy_nrf::pac::CLOCK;
    clock.tasks_hfclkstart().write_value(1);
    while clock.events_hfclkstarted().read() != 1 {}

    let usb = hid_device::init(p.USBD);
    spawner.must_spawn(usb_task(usb.device));
    spawner.must_spawn(report_task(usb.keyboard_writer));

    info!("kbdemu ready");

    loop {
        Timer::after(Duration::from_secs(config::DEMO_REPEAT_SECS)).await;
        info!("typing demo text");
        if let Err(e) = KEYBOARD
            .type_string(config::DEMO_TEXT, config::DEFAULT_HOLD)
            .await
        {
            warn!("demo typing failed: {}", e);
        }
    }
}
