// I2C-Bus-Aufbau für das Servo-Fader-Modul
//
// Das Gegenstück zum einmaligen "begin()" der Bus-Anbindung: Takt und
// Pins werden hier konfiguriert, bevor die erste Transaktion läuft.

use esp_hal::Blocking;
use esp_hal::i2c::master::{Config, I2c};
use esp_hal::time::Rate;

use crate::config::I2C_FREQUENCY_KHZ;

/// Baut den blockierenden I2C-Master für den Fader-Bus auf.
///
/// Muss genau einmal pro Prozess laufen; das zurückgegebene Bus-Handle
/// wandert anschließend in den Treiber.
///
/// # Parameter
/// - `i2c0`: I2C0 Peripheral
/// - `sda`: GPIO6 für die Datenleitung
/// - `scl`: GPIO7 für den Takt
pub fn fader_bus<'a>(
    i2c0: esp_hal::peripherals::I2C0<'a>,
    sda: esp_hal::peripherals::GPIO6<'a>,
    scl: esp_hal::peripherals::GPIO7<'a>,
) -> I2c<'a, Blocking> {
    let config = Config::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));

    I2c::new(i2c0, config)
        .expect("I2C init failed")
        .with_sda(sda)
        .with_scl(scl)
}
