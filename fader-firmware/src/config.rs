// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use rgb::RGB8;

// ============================================================================
// I2C Konfiguration
// ============================================================================

/// GPIO-Pin für die I2C-Datenleitung (SDA)
pub const I2C_SDA_GPIO: u8 = 6;

/// GPIO-Pin für den I2C-Takt (SCL)
pub const I2C_SCL_GPIO: u8 = 7;

/// I2C-Taktfrequenz in kHz (Fast Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// ============================================================================
// Fader Konfiguration
// ============================================================================

/// 7-Bit I2C-Adresse des Servo-Fader-Moduls
pub const FADER_I2C_ADDRESS: u8 = 0x42;

/// Abfrage-Intervall der Sensor-Register in Millisekunden
pub const POLL_INTERVAL_MS: u64 = 50;

/// LED-Helligkeit beim Start (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// LED-Farbe solange der Fader nicht berührt wird
pub const IDLE_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

/// LED-Farbe solange der Fader angefasst ist
pub const GRAB_COLOR: RGB8 = RGB8 { r: 0, g: 255, b: 0 };

/// Servo-Zielposition beim Start (Mitte des Fahrwegs)
pub const INITIAL_POSITION: u8 = 127;
