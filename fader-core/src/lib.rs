//! Fader Core - Plattform-agnostischer Treiber für das I2C-Servo-Fader-Modul
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Der Treiber ist generisch über `embedded_hal::i2c::I2c` und läuft damit
//! gegen jeden HAL-Bus genauso wie gegen einen Mock-Bus in Host-Tests.

#![no_std]

pub mod driver;
pub mod logic;
pub mod registers;
pub mod types;

// Re-exports für einfachen Zugriff
pub use driver::I2cServoFader;
pub use logic::{analog_to_percent, is_touched, touch_feedback};
pub use registers::Register;
pub use types::{FaderCommand, FaderInputs};
