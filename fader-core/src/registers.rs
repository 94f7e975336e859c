//! Registerkarte des Servo-Fader-Moduls
//!
//! Die Opcode-Werte sind Teil des Wire-Protokolls und müssen exakt zur
//! Geräte-Firmware passen. Alle Diskriminanten sind deshalb explizit
//! festgeschrieben - ein Umsortieren der Varianten ändert das Protokoll
//! nicht.

/// Register-Adressen (Opcodes) des Servo-Fader-Moduls
///
/// Der Opcode ist das erste Byte jeder Bus-Transaktion und wählt das
/// logische Register aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// LED ein-/ausschalten (write)
    OnOff = 0,
    /// Rot-Kanal der LED (write)
    Red = 1,
    /// Grün-Kanal der LED (write)
    Green = 2,
    /// Blau-Kanal der LED (write)
    Blue = 3,
    /// LED-Helligkeit (write)
    Brightness = 4,
    /// Analogwert des Faders (read-only)
    AnalogValue = 5,
    /// Touch-Zustand (read-only)
    Touch = 6,
    /// Zustand des OPTIO-Pins (read-only)
    OptioRead = 7,
    /// Zielposition des Servos (write)
    SetPosition = 8,
}

impl Register {
    /// Anzahl der definierten Register
    pub const COUNT: usize = 9;

    /// Alle Register in Opcode-Reihenfolge
    pub const ALL: [Register; Register::COUNT] = [
        Register::OnOff,
        Register::Red,
        Register::Green,
        Register::Blue,
        Register::Brightness,
        Register::AnalogValue,
        Register::Touch,
        Register::OptioRead,
        Register::SetPosition,
    ];

    /// Wire-Byte des Registers
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Sensor-Register, die nur gelesen werden können
    pub const fn is_read_only(self) -> bool {
        matches!(
            self,
            Register::AnalogValue | Register::Touch | Register::OptioRead
        )
    }
}
