//! Core Types für die Fader-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

use crate::logic::{analog_to_percent, is_touched};

/// Momentaufnahme der drei Sensor-Register des Faders
///
/// Wird vom Fader-Task per Broadcast an andere Tasks verteilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaderInputs {
    /// Rohwert des Analog-Registers (0-255)
    pub analog: u8,
    /// Rohwert des Touch-Registers (üblicherweise 0 oder 1)
    pub touch: u8,
    /// Rohwert des OPTIO-Registers
    pub optio: u8,
}

impl FaderInputs {
    /// Interpretation des Touch-Bytes
    pub fn is_touched(&self) -> bool {
        is_touched(self.touch)
    }

    /// Fader-Stellung in Prozent (0-100)
    pub fn analog_percent(&self) -> u8 {
        analog_to_percent(self.analog)
    }
}

/// Kommando an den Fader-Task
///
/// Wird von anderen Tasks (z.B. Touch-Feedback) an den Fader-Task
/// gesendet und dort in den passenden Treiber-Aufruf übersetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaderCommand {
    /// Setze die LED-Farbe
    SetColor { color: RGB8 },
    /// Setze die LED-Helligkeit (0-255)
    SetBrightness(u8),
    /// LED ein-/ausschalten
    SetOnOff(bool),
    /// Fahre den Servo auf die Zielposition (0-255)
    SetPosition(u8),
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for FaderInputs {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "FaderInputs {{ analog: {}, touch: {}, optio: {} }}",
            self.analog,
            self.touch,
            self.optio
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FaderCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FaderCommand::SetColor { color } => {
                defmt::write!(
                    fmt,
                    "SetColor {{ rgb: ({}, {}, {}) }}",
                    color.r,
                    color.g,
                    color.b
                )
            }
            FaderCommand::SetBrightness(value) => {
                defmt::write!(fmt, "SetBrightness({})", value)
            }
            FaderCommand::SetOnOff(on) => {
                defmt::write!(fmt, "SetOnOff({})", on)
            }
            FaderCommand::SetPosition(value) => {
                defmt::write!(fmt, "SetPosition({})", value)
            }
        }
    }
}
