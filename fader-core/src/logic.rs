//! Pure Logic-Funktionen
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::FaderCommand;

/// Rechnet einen rohen Analogwert (0-255) in Prozent (0-100) um.
///
/// # Beispiele
///
/// ```
/// # use fader_core::analog_to_percent;
/// assert_eq!(analog_to_percent(0), 0);
/// assert_eq!(analog_to_percent(255), 100);
/// assert_eq!(analog_to_percent(128), 50);
/// ```
pub fn analog_to_percent(raw: u8) -> u8 {
    (raw as u16 * 100 / 255) as u8
}

/// Interpretiert das Touch-Byte: jeder Wert ungleich 0 gilt als berührt.
pub fn is_touched(raw: u8) -> bool {
    raw != 0
}

/// Entscheidet das LED-Feedback für einen Touch-Übergang.
///
/// Liefert nur an den Flanken ein Kommando: beim Anfassen die Grab-Farbe,
/// beim Loslassen die Idle-Farbe, sonst `None`.
pub fn touch_feedback(
    was_touched: bool,
    now_touched: bool,
    grab: RGB8,
    idle: RGB8,
) -> Option<FaderCommand> {
    match (was_touched, now_touched) {
        (false, true) => Some(FaderCommand::SetColor { color: grab }),
        (true, false) => Some(FaderCommand::SetColor { color: idle }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAB: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
    const IDLE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

    #[test]
    fn test_analog_to_percent_endpoints() {
        assert_eq!(analog_to_percent(0), 0);
        assert_eq!(analog_to_percent(255), 100);
    }

    #[test]
    fn test_analog_to_percent_midpoint() {
        assert_eq!(analog_to_percent(128), 50);
    }

    #[test]
    fn test_is_touched() {
        assert!(!is_touched(0));
        assert!(is_touched(1));
        // Treiber erzwingt keinen 0/1-Bereich, die Interpretation schon
        assert!(is_touched(0x7F));
    }

    #[test]
    fn test_touch_feedback_grab_edge() {
        assert_eq!(
            touch_feedback(false, true, GRAB, IDLE),
            Some(FaderCommand::SetColor { color: GRAB })
        );
    }

    #[test]
    fn test_touch_feedback_release_edge() {
        assert_eq!(
            touch_feedback(true, false, GRAB, IDLE),
            Some(FaderCommand::SetColor { color: IDLE })
        );
    }

    #[test]
    fn test_touch_feedback_no_edge() {
        assert_eq!(touch_feedback(false, false, GRAB, IDLE), None);
        assert_eq!(touch_feedback(true, true, GRAB, IDLE), None);
    }
}
