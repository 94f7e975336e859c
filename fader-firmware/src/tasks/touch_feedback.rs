// Touch-Feedback Task - LED-Rückmeldung beim Anfassen des Faders
use defmt::{info, warn};

use fader_core::logic::touch_feedback;
use fader_core::FaderInputs;

use crate::config::{GRAB_COLOR, IDLE_COLOR};
use crate::{FaderCommandSender, FaderInputsSubscriber};

/// Touch-Feedback Task
///
/// Abonniert die Input-Broadcasts des Fader-Tasks und sendet an den
/// Touch-Flanken LED-Kommandos zurück: Grab-Farbe beim Anfassen,
/// Idle-Farbe beim Loslassen. Zwischen den Flanken passiert nichts.
///
/// # Parameter
/// - `inputs_subscriber`: PubSub Subscriber für Input-Broadcasts
/// - `command_sender`: Channel Sender für Fader-Kommandos
#[embassy_executor::task]
pub async fn touch_feedback_task(
    mut inputs_subscriber: FaderInputsSubscriber,
    command_sender: FaderCommandSender,
) {
    let mut was_touched = false;

    loop {
        let inputs: FaderInputs = inputs_subscriber.next_message_pure().await;
        let now_touched = inputs.is_touched();

        if let Some(cmd) = touch_feedback(was_touched, now_touched, GRAB_COLOR, IDLE_COLOR) {
            info!(
                "Touch: {} (Fader bei {}%)",
                if now_touched { "grabbed" } else { "released" },
                inputs.analog_percent()
            );
            if command_sender.try_send(cmd).is_err() {
                warn!("Touch: command channel full, feedback dropped");
            }
        }

        was_touched = now_touched;
    }
}
