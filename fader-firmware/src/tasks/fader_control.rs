// Fader Control Task - Steuert das Servo-Fader-Modul über I2C
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use embedded_hal::i2c::I2c;

use fader_core::{FaderCommand, FaderInputs, I2cServoFader};

use crate::config::{
    FADER_I2C_ADDRESS, IDLE_COLOR, INITIAL_POSITION, LED_BRIGHTNESS, POLL_INTERVAL_MS,
};
use crate::hal::fader_bus;
use crate::{FaderCommandReceiver, FaderInputsPublisher};

/// Fader Control Logic - Testbare Logik ohne feste Hardware-Bindung
///
/// Diese Funktion enthält die komplette Fader-Steuerung:
/// - Fährt das Modul in den definierten Startzustand
/// - Verarbeitet eingehende Kommandos (LED, Helligkeit, Servo-Position)
/// - Pollt die Sensor-Register (Analog, Touch, OPTIO)
/// - Broadcastet einen Snapshot, sobald sich ein Eingang ändert
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `I2C: embedded_hal::i2c::I2c` ermöglicht:
/// - Real Hardware (esp-hal I2C Master) im Production-Code
/// - Mock-Bus in Host-Tests
///
/// # Parameter
/// - `fader`: Treiber-Handle (Hardware- oder Mock-Bus)
/// - `inputs_publisher`: PubSub Publisher für Input-Broadcasts
/// - `command_receiver`: Channel Receiver für Fader-Kommandos
pub async fn fader_control_logic<I2C: I2c>(
    mut fader: I2cServoFader<I2C>,
    inputs_publisher: FaderInputsPublisher,
    command_receiver: FaderCommandReceiver,
) {
    // Startzustand: LED an, Idle-Farbe, gedimmte Helligkeit,
    // Servo in Mittelstellung
    if init_fader(&mut fader).is_err() {
        error!("Fader: initial setup failed");
    }

    // Letzter gesendeter Snapshot (Broadcast nur bei Änderung)
    let mut last_inputs: Option<FaderInputs> = None;

    // Hauptschleife: Kommandos verarbeiten, Eingänge pollen
    loop {
        // Eingehende Kommandos verarbeiten (non-blocking)
        while let Ok(cmd) = command_receiver.try_receive() {
            info!("Fader: command received: {}", cmd);
            if apply_command(&mut fader, cmd).is_err() {
                error!("Fader: command failed on bus");
            }
        }

        // Sensor-Register pollen
        match poll_inputs(&mut fader) {
            Ok(inputs) => {
                if last_inputs != Some(inputs) {
                    inputs_publisher.publish_immediate(inputs);
                    info!("Fader: inputs changed: {}", inputs);
                    last_inputs = Some(inputs);
                }
            }
            Err(_) => error!("Fader: input poll failed on bus"),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Fährt das Modul in den definierten Startzustand.
fn init_fader<I2C: I2c>(fader: &mut I2cServoFader<I2C>) -> Result<(), I2C::Error> {
    fader.set_on_off(true)?;
    fader.set_color(IDLE_COLOR)?;
    fader.set_brightness(LED_BRIGHTNESS)?;
    fader.set_position(INITIAL_POSITION)
}

/// Übersetzt ein Kommando in den passenden Treiber-Aufruf.
fn apply_command<I2C: I2c>(
    fader: &mut I2cServoFader<I2C>,
    cmd: FaderCommand,
) -> Result<(), I2C::Error> {
    match cmd {
        FaderCommand::SetColor { color } => fader.set_color(color),
        FaderCommand::SetBrightness(value) => fader.set_brightness(value),
        FaderCommand::SetOnOff(on) => fader.set_on_off(on),
        FaderCommand::SetPosition(value) => fader.set_position(value),
    }
}

/// Liest alle drei Sensor-Register in einen Snapshot.
fn poll_inputs<I2C: I2c>(fader: &mut I2cServoFader<I2C>) -> Result<FaderInputs, I2C::Error> {
    Ok(FaderInputs {
        analog: fader.read_analog_value()?,
        touch: fader.read_touch()?,
        optio: fader.read_optio()?,
    })
}

/// Fader Control Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung (Bus-Aufbau,
/// das einmalige "begin") und ruft dann die testbare
/// `fader_control_logic()` Funktion auf.
///
/// # Parameter
/// - `i2c0`: I2C0 Peripheral
/// - `sda`: GPIO6 für die Datenleitung
/// - `scl`: GPIO7 für den Takt
/// - `inputs_publisher`: PubSub Publisher für Input-Broadcasts
/// - `command_receiver`: Channel Receiver für Fader-Kommandos
#[embassy_executor::task]
pub async fn fader_control_task(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
    inputs_publisher: FaderInputsPublisher,
    command_receiver: FaderCommandReceiver,
) {
    // Bus aufbauen und Treiber-Handle erstellen
    let bus = fader_bus(i2c0, sda, scl);
    let fader = I2cServoFader::new(bus, FADER_I2C_ADDRESS);

    // Business Logic aufrufen (testbar!)
    fader_control_logic(fader, inputs_publisher, command_receiver).await;
}
