// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von fader-core
pub use fader_core::{FaderCommand, FaderInputs, I2cServoFader, Register};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Publisher<'static, NoopRawMutex, FaderInputs, 2, 4, 1>
// Nutze:  FaderInputsPublisher

/// PubSubChannel für Fader-Input-Broadcasts
/// - 2: Nachrichten-Kapazität im Queue
/// - 4: Maximale Anzahl Subscribers (Touch-Feedback + Reserve)
/// - 1: Maximale Anzahl Publishers (nur der Fader-Task)
pub type FaderInputsChannel = PubSubChannel<NoopRawMutex, FaderInputs, 2, 4, 1>;

/// Publisher für Fader-Input-Broadcasts
/// Erzeugt aus FaderInputsChannel
pub type FaderInputsPublisher = Publisher<'static, NoopRawMutex, FaderInputs, 2, 4, 1>;

/// Subscriber für Fader-Input-Broadcasts
/// Empfängt Broadcasts vom FaderInputsPublisher
pub type FaderInputsSubscriber = Subscriber<'static, NoopRawMutex, FaderInputs, 2, 4, 1>;

/// Channel für Fader-Kommandos (Touch-Feedback → Fader Task)
/// - 4: Nachrichten-Kapazität (Touch-Flanken können sich kurz stauen)
pub type FaderCommandChannel = embassy_sync::channel::Channel<NoopRawMutex, FaderCommand, 4>;

/// Sender für Fader-Kommandos (Touch-Feedback → Fader Task)
/// Erzeugt aus FaderCommandChannel
pub type FaderCommandSender = Sender<'static, NoopRawMutex, FaderCommand, 4>;

/// Receiver für Fader-Kommandos (Fader Task empfängt)
/// Empfängt Kommandos vom FaderCommandSender
pub type FaderCommandReceiver = Receiver<'static, NoopRawMutex, FaderCommand, 4>;
