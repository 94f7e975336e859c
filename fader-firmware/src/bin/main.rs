// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use fader_steuerung::tasks::{fader_control_task, touch_feedback_task};
use fader_steuerung::{FaderCommandChannel, FaderInputsChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Input-Broadcast-Channel erstellen (Fader Task → Touch-Feedback)
    // PubSubChannel für Broadcast: alle Subscribers bekommen jeden Snapshot
    static INPUTS_CHANNEL: static_cell::StaticCell<FaderInputsChannel> =
        static_cell::StaticCell::new();
    let inputs_channel = &*INPUTS_CHANNEL.init(FaderInputsChannel::new());
    let inputs_publisher = inputs_channel.publisher().unwrap();

    // Command-Channel erstellen (Touch-Feedback → Fader Task)
    static COMMAND_CHANNEL: static_cell::StaticCell<FaderCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(FaderCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn Fader Control Task (besitzt den I2C-Bus und das Treiber-Handle)
    spawner
        .spawn(fader_control_task(
            peripherals.I2C0,
            peripherals.GPIO6,
            peripherals.GPIO7,
            inputs_publisher,
            command_receiver,
        ))
        .unwrap();

    // Spawn Touch-Feedback Task (mit Subscriber für Input-Broadcasts)
    let inputs_subscriber = inputs_channel.subscriber().unwrap();
    spawner
        .spawn(touch_feedback_task(inputs_subscriber, command_sender))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
