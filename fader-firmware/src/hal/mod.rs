// Hardware Abstraction Layer (HAL) Module
//
// Kapselt die Bus-Initialisierung, damit Tasks keinen
// direkten esp-hal Peripherie-Code enthalten.

pub mod fader_bus;

pub use fader_bus::fader_bus;
