//! Treiber für das I2C-Servo-Fader-Modul
//!
//! Übersetzt typisierte Aufrufe in Ein-Byte-Registerzugriffe über einen
//! injizierten Bus (`embedded_hal::i2c::I2c`, blocking). Der Treiber hält
//! keinen Zustand des Geräts - jeder Lesezugriff geht auf den Bus.

use embedded_hal::i2c::I2c;
use rgb::RGB8;

use crate::registers::Register;

/// Treiber-Handle für ein Servo-Fader-Modul am I2C-Bus
///
/// Hält den Bus und die 7-Bit-Adresse des Geräts. Die Adresse ist für die
/// Lebensdauer des Handles fest und wird nicht validiert - eine falsche
/// Adresse führt zu undefiniertem Bus-Verhalten, nicht zu einem gemeldeten
/// Fehler.
///
/// Der Bus muss vor dem ersten Zugriff initialisiert sein (Takt und Pins
/// konfiguriert die Firmware-HAL, siehe `fader_bus()` in der Firmware).
pub struct I2cServoFader<I2C> {
    i2c: I2C,
    address: u8,
    legacy_zero_reads: bool,
}

impl<I2C: I2c> I2cServoFader<I2C> {
    /// Erstellt ein neues Handle. Führt keine Bus-Transaktion aus.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            legacy_zero_reads: false,
        }
    }

    /// Aktiviert das Altverhalten der Lesepfade: Bus-Fehler beim Lesen
    /// liefern `Ok(0)` statt `Err`.
    ///
    /// Damit ist "Gerät meldet 0" nicht von "keine Daten angekommen"
    /// unterscheidbar - bit-exakt das Verhalten der ursprünglichen
    /// Geräte-Anbindung.
    pub fn with_legacy_zero_reads(mut self) -> Self {
        self.legacy_zero_reads = true;
        self
    }

    /// Setzt die LED-Farbe über drei aufeinanderfolgende Registerwrites
    /// (Rot, Grün, Blau).
    ///
    /// Die drei Writes sind nicht atomar: schlägt der Bus zwischendurch
    /// fehl, bleibt das Gerät auf einer teilweise aktualisierten Farbe
    /// stehen und der erste Fehler wird zurückgegeben.
    pub fn set_color(&mut self, color: RGB8) -> Result<(), I2C::Error> {
        self.write_register(Register::Red, color.r)?;
        self.write_register(Register::Green, color.g)?;
        self.write_register(Register::Blue, color.b)
    }

    /// Setzt die LED-Helligkeit (0-255, linear).
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), I2C::Error> {
        self.write_register(Register::Brightness, brightness)
    }

    /// Schaltet die LED ein (`true` → 1) oder aus (`false` → 0).
    pub fn set_on_off(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.write_register(Register::OnOff, if on { 1 } else { 0 })
    }

    /// Setzt die Zielposition des Servos (0-255).
    ///
    /// Die Abbildung auf den mechanischen Fahrweg macht die
    /// Geräte-Firmware, nicht dieser Treiber.
    pub fn set_position(&mut self, position: u8) -> Result<(), I2C::Error> {
        self.write_register(Register::SetPosition, position)
    }

    /// Liest den Analogwert des Faders (0-255, unskaliert).
    pub fn read_analog_value(&mut self) -> Result<u8, I2C::Error> {
        self.read_register(Register::AnalogValue)
    }

    /// Liest den Touch-Zustand.
    ///
    /// Das Gerät meldet üblicherweise 0 (nicht berührt) oder 1 (berührt);
    /// der Treiber reicht das Byte unverändert durch.
    pub fn read_touch(&mut self) -> Result<u8, I2C::Error> {
        self.read_register(Register::Touch)
    }

    /// Liest den momentanen Zustand des OPTIO-Pins.
    pub fn read_optio(&mut self) -> Result<u8, I2C::Error> {
        self.read_register(Register::OptioRead)
    }

    /// Gibt den Bus zurück, z.B. um ihn an ein weiteres Gerät zu reichen.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Write-Primitive: eine Transaktion mit genau 2 Payload-Bytes
    /// (Opcode, Wert).
    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[reg.opcode(), value])
    }

    /// Read-Primitive: Opcode-Write, dann separate 1-Byte-Lesetransaktion.
    ///
    /// Zwischen beiden Phasen liegt ein STOP (kein Repeated-Start) - die
    /// Geräte-Firmware erwartet die abgeschlossene Opcode-Transaktion,
    /// bevor sie die Lese-Anforderung beantwortet.
    fn read_register(&mut self, reg: Register) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        let result = self
            .i2c
            .write(self.address, &[reg.opcode()])
            .and_then(|()| self.i2c.read(self.address, &mut buf));

        match result {
            Ok(()) => Ok(buf[0]),
            Err(_) if self.legacy_zero_reads => Ok(0),
            Err(e) => Err(e),
        }
    }
}
