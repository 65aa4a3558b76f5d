//! CGB speed switch.

use rugby_arch::mem::{Memory, Result};
use rugby_arch::reg::Register;
use rugby_arch::{Block, Byte, Word};

/// CPU clock speed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Normal speed (4 MiHz).
    #[default]
    Single,
    /// Double speed (8 MiHz).
    Double,
}

impl Mode {
    /// Returns the number of CPU cycles to run per system m-cycle.
    #[must_use]
    pub fn mult(self) -> usize {
        match self {
            Mode::Single => 1,
            Mode::Double => 2,
        }
    }
}

/// Speed switch (`KEY1`) register.
///
/// Armed by writing bit 0; toggled by the CPU's next executed `STOP`
/// instruction. See [`Mode`].
#[derive(Clone, Debug, Default)]
pub struct Control {
    speed: Mode,
    armed: bool,
}

impl Control {
    /// Constructs a new `Control`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current CPU speed.
    #[must_use]
    pub fn speed(&self) -> Mode {
        self.speed
    }

    /// Checks whether a speed switch is armed.
    #[must_use]
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Performs an armed speed switch, toggling between single and double
    /// speed. A no-op if not armed.
    pub fn switch(&mut self) {
        if self.armed {
            self.speed = match self.speed {
                Mode::Single => Mode::Double,
                Mode::Double => Mode::Single,
            };
            self.armed = false;
        }
    }
}

impl Block for Control {
    fn reset(&mut self) {
        std::mem::take(self);
    }
}

impl Memory for Control {
    fn read(&self, _: Word) -> Result<Byte> {
        Ok(self.load())
    }

    fn write(&mut self, _: Word, value: Byte) -> Result<()> {
        self.store(value);
        Ok(())
    }
}

impl Register for Control {
    type Value = Byte;

    fn load(&self) -> Self::Value {
        let speed = Byte::from(matches!(self.speed, Mode::Double)) << 7;
        let armed = Byte::from(self.armed);
        0x7e | speed | armed
    }

    fn store(&mut self, value: Self::Value) {
        self.armed = value & 0x01 != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_then_switch_toggles_speed() {
        let mut key1 = Control::new();
        assert_eq!(key1.speed(), Mode::Single);
        key1.store(0x01);
        assert!(key1.armed());
        key1.switch();
        assert_eq!(key1.speed(), Mode::Double);
        assert!(!key1.armed());
    }

    #[test]
    fn switch_without_arm_is_noop() {
        let mut key1 = Control::new();
        key1.switch();
        assert_eq!(key1.speed(), Mode::Single);
    }
}
