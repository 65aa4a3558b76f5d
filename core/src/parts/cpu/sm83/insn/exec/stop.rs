use rugby_arch::Byte;

use super::{Cpu, Error, Execute, Operation, Return};

pub const fn default() -> Operation {
    Operation::Stop(Stop::Execute)
}

#[derive(Clone, Debug, Default)]
pub enum Stop {
    #[default]
    Execute,
}

impl Execute for Stop {
    #[rustfmt::skip]
    fn exec(self, code: Byte, cpu: &mut Cpu) -> Return {
        match self {
            Self::Execute => execute(code, cpu),
        }
    }
}

impl From<Stop> for Operation {
    fn from(value: Stop) -> Self {
        Self::Stop(value)
    }
}

fn execute(code: Byte, cpu: &mut Cpu) -> Return {
    // Check opcode
    if code != 0x10 {
        return Err(Error::Opcode(code));
    }

    // Execute STOP
    // <https://gbdev.io/pandocs/imgs/gb_stop.png>
    //
    // If a speed switch is armed, perform it here; otherwise this STOP is
    // the (rarely used) low-power halt, which is not modelled.
    cpu.key1.borrow_mut().switch();

    // Finish
    Ok(None)
}
