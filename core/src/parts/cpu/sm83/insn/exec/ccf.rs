use rugby_arch::reg::Register;
use rugby_arch::Byte;

use super::{Cpu, Error, Execute, Flag, Operation, Return};

pub const fn default() -> Operation {
    Operation::Ccf(Ccf::Execute)
}

#[derive(Clone, Debug, Default)]
pub enum Ccf {
    #[default]
    Execute,
}

impl Execute for Ccf {
    #[rustfmt::skip]
    fn exec(self, code: Byte, cpu: &mut Cpu) -> Return {
        match self {
            Self::Execute => execute(code, cpu),
        }
    }
}

impl From<Ccf> for Operation {
    fn from(value: Ccf) -> Self {
        Self::Ccf(value)
    }
}

fn execute(code: Byte, cpu: &mut Cpu) -> Return {
    // Check opcode
    if code != 0x3f {
        return Err(Error::Opcode(code));
    }

    // Execute CCF
    let flags = &mut cpu.reg.f.load();
    let carry = Flag::C.get(flags);
    Flag::N.set(flags, false);
    Flag::H.set(flags, false);
    Flag::C.set(flags, !carry);
    cpu.reg.f.store(*flags);

    // Finish
    Ok(None)
}
