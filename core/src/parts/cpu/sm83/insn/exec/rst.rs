use rugby_arch::reg::Register;
use rugby_arch::Byte;

use super::{Cpu, Error, Execute, Operation, Return};

pub const fn default() -> Operation {
    Operation::Rst(Rst::Delay)
}

#[derive(Clone, Debug, Default)]
pub enum Rst {
    #[default]
    Delay,
    Push0(u16),
    Push1(u16),
    Jump(u16),
}

impl Execute for Rst {
    #[rustfmt::skip]
    fn exec(self, code: Byte, cpu: &mut Cpu) -> Return {
        match self {
            Self::Delay      => delay(code, cpu),
            Self::Push0(a16) => push0(code, cpu, a16),
            Self::Push1(a16) => push1(code, cpu, a16),
            Self::Jump(a16)  => jump(code, cpu, a16),
        }
    }
}

impl From<Rst> for Operation {
    fn from(value: Rst) -> Self {
        Self::Rst(value)
    }
}

fn delay(code: Byte, _: &mut Cpu) -> Return {
    // Check opcode, decode the fixed restart vector
    match code {
        0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff => {
            let a16 = u16::from(code & 0x38);
            // Proceed
            Ok(Some(Rst::Push0(a16).into()))
        }
        code => Err(Error::Opcode(code)),
    }
}

fn push0(_: Byte, cpu: &mut Cpu, a16: u16) -> Return {
    // Load PC
    let pc = cpu.reg.pc.load().to_le_bytes();
    // Push [--SP] <- upper(PC)
    cpu.pushbyte(pc[1]);

    // Proceed
    Ok(Some(Rst::Push1(a16).into()))
}

fn push1(_: Byte, cpu: &mut Cpu, a16: u16) -> Return {
    // Load PC
    let pc = cpu.reg.pc.load().to_le_bytes();
    // Push [--SP] <- lower(PC)
    cpu.pushbyte(pc[0]);

    // Proceed
    Ok(Some(Rst::Jump(a16).into()))
}

fn jump(_: Byte, cpu: &mut Cpu, a16: u16) -> Return {
    // Perform jump to the restart vector
    cpu.reg.pc.store(a16);

    // Finish
    Ok(None)
}
