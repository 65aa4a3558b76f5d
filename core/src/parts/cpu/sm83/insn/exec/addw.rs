use rugby_arch::reg::Register;
use rugby_arch::Byte;

use super::{Cpu, Error, Execute, Flag, Operation, Return};

pub const fn default() -> Operation {
    Operation::Addw(Addw::Fetch)
}

#[derive(Clone, Debug, Default)]
pub enum Addw {
    #[default]
    Fetch,
    Execute(u16),
    Add(Byte),
    Delay1(u16),
    Delay2(u16),
}

impl Execute for Addw {
    #[rustfmt::skip]
    fn exec(self, code: Byte, cpu: &mut Cpu) -> Return {
        match self {
            Self::Fetch        => fetch(code, cpu),
            Self::Execute(op2) => execute(code, cpu, op2),
            Self::Add(e8)      => add(code, cpu, e8),
            Self::Delay1(res)  => delay1(code, cpu, res),
            Self::Delay2(res)  => delay2(code, cpu, res),
        }
    }
}

impl From<Addw> for Operation {
    fn from(value: Addw) -> Self {
        Self::Addw(value)
    }
}

fn fetch(code: Byte, cpu: &mut Cpu) -> Return {
    // Check opcode
    let op2 = match code {
        0x09 => cpu.reg.bc().load(),
        0x19 => cpu.reg.de().load(),
        0x29 => cpu.reg.hl().load(),
        0x39 => cpu.reg.sp.load(),
        0xe8 => {
            // Fetch e8 <- [PC++]
            let e8 = cpu.fetchbyte();
            // Proceed
            return Ok(Some(Addw::Add(e8).into()));
        }
        code => return Err(Error::Opcode(code)),
    };

    // Proceed
    Ok(Some(Addw::Execute(op2).into()))
}

fn execute(code: Byte, cpu: &mut Cpu, op2: u16) -> Return {
    // Execute ADD HL, r16
    if !matches!(code, 0x09 | 0x19 | 0x29 | 0x39) {
        return Err(Error::Opcode(code));
    }
    let op1 = cpu.reg.hl().load();
    let res = op1.wrapping_add(op2);

    // Set flags
    let flags = &mut cpu.reg.f.load();
    Flag::N.set(flags, false);
    Flag::H.set(flags, 0x0fff < (op1 & 0x0fff) + (op2 & 0x0fff));
    Flag::C.set(flags, res < op1);
    cpu.reg.f.store(*flags);

    // Store HL
    cpu.reg.hl_mut().store(res);

    // Finish
    Ok(None)
}

fn add(code: Byte, cpu: &mut Cpu, e8: Byte) -> Return {
    // Execute ADD SP, e8
    if code != 0xe8 {
        return Err(Error::Opcode(code));
    }
    let sp = cpu.reg.sp.load();
    let e16 = e8 as i8 as u16;
    let res = sp.wrapping_add(e16);

    // Set flags
    let flags = &mut cpu.reg.f.load();
    Flag::Z.set(flags, false);
    Flag::N.set(flags, false);
    Flag::H.set(flags, 0x000f < (sp & 0x000f) + (e16 & 0x000f));
    Flag::C.set(flags, 0x00ff < (sp & 0x00ff) + (e16 & 0x00ff));
    cpu.reg.f.store(*flags);

    // Proceed
    Ok(Some(Addw::Delay1(res).into()))
}

fn delay1(_: Byte, _: &mut Cpu, res: u16) -> Return {
    // Delay by 1 cycle

    // Proceed
    Ok(Some(Addw::Delay2(res).into()))
}

fn delay2(_: Byte, cpu: &mut Cpu, res: u16) -> Return {
    // Store SP
    cpu.reg.sp.store(res);

    // Finish
    Ok(None)
}
