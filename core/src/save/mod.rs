//! Save states.
//!
//! Captures and restores the architecturally visible state of a
//! [`GameBoy`](crate::model::GameBoy): its register files, RAM contents, and
//! cartridge RAM.
//!
//! Transfer engines (DMA, HDMA) and the timer's divider are intentionally
//! excluded from restoration: blindly replaying their control registers
//! through the bus would re-arm a transfer or reset the divider rather than
//! restore one, since those registers are write-triggered, not
//! write-idempotent. A save captured mid-transfer resumes as though the
//! transfer had just finished.

use std::io::{Cursor, Read};

use rugby_arch::reg::Port;
use thiserror::Error;

use crate::model::GameBoy;
use crate::parts::cpu::sm83::Select16;

/// Magic number identifying a save state produced by this crate.
const MAGIC: [u8; 4] = *b"RBY\0";

/// Save-state format version.
const VERSION: u32 = 1;

/// I/O register addresses excluded from the blind register-range restore,
/// since writing their saved value back through the bus triggers a side
/// effect rather than restoring state:
///
/// - `$FF04` (DIV): any write resets the divider to zero.
/// - `$FF46` (DMA): any write, while idle, arms a new transfer.
/// - `$FF51..=$FF55` (HDMA): writing `$FF55` arms a new transfer.
const SKIP: [u16; 7] = [0xff04, 0xff46, 0xff51, 0xff52, 0xff53, 0xff54, 0xff55];

/// The CPU's word registers, in save-state order.
const WORDS: [Select16; 6] = [
    Select16::AF,
    Select16::BC,
    Select16::DE,
    Select16::HL,
    Select16::SP,
    Select16::PC,
];

/// An error encountered while restoring a save state.
#[derive(Debug, Error)]
pub enum Error {
    /// Save state ended before it was fully read.
    #[error("truncated save state")]
    Eof,
    /// Save state did not begin with the expected magic number.
    #[error("not a rugby-core save state")]
    BadMagic,
    /// Save state was produced by an incompatible format version.
    #[error("unsupported save state version: {0}")]
    BadVersion(u32),
    /// Save state was produced for a different cartridge.
    #[error("save state is for `{expected}`, but `{found}` is loaded")]
    Mismatch {
        /// Title recorded in the save state.
        expected: String,
        /// Title of the currently loaded cartridge.
        found: String,
    },
}

/// Serializes a [`GameBoy`]'s state into a byte buffer.
#[must_use]
pub fn serialise(gb: &GameBoy) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&MAGIC);
    buf.extend_from_slice(&VERSION.to_le_bytes());
    write_blob(&mut buf, title(gb).as_bytes());

    // I/O registers
    let io: Vec<u8> = (0xff00u16..=0xff7f).map(|addr| gb.cpu.read(addr)).collect();
    write_blob(&mut buf, &io);
    buf.push(gb.cpu.read(0xffff));

    // RAM
    let vram = gb.vram.borrow();
    for bank in vram.raw() {
        write_blob(&mut buf, bank);
    }
    drop(vram);
    write_blob(&mut buf, gb.oam.borrow().inner());
    let wram = gb.cpu.mem.wram.borrow();
    for bank in wram.raw() {
        write_blob(&mut buf, bank);
    }
    drop(wram);
    write_blob(&mut buf, gb.cpu.mem.hram.borrow().inner());

    // CGB palette RAM
    write_blob(&mut buf, gb.ppu.reg.bcp.borrow().raw());
    write_blob(&mut buf, gb.ppu.reg.ocp.borrow().raw());

    // Cartridge RAM
    let mut sram = Vec::new();
    if let Some(cart) = gb.cart() {
        let _ = cart.dump(&mut sram);
    }
    write_blob(&mut buf, &sram);

    // CPU registers
    for reg in WORDS {
        buf.extend_from_slice(&Port::<u16>::load(&gb.cpu, reg).to_le_bytes());
    }

    buf
}

/// Restores a [`GameBoy`]'s state from a byte buffer produced by
/// [`serialise`].
///
/// # Errors
///
/// Returns an error if `bytes` is truncated, carries an unrecognized magic
/// number or format version, or was captured for a different cartridge than
/// the one currently loaded.
pub fn deserialise(gb: &mut GameBoy, bytes: &[u8]) -> Result<(), Error> {
    let mut cur = Cursor::new(bytes);

    let mut magic = [0; MAGIC.len()];
    cur.read_exact(&mut magic).map_err(|_| Error::Eof)?;
    if magic != MAGIC {
        return Err(Error::BadMagic);
    }
    let version = read_u32(&mut cur)?;
    if version != VERSION {
        return Err(Error::BadVersion(version));
    }
    let saved = String::from_utf8_lossy(&read_blob(&mut cur)?).into_owned();
    let found = title(gb);
    if saved != found {
        return Err(Error::Mismatch {
            expected: saved,
            found,
        });
    }

    // I/O registers
    let io = read_blob(&mut cur)?;
    for (i, &data) in io.iter().enumerate() {
        let addr = 0xff00u16 + i as u16;
        if !SKIP.contains(&addr) {
            gb.cpu.write(addr, data);
        }
    }
    let mut ie = [0; 1];
    cur.read_exact(&mut ie).map_err(|_| Error::Eof)?;
    gb.cpu.write(0xffff, ie[0]);

    // RAM
    {
        let mut vram = gb.vram.borrow_mut();
        for bank in vram.raw_mut() {
            copy_ram(&read_blob(&mut cur)?, bank)?;
        }
    }
    copy_ram(&read_blob(&mut cur)?, gb.oam.borrow_mut().inner_mut())?;
    {
        let mut wram = gb.cpu.mem.wram.borrow_mut();
        for bank in wram.raw_mut() {
            copy_ram(&read_blob(&mut cur)?, bank)?;
        }
    }
    copy_ram(
        &read_blob(&mut cur)?,
        gb.cpu.mem.hram.borrow_mut().inner_mut(),
    )?;

    // CGB palette RAM
    copy_ram(&read_blob(&mut cur)?, gb.ppu.reg.bcp.borrow_mut().raw_mut())?;
    copy_ram(&read_blob(&mut cur)?, gb.ppu.reg.ocp.borrow_mut().raw_mut())?;

    // Cartridge RAM
    let sram = read_blob(&mut cur)?;
    if let Some(cart) = &mut gb.cart {
        let _ = cart.flash(&mut &sram[..]);
    }

    // CPU registers
    for reg in WORDS {
        let mut word = [0; 2];
        cur.read_exact(&mut word).map_err(|_| Error::Eof)?;
        Port::<u16>::store(&mut gb.cpu, reg, u16::from_le_bytes(word));
    }

    Ok(())
}

fn title(gb: &GameBoy) -> String {
    gb.cart().map_or_else(String::new, |cart| cart.title().to_string())
}

fn write_blob(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buf.extend_from_slice(data);
}

fn read_u32(cur: &mut Cursor<&[u8]>) -> Result<u32, Error> {
    let mut word = [0; 4];
    cur.read_exact(&mut word).map_err(|_| Error::Eof)?;
    Ok(u32::from_le_bytes(word))
}

fn read_blob(cur: &mut Cursor<&[u8]>) -> Result<Vec<u8>, Error> {
    let len = read_u32(cur)? as usize;
    let mut data = vec![0; len];
    cur.read_exact(&mut data).map_err(|_| Error::Eof)?;
    Ok(data)
}

fn copy_ram(data: &[u8], dst: &mut [u8]) -> Result<(), Error> {
    if data.len() != dst.len() {
        return Err(Error::Eof);
    }
    dst.copy_from_slice(data);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::part::proc::Processor;
    use crate::parts::cart::Cartridge;

    #[test]
    fn roundtrip_preserves_cpu_registers() {
        let mut gb = GameBoy::new(None, Some(Cartridge::blank()));
        Port::<u16>::store(&mut gb.cpu, Select16::HL, 0x1234);
        gb.cpu.goto(0x0150);

        let state = serialise(&gb);

        let mut restored = GameBoy::new(None, Some(Cartridge::blank()));
        deserialise(&mut restored, &state).unwrap();

        assert_eq!(Port::<u16>::load(&restored.cpu, Select16::HL), 0x1234);
        assert_eq!(Port::<u16>::load(&restored.cpu, Select16::PC), 0x0150);
    }

    #[test]
    fn roundtrip_preserves_vram() {
        let mut gb = GameBoy::new(None, Some(Cartridge::blank()));
        gb.cpu.write(0x8000, 0xaa);

        let state = serialise(&gb);

        let mut restored = GameBoy::new(None, Some(Cartridge::blank()));
        deserialise(&mut restored, &state).unwrap();

        assert_eq!(restored.cpu.read(0x8000), 0xaa);
    }

    #[test]
    fn mismatched_cartridge_is_rejected() {
        let gb = GameBoy::new(None, Some(Cartridge::blank()));
        let state = serialise(&gb);

        let mut other = GameBoy::new(None, None);
        assert!(matches!(
            deserialise(&mut other, &state),
            Err(Error::Mismatch { .. })
        ));
    }

    #[test]
    fn truncated_state_is_rejected() {
        let gb = GameBoy::new(None, Some(Cartridge::blank()));
        let mut state = serialise(&gb);
        state.truncate(4);

        let mut restored = GameBoy::new(None, Some(Cartridge::blank()));
        assert!(matches!(deserialise(&mut restored, &state), Err(Error::Eof)));
    }
}
