//! Audio registers.

use bitfield_struct::bitfield;
use rugby_arch::mem::Memory;
use rugby_arch::reg::Register;
use rugby_arch::{Byte, Word};

/// Audio master control.
///
/// See more details [here][nr52].
///
/// [nr52]: https://gbdev.io/pandocs/Audio_Registers.html#ff26--nr52-audio-master-control
#[bitfield(u8, order = msb)]
pub struct Nr52 {
    /// `NR52[7]`: Audio enable.
    ///
    /// This controls whether the APU is powered on at all (akin to [LCDC bit
    /// 7][lcdc.7]). Turning the APU off drains less power (around 16%), but
    /// clears all APU registers and makes them read-only until turned back on,
    /// except NR521. Turning the APU off, however, does not affect [Wave
    /// RAM](Wave), which can always be read/written, nor the [DIV-APU] counter.
    ///
    /// [lcdc.7]: super::ppu::Lcdc::Enable
    #[bits(1)]
    pub enable: bool,
    /// `NR52[6:4]`: Padding.
    #[bits(3)]
    __: u8,
    /// `NR52[3]`: Channel 4 enabled. (Read-only)
    ///
    /// Allows checking whether this channel is active. Writing to this bit does
    /// **not** enable or disable the channel.
    #[bits(1)]
    pub ch4_on: bool,
    /// `NR52[2]`: Channel 3 enabled. (Read-only)
    ///
    /// Allows checking whether this channel is active. Writing to this bit does
    /// **not** enable or disable the channel.
    #[bits(1)]
    pub ch3_on: bool,
    /// `NR52[1]`: Channel 2 enabled. (Read-only)
    ///
    /// Allows checking whether this channel is active. Writing to this bit does
    /// **not** enable or disable the channel.
    #[bits(1)]
    pub ch2_on: bool,
    /// `NR52[0]`: Channel 1 enabled. (Read-only)
    ///
    /// Allows checking whether this channel is active. Writing to this bit does
    /// **not** enable or disable the channel.
    #[bits(1)]
    pub ch1_on: bool,
}

impl Nr52 {
    /// Readable bit mask.
    const READABLE: Byte = 0b1_000_1111;

    /// Writable bit mask.
    const WRITABLE: Byte = 0b1_000_0000;
}

impl Memory for Nr52 {
    fn read(&self, _: Word) -> rugby_arch::mem::Result<Byte> {
        Ok(self.load())
    }

    fn write(&mut self, _: Word, data: Byte) -> rugby_arch::mem::Result<()> {
        self.store(data);
        Ok(())
    }
}

impl Register for Nr52 {
    type Value = Byte;

    fn load(&self) -> Self::Value {
        self.0 | !Self::READABLE
    }

    fn store(&mut self, mut value: Self::Value) {
        value &= Self::WRITABLE;
        self.0 = value;
    }
}

/// Sound panning.
///
/// Each channel can be panned hard left, center, hard right, or ignored
/// entirely.
///
/// Setting a bit to 1 enables the channel to go into the selected output.
///
/// # Note
///
/// Selecting or de-selecting a channel whose [DAC] is enabled will [cause an audio
/// pop][pop].
///
/// See more details [here][nr51].
///
/// [dac]:  https://gbdev.io/pandocs/Audio_details.html#dacs
/// [pop]:  https://gbdev.io/pandocs/Audio_details.html#mixer
/// [nr51]: https://gbdev.io/pandocs/Audio_Registers.html#ff25--nr51-sound-panning
#[bitfield(u8, order = msb)]
pub struct Nr51 {
    /// `NR51[7]`: Channel 4 left.
    #[bits(1)]
    pub ch4_l: bool,
    /// `NR51[6]`: Channel 3 left.
    #[bits(1)]
    pub ch3_l: bool,
    /// `NR51[5]`: Channel 2 left.
    #[bits(1)]
    pub ch2_l: bool,
    /// `NR51[4]`: Channel 1 left.
    #[bits(1)]
    pub ch1_l: bool,
    /// `NR51[3]`: Channel 4 right.
    #[bits(1)]
    pub ch4_r: bool,
    /// `NR51[2]`: Channel 3 right.
    #[bits(1)]
    pub ch3_r: bool,
    /// `NR51[1]`: Channel 2 right.
    #[bits(1)]
    pub ch2_r: bool,
    /// `NR51[0]`: Channel 1 right.
    #[bits(1)]
    pub ch1_r: bool,
}

impl Memory for Nr51 {
    fn read(&self, _: Word) -> rugby_arch::mem::Result<Byte> {
        Ok(self.load())
    }

    fn write(&mut self, _: Word, data: Byte) -> rugby_arch::mem::Result<()> {
        self.store(data);
        Ok(())
    }
}

impl Register for Nr51 {
    type Value = Byte;

    fn load(&self) -> Self::Value {
        self.0
    }

    fn store(&mut self, value: Self::Value) {
        self.0 = value;
    }
}

/// Master volume & VIN panning.
///
/// See more details [here][nr50].
///
/// [nr50]: https://gbdev.io/pandocs/Audio_Registers.html#ff24--nr50-master-volume--vin-panning
#[bitfield(u8, order = msb)]
pub struct Nr50 {
    /// `NR50[7]`: VIN left.
    ///
    /// Work exactly like the bits in [NR51](Nr51). Should be set at 0 if
    /// external sound hardware is not being used.
    #[bits(1)]
    pub vin_l: bool,
    /// `NR50[6:4]`: Left volume.
    ///
    /// Specifies the master volume for the left output.
    ///
    /// # Note
    ///
    /// A value of 0 is treated as a volume of 1 (very quiet), and a value of 7
    /// is treated as a volume of 8 (no volume reduction). Importantly, the
    /// amplifier **never mutes** a non-silent input.
    #[bits(3)]
    pub vol_l: u8,
    /// `NR50[5]`: VIN right.
    ///
    /// Work exactly like the bits in [NR51](Nr51). Should be set at 0 if
    /// external sound hardware is not being used.
    #[bits(1)]
    pub vin_r: bool,
    /// `NR50[2:0]`: Right volume.
    ///
    /// Specifies the master volume for the right output.
    ///
    /// # Note
    ///
    /// A value of 0 is treated as a volume of 1 (very quiet), and a value of 7
    /// is treated as a volume of 8 (no volume reduction). Importantly, the
    /// amplifier **never mutes** a non-silent input.
    #[bits(3)]
    pub vol_r: u8,
}

impl Memory for Nr50 {
    fn read(&self, _: Word) -> rugby_arch::mem::Result<Byte> {
        Ok(self.load())
    }

    fn write(&mut self, _: Word, data: Byte) -> rugby_arch::mem::Result<()> {
        self.store(data);
        Ok(())
    }
}

impl Register for Nr50 {
    type Value = Byte;

    fn load(&self) -> Self::Value {
        self.0
    }

    fn store(&mut self, value: Self::Value) {
        self.0 = value;
    }
}

macro_rules! register {
    ($name:ident, readable: $readable:expr, writable: $writable:expr) => {
        impl $name {
            /// Readable bit mask.
            const READABLE: Byte = $readable;

            /// Writable bit mask.
            const WRITABLE: Byte = $writable;
        }

        impl Memory for $name {
            fn read(&self, _: Word) -> rugby_arch::mem::Result<Byte> {
                Ok(self.load())
            }

            fn write(&mut self, _: Word, data: Byte) -> rugby_arch::mem::Result<()> {
                self.store(data);
                Ok(())
            }
        }

        impl Register for $name {
            type Value = Byte;

            fn load(&self) -> Self::Value {
                self.0 | !Self::READABLE
            }

            fn store(&mut self, mut value: Self::Value) {
                value &= Self::WRITABLE;
                self.0 = value;
            }
        }
    };
}

/// Channel 1 period sweep.
///
/// See more details [here][nr10].
///
/// [nr10]: https://gbdev.io/pandocs/Audio_Registers.html#ff10--nr10-channel-1-sweep
#[bitfield(u8, order = msb)]
pub struct Nr10 {
    /// `NR10[7]`: Padding.
    #[bits(1)]
    __: u8,
    /// `NR10[6:4]`: Sweep pace.
    #[bits(3)]
    pub pace: u8,
    /// `NR10[3]`: Sweep direction.
    #[bits(1)]
    pub sign: bool,
    /// `NR10[2:0]`: Sweep individual step.
    #[bits(3)]
    pub step: u8,
}

register!(Nr10, readable: 0b0111_1111, writable: 0b0111_1111);

/// Channel 1 length timer & duty cycle.
///
/// See more details [here][nr11].
///
/// [nr11]: https://gbdev.io/pandocs/Audio_Registers.html#ff11--nr11-channel-1-length-timer--duty-cycle
#[bitfield(u8, order = msb)]
pub struct Nr11 {
    /// `NR11[7:6]`: Wave duty.
    #[bits(2)]
    pub duty: u8,
    /// `NR11[5:0]`: Initial length timer. (Write-only)
    #[bits(6)]
    pub step: u8,
}

register!(Nr11, readable: 0b1100_0000, writable: 0b1111_1111);

/// Channel 1 volume & envelope.
///
/// See more details [here][nr12].
///
/// [nr12]: https://gbdev.io/pandocs/Audio_Registers.html#ff12--nr12-channel-1-volume--envelope
#[bitfield(u8, order = msb)]
pub struct Nr12 {
    /// `NR12[7:4]`: Initial volume.
    #[bits(4)]
    pub ivol: u8,
    /// `NR12[3]`: Envelope direction.
    #[bits(1)]
    pub sign: bool,
    /// `NR12[2:0]`: Sweep pace.
    #[bits(3)]
    pub pace: u8,
}

register!(Nr12, readable: 0b1111_1111, writable: 0b1111_1111);

/// Channel 1 period low. (Write-only)
///
/// See more details [here][nr13].
///
/// [nr13]: https://gbdev.io/pandocs/Audio_Registers.html#ff13--nr13-channel-1-period-low-write-only
#[bitfield(u8, order = msb)]
pub struct Nr13 {
    /// `NR13[7:0]`: Period low.
    #[bits(8)]
    pub clk_lo: u8,
}

register!(Nr13, readable: 0b0000_0000, writable: 0b1111_1111);

/// Channel 1 period high & control.
///
/// See more details [here][nr14].
///
/// [nr14]: https://gbdev.io/pandocs/Audio_Registers.html#ff14--nr14-channel-1-period-high--control
#[bitfield(u8, order = msb)]
pub struct Nr14 {
    /// `NR14[7]`: Trigger. (Write-only)
    #[bits(1)]
    pub trigger: bool,
    /// `NR14[6]`: Sound length enable.
    #[bits(1)]
    pub length: bool,
    /// `NR14[5:3]`: Padding.
    #[bits(3)]
    __: u8,
    /// `NR14[2:0]`: Period high. (Write-only)
    #[bits(3)]
    pub clk_hi: u8,
}

register!(Nr14, readable: 0b0100_0000, writable: 0b1100_0111);

/// Channel 2 length timer & duty cycle.
///
/// See more details [here][nr21].
///
/// [nr21]: https://gbdev.io/pandocs/Audio_Registers.html#ff16--nr21-channel-2-length-timer--duty-cycle
#[bitfield(u8, order = msb)]
pub struct Nr21 {
    /// `NR21[7:6]`: Wave duty.
    #[bits(2)]
    pub duty: u8,
    /// `NR21[5:0]`: Initial length timer. (Write-only)
    #[bits(6)]
    pub step: u8,
}

register!(Nr21, readable: 0b1100_0000, writable: 0b1111_1111);

/// Channel 2 volume & envelope.
///
/// See more details [here][nr22].
///
/// [nr22]: https://gbdev.io/pandocs/Audio_Registers.html#ff17--nr22-channel-2-volume--envelope
#[bitfield(u8, order = msb)]
pub struct Nr22 {
    /// `NR22[7:4]`: Initial volume.
    #[bits(4)]
    pub ivol: u8,
    /// `NR22[3]`: Envelope direction.
    #[bits(1)]
    pub sign: bool,
    /// `NR22[2:0]`: Sweep pace.
    #[bits(3)]
    pub pace: u8,
}

register!(Nr22, readable: 0b1111_1111, writable: 0b1111_1111);

/// Channel 2 period low. (Write-only)
///
/// See more details [here][nr23].
///
/// [nr23]: https://gbdev.io/pandocs/Audio_Registers.html#ff18--nr23-channel-2-period-low-write-only
#[bitfield(u8, order = msb)]
pub struct Nr23 {
    /// `NR23[7:0]`: Period low.
    #[bits(8)]
    pub clk_lo: u8,
}

register!(Nr23, readable: 0b0000_0000, writable: 0b1111_1111);

/// Channel 2 period high & control.
///
/// See more details [here][nr24].
///
/// [nr24]: https://gbdev.io/pandocs/Audio_Registers.html#ff19--nr24-channel-2-period-high--control
#[bitfield(u8, order = msb)]
pub struct Nr24 {
    /// `NR24[7]`: Trigger. (Write-only)
    #[bits(1)]
    pub trigger: bool,
    /// `NR24[6]`: Sound length enable.
    #[bits(1)]
    pub length: bool,
    /// `NR24[5:3]`: Padding.
    #[bits(3)]
    __: u8,
    /// `NR24[2:0]`: Period high. (Write-only)
    #[bits(3)]
    pub clk_hi: u8,
}

register!(Nr24, readable: 0b0100_0000, writable: 0b1100_0111);

/// Channel 3 DAC enable.
///
/// See more details [here][nr30].
///
/// [nr30]: https://gbdev.io/pandocs/Audio_Registers.html#ff1a--nr30-channel-3-dac-enable
#[bitfield(u8, order = msb)]
pub struct Nr30 {
    /// `NR30[7]`: DAC enable.
    #[bits(1)]
    pub dac: bool,
    /// `NR30[6:0]`: Padding.
    #[bits(7)]
    __: u8,
}

register!(Nr30, readable: 0b1000_0000, writable: 0b1000_0000);

/// Channel 3 length timer. (Write-only)
///
/// See more details [here][nr31].
///
/// [nr31]: https://gbdev.io/pandocs/Audio_Registers.html#ff1b--nr31-channel-3-length-timer-write-only
#[bitfield(u8, order = msb)]
pub struct Nr31 {
    /// `NR31[7:0]`: Initial length timer.
    #[bits(8)]
    pub step: u8,
}

register!(Nr31, readable: 0b0000_0000, writable: 0b1111_1111);

/// Channel 3 output level.
///
/// See more details [here][nr32].
///
/// [nr32]: https://gbdev.io/pandocs/Audio_Registers.html#ff1c--nr32-channel-3-output-level
#[bitfield(u8, order = msb)]
pub struct Nr32 {
    /// `NR32[7]`: Padding.
    #[bits(1)]
    __: u8,
    /// `NR32[6:5]`: Output level.
    #[bits(2)]
    pub vol: u8,
    /// `NR32[4:0]`: Padding.
    #[bits(5)]
    __: u8,
}

register!(Nr32, readable: 0b0110_0000, writable: 0b0110_0000);

/// Channel 3 period low. (Write-only)
///
/// See more details [here][nr33].
///
/// [nr33]: https://gbdev.io/pandocs/Audio_Registers.html#ff1d--nr33-channel-3-period-low-write-only
#[bitfield(u8, order = msb)]
pub struct Nr33 {
    /// `NR33[7:0]`: Period low.
    #[bits(8)]
    pub clk_lo: u8,
}

register!(Nr33, readable: 0b0000_0000, writable: 0b1111_1111);

/// Channel 3 period high & control.
///
/// See more details [here][nr34].
///
/// [nr34]: https://gbdev.io/pandocs/Audio_Registers.html#ff1e--nr34-channel-3-period-high--control
#[bitfield(u8, order = msb)]
pub struct Nr34 {
    /// `NR34[7]`: Trigger. (Write-only)
    #[bits(1)]
    pub trigger: bool,
    /// `NR34[6]`: Sound length enable.
    #[bits(1)]
    pub length: bool,
    /// `NR34[5:3]`: Padding.
    #[bits(3)]
    __: u8,
    /// `NR34[2:0]`: Period high. (Write-only)
    #[bits(3)]
    pub clk_hi: u8,
}

register!(Nr34, readable: 0b0100_0000, writable: 0b1100_0111);

/// Channel 4 length timer. (Write-only)
///
/// See more details [here][nr41].
///
/// [nr41]: https://gbdev.io/pandocs/Audio_Registers.html#ff20--nr41-channel-4-length-timer-write-only
#[bitfield(u8, order = msb)]
pub struct Nr41 {
    /// `NR41[7:6]`: Padding.
    #[bits(2)]
    __: u8,
    /// `NR41[5:0]`: Initial length timer.
    #[bits(6)]
    pub step: u8,
}

register!(Nr41, readable: 0b0000_0000, writable: 0b0011_1111);

/// Channel 4 volume & envelope.
///
/// See more details [here][nr42].
///
/// [nr42]: https://gbdev.io/pandocs/Audio_Registers.html#ff21--nr42-channel-4-volume--envelope
#[bitfield(u8, order = msb)]
pub struct Nr42 {
    /// `NR42[7:4]`: Initial volume.
    #[bits(4)]
    pub ivol: u8,
    /// `NR42[3]`: Envelope direction.
    #[bits(1)]
    pub sign: bool,
    /// `NR42[2:0]`: Sweep pace.
    #[bits(3)]
    pub pace: u8,
}

register!(Nr42, readable: 0b1111_1111, writable: 0b1111_1111);

/// Channel 4 frequency & randomness.
///
/// See more details [here][nr43].
///
/// [nr43]: https://gbdev.io/pandocs/Audio_Registers.html#ff22--nr43-channel-4-frequency--randomness
#[bitfield(u8, order = msb)]
pub struct Nr43 {
    /// `NR43[7:4]`: Clock shift.
    #[bits(4)]
    pub shift: u8,
    /// `NR43[3]`: LFSR width.
    #[bits(1)]
    pub width: bool,
    /// `NR43[2:0]`: Clock divider.
    #[bits(3)]
    pub divide: u8,
}

register!(Nr43, readable: 0b1111_1111, writable: 0b1111_1111);

/// Channel 4 control.
///
/// See more details [here][nr44].
///
/// [nr44]: https://gbdev.io/pandocs/Audio_Registers.html#ff23--nr44-channel-4-control
#[bitfield(u8, order = msb)]
pub struct Nr44 {
    /// `NR44[7]`: Trigger. (Write-only)
    #[bits(1)]
    pub trigger: bool,
    /// `NR44[6]`: Sound length enable.
    #[bits(1)]
    pub length: bool,
    /// `NR44[5:0]`: Padding.
    #[bits(6)]
    __: u8,
}

register!(Nr44, readable: 0b0100_0000, writable: 0b1100_0000);
