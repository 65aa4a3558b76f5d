//! Opcode decode tables.
//!
//! Maps each of the 256 unprefixed opcodes, and each of the 256 CB-prefixed
//! opcodes, to the [`Instruction`](super::Instruction) that implements it.

use super::{exec, Instruction};

#[rustfmt::skip]
pub(super) static DECODE: [Instruction; 0x100] = [
    Instruction { code: 0x00, repr: "NOP", oper: exec::nop::default() },
    Instruction { code: 0x01, repr: "LD BC, d16", oper: exec::ldw::default() },
    Instruction { code: 0x02, repr: "LD (BC), A", oper: exec::ld::default() },
    Instruction { code: 0x03, repr: "INC BC", oper: exec::incw::default() },
    Instruction { code: 0x04, repr: "INC B", oper: exec::inc::default() },
    Instruction { code: 0x05, repr: "DEC B", oper: exec::dec::default() },
    Instruction { code: 0x06, repr: "LD B, d8", oper: exec::ld::default() },
    Instruction { code: 0x07, repr: "RLCA", oper: exec::rlca::default() },
    Instruction { code: 0x08, repr: "LD (a16), SP", oper: exec::ldw::default() },
    Instruction { code: 0x09, repr: "ADD HL, BC", oper: exec::addw::default() },
    Instruction { code: 0x0a, repr: "LD A, (BC)", oper: exec::ld::default() },
    Instruction { code: 0x0b, repr: "DEC BC", oper: exec::decw::default() },
    Instruction { code: 0x0c, repr: "INC C", oper: exec::inc::default() },
    Instruction { code: 0x0d, repr: "DEC C", oper: exec::dec::default() },
    Instruction { code: 0x0e, repr: "LD C, d8", oper: exec::ld::default() },
    Instruction { code: 0x0f, repr: "RRCA", oper: exec::rrca::default() },
    Instruction { code: 0x10, repr: "STOP", oper: exec::stop::default() },
    Instruction { code: 0x11, repr: "LD DE, d16", oper: exec::ldw::default() },
    Instruction { code: 0x12, repr: "LD (DE), A", oper: exec::ld::default() },
    Instruction { code: 0x13, repr: "INC DE", oper: exec::incw::default() },
    Instruction { code: 0x14, repr: "INC D", oper: exec::inc::default() },
    Instruction { code: 0x15, repr: "DEC D", oper: exec::dec::default() },
    Instruction { code: 0x16, repr: "LD D, d8", oper: exec::ld::default() },
    Instruction { code: 0x17, repr: "RLA", oper: exec::rla::default() },
    Instruction { code: 0x18, repr: "JR r8", oper: exec::jr::default() },
    Instruction { code: 0x19, repr: "ADD HL, DE", oper: exec::addw::default() },
    Instruction { code: 0x1a, repr: "LD A, (DE)", oper: exec::ld::default() },
    Instruction { code: 0x1b, repr: "DEC DE", oper: exec::decw::default() },
    Instruction { code: 0x1c, repr: "INC E", oper: exec::inc::default() },
    Instruction { code: 0x1d, repr: "DEC E", oper: exec::dec::default() },
    Instruction { code: 0x1e, repr: "LD E, d8", oper: exec::ld::default() },
    Instruction { code: 0x1f, repr: "RRA", oper: exec::rra::default() },
    Instruction { code: 0x20, repr: "JR NZ, r8", oper: exec::jr::default() },
    Instruction { code: 0x21, repr: "LD HL, d16", oper: exec::ldw::default() },
    Instruction { code: 0x22, repr: "LD (HL+), A", oper: exec::ld::default() },
    Instruction { code: 0x23, repr: "INC HL", oper: exec::incw::default() },
    Instruction { code: 0x24, repr: "INC H", oper: exec::inc::default() },
    Instruction { code: 0x25, repr: "DEC H", oper: exec::dec::default() },
    Instruction { code: 0x26, repr: "LD H, d8", oper: exec::ld::default() },
    Instruction { code: 0x27, repr: "DAA", oper: exec::daa::default() },
    Instruction { code: 0x28, repr: "JR Z, r8", oper: exec::jr::default() },
    Instruction { code: 0x29, repr: "ADD HL, HL", oper: exec::addw::default() },
    Instruction { code: 0x2a, repr: "LD A, (HL+)", oper: exec::ld::default() },
    Instruction { code: 0x2b, repr: "DEC HL", oper: exec::decw::default() },
    Instruction { code: 0x2c, repr: "INC L", oper: exec::inc::default() },
    Instruction { code: 0x2d, repr: "DEC L", oper: exec::dec::default() },
    Instruction { code: 0x2e, repr: "LD L, d8", oper: exec::ld::default() },
    Instruction { code: 0x2f, repr: "CPL", oper: exec::cpl::default() },
    Instruction { code: 0x30, repr: "JR NC, r8", oper: exec::jr::default() },
    Instruction { code: 0x31, repr: "LD SP, d16", oper: exec::ldw::default() },
    Instruction { code: 0x32, repr: "LD (HL-), A", oper: exec::ld::default() },
    Instruction { code: 0x33, repr: "INC SP", oper: exec::incw::default() },
    Instruction { code: 0x34, repr: "INC (HL)", oper: exec::inc::default() },
    Instruction { code: 0x35, repr: "DEC (HL)", oper: exec::dec::default() },
    Instruction { code: 0x36, repr: "LD (HL), d8", oper: exec::ld::default() },
    Instruction { code: 0x37, repr: "SCF", oper: exec::scf::default() },
    Instruction { code: 0x38, repr: "JR C, r8", oper: exec::jr::default() },
    Instruction { code: 0x39, repr: "ADD HL, SP", oper: exec::addw::default() },
    Instruction { code: 0x3a, repr: "LD A, (HL-)", oper: exec::ld::default() },
    Instruction { code: 0x3b, repr: "DEC SP", oper: exec::decw::default() },
    Instruction { code: 0x3c, repr: "INC A", oper: exec::inc::default() },
    Instruction { code: 0x3d, repr: "DEC A", oper: exec::dec::default() },
    Instruction { code: 0x3e, repr: "LD A, d8", oper: exec::ld::default() },
    Instruction { code: 0x3f, repr: "CCF", oper: exec::ccf::default() },
    Instruction { code: 0x40, repr: "LD B, B", oper: exec::ld::default() },
    Instruction { code: 0x41, repr: "LD B, C", oper: exec::ld::default() },
    Instruction { code: 0x42, repr: "LD B, D", oper: exec::ld::default() },
    Instruction { code: 0x43, repr: "LD B, E", oper: exec::ld::default() },
    Instruction { code: 0x44, repr: "LD B, H", oper: exec::ld::default() },
    Instruction { code: 0x45, repr: "LD B, L", oper: exec::ld::default() },
    Instruction { code: 0x46, repr: "LD B, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x47, repr: "LD B, A", oper: exec::ld::default() },
    Instruction { code: 0x48, repr: "LD C, B", oper: exec::ld::default() },
    Instruction { code: 0x49, repr: "LD C, C", oper: exec::ld::default() },
    Instruction { code: 0x4a, repr: "LD C, D", oper: exec::ld::default() },
    Instruction { code: 0x4b, repr: "LD C, E", oper: exec::ld::default() },
    Instruction { code: 0x4c, repr: "LD C, H", oper: exec::ld::default() },
    Instruction { code: 0x4d, repr: "LD C, L", oper: exec::ld::default() },
    Instruction { code: 0x4e, repr: "LD C, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x4f, repr: "LD C, A", oper: exec::ld::default() },
    Instruction { code: 0x50, repr: "LD D, B", oper: exec::ld::default() },
    Instruction { code: 0x51, repr: "LD D, C", oper: exec::ld::default() },
    Instruction { code: 0x52, repr: "LD D, D", oper: exec::ld::default() },
    Instruction { code: 0x53, repr: "LD D, E", oper: exec::ld::default() },
    Instruction { code: 0x54, repr: "LD D, H", oper: exec::ld::default() },
    Instruction { code: 0x55, repr: "LD D, L", oper: exec::ld::default() },
    Instruction { code: 0x56, repr: "LD D, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x57, repr: "LD D, A", oper: exec::ld::default() },
    Instruction { code: 0x58, repr: "LD E, B", oper: exec::ld::default() },
    Instruction { code: 0x59, repr: "LD E, C", oper: exec::ld::default() },
    Instruction { code: 0x5a, repr: "LD E, D", oper: exec::ld::default() },
    Instruction { code: 0x5b, repr: "LD E, E", oper: exec::ld::default() },
    Instruction { code: 0x5c, repr: "LD E, H", oper: exec::ld::default() },
    Instruction { code: 0x5d, repr: "LD E, L", oper: exec::ld::default() },
    Instruction { code: 0x5e, repr: "LD E, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x5f, repr: "LD E, A", oper: exec::ld::default() },
    Instruction { code: 0x60, repr: "LD H, B", oper: exec::ld::default() },
    Instruction { code: 0x61, repr: "LD H, C", oper: exec::ld::default() },
    Instruction { code: 0x62, repr: "LD H, D", oper: exec::ld::default() },
    Instruction { code: 0x63, repr: "LD H, E", oper: exec::ld::default() },
    Instruction { code: 0x64, repr: "LD H, H", oper: exec::ld::default() },
    Instruction { code: 0x65, repr: "LD H, L", oper: exec::ld::default() },
    Instruction { code: 0x66, repr: "LD H, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x67, repr: "LD H, A", oper: exec::ld::default() },
    Instruction { code: 0x68, repr: "LD L, B", oper: exec::ld::default() },
    Instruction { code: 0x69, repr: "LD L, C", oper: exec::ld::default() },
    Instruction { code: 0x6a, repr: "LD L, D", oper: exec::ld::default() },
    Instruction { code: 0x6b, repr: "LD L, E", oper: exec::ld::default() },
    Instruction { code: 0x6c, repr: "LD L, H", oper: exec::ld::default() },
    Instruction { code: 0x6d, repr: "LD L, L", oper: exec::ld::default() },
    Instruction { code: 0x6e, repr: "LD L, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x6f, repr: "LD L, A", oper: exec::ld::default() },
    Instruction { code: 0x70, repr: "LD (HL), B", oper: exec::ld::default() },
    Instruction { code: 0x71, repr: "LD (HL), C", oper: exec::ld::default() },
    Instruction { code: 0x72, repr: "LD (HL), D", oper: exec::ld::default() },
    Instruction { code: 0x73, repr: "LD (HL), E", oper: exec::ld::default() },
    Instruction { code: 0x74, repr: "LD (HL), H", oper: exec::ld::default() },
    Instruction { code: 0x75, repr: "LD (HL), L", oper: exec::ld::default() },
    Instruction { code: 0x76, repr: "HALT", oper: exec::halt::default() },
    Instruction { code: 0x77, repr: "LD (HL), A", oper: exec::ld::default() },
    Instruction { code: 0x78, repr: "LD A, B", oper: exec::ld::default() },
    Instruction { code: 0x79, repr: "LD A, C", oper: exec::ld::default() },
    Instruction { code: 0x7a, repr: "LD A, D", oper: exec::ld::default() },
    Instruction { code: 0x7b, repr: "LD A, E", oper: exec::ld::default() },
    Instruction { code: 0x7c, repr: "LD A, H", oper: exec::ld::default() },
    Instruction { code: 0x7d, repr: "LD A, L", oper: exec::ld::default() },
    Instruction { code: 0x7e, repr: "LD A, (HL)", oper: exec::ld::default() },
    Instruction { code: 0x7f, repr: "LD A, A", oper: exec::ld::default() },
    Instruction { code: 0x80, repr: "ADD A, B", oper: exec::add::default() },
    Instruction { code: 0x81, repr: "ADD A, C", oper: exec::add::default() },
    Instruction { code: 0x82, repr: "ADD A, D", oper: exec::add::default() },
    Instruction { code: 0x83, repr: "ADD A, E", oper: exec::add::default() },
    Instruction { code: 0x84, repr: "ADD A, H", oper: exec::add::default() },
    Instruction { code: 0x85, repr: "ADD A, L", oper: exec::add::default() },
    Instruction { code: 0x86, repr: "ADD A, (HL)", oper: exec::add::default() },
    Instruction { code: 0x87, repr: "ADD A, A", oper: exec::add::default() },
    Instruction { code: 0x88, repr: "ADC A, B", oper: exec::adc::default() },
    Instruction { code: 0x89, repr: "ADC A, C", oper: exec::adc::default() },
    Instruction { code: 0x8a, repr: "ADC A, D", oper: exec::adc::default() },
    Instruction { code: 0x8b, repr: "ADC A, E", oper: exec::adc::default() },
    Instruction { code: 0x8c, repr: "ADC A, H", oper: exec::adc::default() },
    Instruction { code: 0x8d, repr: "ADC A, L", oper: exec::adc::default() },
    Instruction { code: 0x8e, repr: "ADC A, (HL)", oper: exec::adc::default() },
    Instruction { code: 0x8f, repr: "ADC A, A", oper: exec::adc::default() },
    Instruction { code: 0x90, repr: "SUB A, B", oper: exec::sub::default() },
    Instruction { code: 0x91, repr: "SUB A, C", oper: exec::sub::default() },
    Instruction { code: 0x92, repr: "SUB A, D", oper: exec::sub::default() },
    Instruction { code: 0x93, repr: "SUB A, E", oper: exec::sub::default() },
    Instruction { code: 0x94, repr: "SUB A, H", oper: exec::sub::default() },
    Instruction { code: 0x95, repr: "SUB A, L", oper: exec::sub::default() },
    Instruction { code: 0x96, repr: "SUB A, (HL)", oper: exec::sub::default() },
    Instruction { code: 0x97, repr: "SUB A, A", oper: exec::sub::default() },
    Instruction { code: 0x98, repr: "SBC A, B", oper: exec::sbc::default() },
    Instruction { code: 0x99, repr: "SBC A, C", oper: exec::sbc::default() },
    Instruction { code: 0x9a, repr: "SBC A, D", oper: exec::sbc::default() },
    Instruction { code: 0x9b, repr: "SBC A, E", oper: exec::sbc::default() },
    Instruction { code: 0x9c, repr: "SBC A, H", oper: exec::sbc::default() },
    Instruction { code: 0x9d, repr: "SBC A, L", oper: exec::sbc::default() },
    Instruction { code: 0x9e, repr: "SBC A, (HL)", oper: exec::sbc::default() },
    Instruction { code: 0x9f, repr: "SBC A, A", oper: exec::sbc::default() },
    Instruction { code: 0xa0, repr: "AND B", oper: exec::and::default() },
    Instruction { code: 0xa1, repr: "AND C", oper: exec::and::default() },
    Instruction { code: 0xa2, repr: "AND D", oper: exec::and::default() },
    Instruction { code: 0xa3, repr: "AND E", oper: exec::and::default() },
    Instruction { code: 0xa4, repr: "AND H", oper: exec::and::default() },
    Instruction { code: 0xa5, repr: "AND L", oper: exec::and::default() },
    Instruction { code: 0xa6, repr: "AND (HL)", oper: exec::and::default() },
    Instruction { code: 0xa7, repr: "AND A", oper: exec::and::default() },
    Instruction { code: 0xa8, repr: "XOR B", oper: exec::xor::default() },
    Instruction { code: 0xa9, repr: "XOR C", oper: exec::xor::default() },
    Instruction { code: 0xaa, repr: "XOR D", oper: exec::xor::default() },
    Instruction { code: 0xab, repr: "XOR E", oper: exec::xor::default() },
    Instruction { code: 0xac, repr: "XOR H", oper: exec::xor::default() },
    Instruction { code: 0xad, repr: "XOR L", oper: exec::xor::default() },
    Instruction { code: 0xae, repr: "XOR (HL)", oper: exec::xor::default() },
    Instruction { code: 0xaf, repr: "XOR A", oper: exec::xor::default() },
    Instruction { code: 0xb0, repr: "OR B", oper: exec::or::default() },
    Instruction { code: 0xb1, repr: "OR C", oper: exec::or::default() },
    Instruction { code: 0xb2, repr: "OR D", oper: exec::or::default() },
    Instruction { code: 0xb3, repr: "OR E", oper: exec::or::default() },
    Instruction { code: 0xb4, repr: "OR H", oper: exec::or::default() },
    Instruction { code: 0xb5, repr: "OR L", oper: exec::or::default() },
    Instruction { code: 0xb6, repr: "OR (HL)", oper: exec::or::default() },
    Instruction { code: 0xb7, repr: "OR A", oper: exec::or::default() },
    Instruction { code: 0xb8, repr: "CP B", oper: exec::cp::default() },
    Instruction { code: 0xb9, repr: "CP C", oper: exec::cp::default() },
    Instruction { code: 0xba, repr: "CP D", oper: exec::cp::default() },
    Instruction { code: 0xbb, repr: "CP E", oper: exec::cp::default() },
    Instruction { code: 0xbc, repr: "CP H", oper: exec::cp::default() },
    Instruction { code: 0xbd, repr: "CP L", oper: exec::cp::default() },
    Instruction { code: 0xbe, repr: "CP (HL)", oper: exec::cp::default() },
    Instruction { code: 0xbf, repr: "CP A", oper: exec::cp::default() },
    Instruction { code: 0xc0, repr: "RET NZ", oper: exec::ret::default() },
    Instruction { code: 0xc1, repr: "POP BC", oper: exec::pop::default() },
    Instruction { code: 0xc2, repr: "JP NZ, a16", oper: exec::jp::default() },
    Instruction { code: 0xc3, repr: "JP a16", oper: exec::jp::default() },
    Instruction { code: 0xc4, repr: "CALL NZ, a16", oper: exec::call::default() },
    Instruction { code: 0xc5, repr: "PUSH BC", oper: exec::push::default() },
    Instruction { code: 0xc6, repr: "ADD A, d8", oper: exec::add::default() },
    Instruction { code: 0xc7, repr: "RST 00H", oper: exec::rst::default() },
    Instruction { code: 0xc8, repr: "RET Z", oper: exec::ret::default() },
    Instruction { code: 0xc9, repr: "RET", oper: exec::ret::default() },
    Instruction { code: 0xca, repr: "JP Z, a16", oper: exec::jp::default() },
    Instruction { code: 0xcb, repr: "PREFIX", oper: exec::prefix::default() },
    Instruction { code: 0xcc, repr: "CALL Z, a16", oper: exec::call::default() },
    Instruction { code: 0xcd, repr: "CALL a16", oper: exec::call::default() },
    Instruction { code: 0xce, repr: "ADC A, d8", oper: exec::adc::default() },
    Instruction { code: 0xcf, repr: "RST 08H", oper: exec::rst::default() },
    Instruction { code: 0xd0, repr: "RET NC", oper: exec::ret::default() },
    Instruction { code: 0xd1, repr: "POP DE", oper: exec::pop::default() },
    Instruction { code: 0xd2, repr: "JP NC, a16", oper: exec::jp::default() },
    Instruction { code: 0xd3, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xd4, repr: "CALL NC, a16", oper: exec::call::default() },
    Instruction { code: 0xd5, repr: "PUSH DE", oper: exec::push::default() },
    Instruction { code: 0xd6, repr: "SUB A, d8", oper: exec::sub::default() },
    Instruction { code: 0xd7, repr: "RST 10H", oper: exec::rst::default() },
    Instruction { code: 0xd8, repr: "RET C", oper: exec::ret::default() },
    Instruction { code: 0xd9, repr: "RETI", oper: exec::reti::default() },
    Instruction { code: 0xda, repr: "JP C, a16", oper: exec::jp::default() },
    Instruction { code: 0xdb, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xdc, repr: "CALL C, a16", oper: exec::call::default() },
    Instruction { code: 0xdd, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xde, repr: "SBC A, d8", oper: exec::sbc::default() },
    Instruction { code: 0xdf, repr: "RST 18H", oper: exec::rst::default() },
    Instruction { code: 0xe0, repr: "LDH (a8), A", oper: exec::ldh::default() },
    Instruction { code: 0xe1, repr: "POP HL", oper: exec::pop::default() },
    Instruction { code: 0xe2, repr: "LDH (C), A", oper: exec::ldh::default() },
    Instruction { code: 0xe3, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xe4, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xe5, repr: "PUSH HL", oper: exec::push::default() },
    Instruction { code: 0xe6, repr: "AND d8", oper: exec::and::default() },
    Instruction { code: 0xe7, repr: "RST 20H", oper: exec::rst::default() },
    Instruction { code: 0xe8, repr: "ADD SP, r8", oper: exec::addw::default() },
    Instruction { code: 0xe9, repr: "JP HL", oper: exec::jp::default() },
    Instruction { code: 0xea, repr: "LD (a16), A", oper: exec::ld::default() },
    Instruction { code: 0xeb, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xec, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xed, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xee, repr: "XOR d8", oper: exec::xor::default() },
    Instruction { code: 0xef, repr: "RST 28H", oper: exec::rst::default() },
    Instruction { code: 0xf0, repr: "LDH A, (a8)", oper: exec::ldh::default() },
    Instruction { code: 0xf1, repr: "POP AF", oper: exec::pop::default() },
    Instruction { code: 0xf2, repr: "LD A, (C)", oper: exec::ldh::default() },
    Instruction { code: 0xf3, repr: "DI", oper: exec::di::default() },
    Instruction { code: 0xf4, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xf5, repr: "PUSH AF", oper: exec::push::default() },
    Instruction { code: 0xf6, repr: "OR d8", oper: exec::or::default() },
    Instruction { code: 0xf7, repr: "RST 30H", oper: exec::rst::default() },
    Instruction { code: 0xf8, repr: "LD HL, SP + r8", oper: exec::ldw::default() },
    Instruction { code: 0xf9, repr: "LD SP, HL", oper: exec::ldw::default() },
    Instruction { code: 0xfa, repr: "LD A, (a16)", oper: exec::ld::default() },
    Instruction { code: 0xfb, repr: "EI", oper: exec::ei::default() },
    Instruction { code: 0xfc, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xfd, repr: "UNUSED", oper: exec::unused::default() },
    Instruction { code: 0xfe, repr: "CP d8", oper: exec::cp::default() },
    Instruction { code: 0xff, repr: "RST 38H", oper: exec::rst::default() },
];

#[rustfmt::skip]
pub(super) static PREFIX: [Instruction; 0x100] = [
    Instruction { code: 0x00, repr: "RLC B", oper: exec::rlc::default() },
    Instruction { code: 0x01, repr: "RLC C", oper: exec::rlc::default() },
    Instruction { code: 0x02, repr: "RLC D", oper: exec::rlc::default() },
    Instruction { code: 0x03, repr: "RLC E", oper: exec::rlc::default() },
    Instruction { code: 0x04, repr: "RLC H", oper: exec::rlc::default() },
    Instruction { code: 0x05, repr: "RLC L", oper: exec::rlc::default() },
    Instruction { code: 0x06, repr: "RLC (HL)", oper: exec::rlc::default() },
    Instruction { code: 0x07, repr: "RLC A", oper: exec::rlc::default() },
    Instruction { code: 0x08, repr: "RRC B", oper: exec::rrc::default() },
    Instruction { code: 0x09, repr: "RRC C", oper: exec::rrc::default() },
    Instruction { code: 0x0a, repr: "RRC D", oper: exec::rrc::default() },
    Instruction { code: 0x0b, repr: "RRC E", oper: exec::rrc::default() },
    Instruction { code: 0x0c, repr: "RRC H", oper: exec::rrc::default() },
    Instruction { code: 0x0d, repr: "RRC L", oper: exec::rrc::default() },
    Instruction { code: 0x0e, repr: "RRC (HL)", oper: exec::rrc::default() },
    Instruction { code: 0x0f, repr: "RRC A", oper: exec::rrc::default() },
    Instruction { code: 0x10, repr: "RL B", oper: exec::rl::default() },
    Instruction { code: 0x11, repr: "RL C", oper: exec::rl::default() },
    Instruction { code: 0x12, repr: "RL D", oper: exec::rl::default() },
    Instruction { code: 0x13, repr: "RL E", oper: exec::rl::default() },
    Instruction { code: 0x14, repr: "RL H", oper: exec::rl::default() },
    Instruction { code: 0x15, repr: "RL L", oper: exec::rl::default() },
    Instruction { code: 0x16, repr: "RL (HL)", oper: exec::rl::default() },
    Instruction { code: 0x17, repr: "RL A", oper: exec::rl::default() },
    Instruction { code: 0x18, repr: "RR B", oper: exec::rr::default() },
    Instruction { code: 0x19, repr: "RR C", oper: exec::rr::default() },
    Instruction { code: 0x1a, repr: "RR D", oper: exec::rr::default() },
    Instruction { code: 0x1b, repr: "RR E", oper: exec::rr::default() },
    Instruction { code: 0x1c, repr: "RR H", oper: exec::rr::default() },
    Instruction { code: 0x1d, repr: "RR L", oper: exec::rr::default() },
    Instruction { code: 0x1e, repr: "RR (HL)", oper: exec::rr::default() },
    Instruction { code: 0x1f, repr: "RR A", oper: exec::rr::default() },
    Instruction { code: 0x20, repr: "SLA B", oper: exec::sla::default() },
    Instruction { code: 0x21, repr: "SLA C", oper: exec::sla::default() },
    Instruction { code: 0x22, repr: "SLA D", oper: exec::sla::default() },
    Instruction { code: 0x23, repr: "SLA E", oper: exec::sla::default() },
    Instruction { code: 0x24, repr: "SLA H", oper: exec::sla::default() },
    Instruction { code: 0x25, repr: "SLA L", oper: exec::sla::default() },
    Instruction { code: 0x26, repr: "SLA (HL)", oper: exec::sla::default() },
    Instruction { code: 0x27, repr: "SLA A", oper: exec::sla::default() },
    Instruction { code: 0x28, repr: "SRA B", oper: exec::sra::default() },
    Instruction { code: 0x29, repr: "SRA C", oper: exec::sra::default() },
    Instruction { code: 0x2a, repr: "SRA D", oper: exec::sra::default() },
    Instruction { code: 0x2b, repr: "SRA E", oper: exec::sra::default() },
    Instruction { code: 0x2c, repr: "SRA H", oper: exec::sra::default() },
    Instruction { code: 0x2d, repr: "SRA L", oper: exec::sra::default() },
    Instruction { code: 0x2e, repr: "SRA (HL)", oper: exec::sra::default() },
    Instruction { code: 0x2f, repr: "SRA A", oper: exec::sra::default() },
    Instruction { code: 0x30, repr: "SWAP B", oper: exec::swap::default() },
    Instruction { code: 0x31, repr: "SWAP C", oper: exec::swap::default() },
    Instruction { code: 0x32, repr: "SWAP D", oper: exec::swap::default() },
    Instruction { code: 0x33, repr: "SWAP E", oper: exec::swap::default() },
    Instruction { code: 0x34, repr: "SWAP H", oper: exec::swap::default() },
    Instruction { code: 0x35, repr: "SWAP L", oper: exec::swap::default() },
    Instruction { code: 0x36, repr: "SWAP (HL)", oper: exec::swap::default() },
    Instruction { code: 0x37, repr: "SWAP A", oper: exec::swap::default() },
    Instruction { code: 0x38, repr: "SRL B", oper: exec::srl::default() },
    Instruction { code: 0x39, repr: "SRL C", oper: exec::srl::default() },
    Instruction { code: 0x3a, repr: "SRL D", oper: exec::srl::default() },
    Instruction { code: 0x3b, repr: "SRL E", oper: exec::srl::default() },
    Instruction { code: 0x3c, repr: "SRL H", oper: exec::srl::default() },
    Instruction { code: 0x3d, repr: "SRL L", oper: exec::srl::default() },
    Instruction { code: 0x3e, repr: "SRL (HL)", oper: exec::srl::default() },
    Instruction { code: 0x3f, repr: "SRL A", oper: exec::srl::default() },
    Instruction { code: 0x40, repr: "BIT 0, B", oper: exec::bit::default() },
    Instruction { code: 0x41, repr: "BIT 0, C", oper: exec::bit::default() },
    Instruction { code: 0x42, repr: "BIT 0, D", oper: exec::bit::default() },
    Instruction { code: 0x43, repr: "BIT 0, E", oper: exec::bit::default() },
    Instruction { code: 0x44, repr: "BIT 0, H", oper: exec::bit::default() },
    Instruction { code: 0x45, repr: "BIT 0, L", oper: exec::bit::default() },
    Instruction { code: 0x46, repr: "BIT 0, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x47, repr: "BIT 0, A", oper: exec::bit::default() },
    Instruction { code: 0x48, repr: "BIT 1, B", oper: exec::bit::default() },
    Instruction { code: 0x49, repr: "BIT 1, C", oper: exec::bit::default() },
    Instruction { code: 0x4a, repr: "BIT 1, D", oper: exec::bit::default() },
    Instruction { code: 0x4b, repr: "BIT 1, E", oper: exec::bit::default() },
    Instruction { code: 0x4c, repr: "BIT 1, H", oper: exec::bit::default() },
    Instruction { code: 0x4d, repr: "BIT 1, L", oper: exec::bit::default() },
    Instruction { code: 0x4e, repr: "BIT 1, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x4f, repr: "BIT 1, A", oper: exec::bit::default() },
    Instruction { code: 0x50, repr: "BIT 2, B", oper: exec::bit::default() },
    Instruction { code: 0x51, repr: "BIT 2, C", oper: exec::bit::default() },
    Instruction { code: 0x52, repr: "BIT 2, D", oper: exec::bit::default() },
    Instruction { code: 0x53, repr: "BIT 2, E", oper: exec::bit::default() },
    Instruction { code: 0x54, repr: "BIT 2, H", oper: exec::bit::default() },
    Instruction { code: 0x55, repr: "BIT 2, L", oper: exec::bit::default() },
    Instruction { code: 0x56, repr: "BIT 2, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x57, repr: "BIT 2, A", oper: exec::bit::default() },
    Instruction { code: 0x58, repr: "BIT 3, B", oper: exec::bit::default() },
    Instruction { code: 0x59, repr: "BIT 3, C", oper: exec::bit::default() },
    Instruction { code: 0x5a, repr: "BIT 3, D", oper: exec::bit::default() },
    Instruction { code: 0x5b, repr: "BIT 3, E", oper: exec::bit::default() },
    Instruction { code: 0x5c, repr: "BIT 3, H", oper: exec::bit::default() },
    Instruction { code: 0x5d, repr: "BIT 3, L", oper: exec::bit::default() },
    Instruction { code: 0x5e, repr: "BIT 3, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x5f, repr: "BIT 3, A", oper: exec::bit::default() },
    Instruction { code: 0x60, repr: "BIT 4, B", oper: exec::bit::default() },
    Instruction { code: 0x61, repr: "BIT 4, C", oper: exec::bit::default() },
    Instruction { code: 0x62, repr: "BIT 4, D", oper: exec::bit::default() },
    Instruction { code: 0x63, repr: "BIT 4, E", oper: exec::bit::default() },
    Instruction { code: 0x64, repr: "BIT 4, H", oper: exec::bit::default() },
    Instruction { code: 0x65, repr: "BIT 4, L", oper: exec::bit::default() },
    Instruction { code: 0x66, repr: "BIT 4, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x67, repr: "BIT 4, A", oper: exec::bit::default() },
    Instruction { code: 0x68, repr: "BIT 5, B", oper: exec::bit::default() },
    Instruction { code: 0x69, repr: "BIT 5, C", oper: exec::bit::default() },
    Instruction { code: 0x6a, repr: "BIT 5, D", oper: exec::bit::default() },
    Instruction { code: 0x6b, repr: "BIT 5, E", oper: exec::bit::default() },
    Instruction { code: 0x6c, repr: "BIT 5, H", oper: exec::bit::default() },
    Instruction { code: 0x6d, repr: "BIT 5, L", oper: exec::bit::default() },
    Instruction { code: 0x6e, repr: "BIT 5, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x6f, repr: "BIT 5, A", oper: exec::bit::default() },
    Instruction { code: 0x70, repr: "BIT 6, B", oper: exec::bit::default() },
    Instruction { code: 0x71, repr: "BIT 6, C", oper: exec::bit::default() },
    Instruction { code: 0x72, repr: "BIT 6, D", oper: exec::bit::default() },
    Instruction { code: 0x73, repr: "BIT 6, E", oper: exec::bit::default() },
    Instruction { code: 0x74, repr: "BIT 6, H", oper: exec::bit::default() },
    Instruction { code: 0x75, repr: "BIT 6, L", oper: exec::bit::default() },
    Instruction { code: 0x76, repr: "BIT 6, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x77, repr: "BIT 6, A", oper: exec::bit::default() },
    Instruction { code: 0x78, repr: "BIT 7, B", oper: exec::bit::default() },
    Instruction { code: 0x79, repr: "BIT 7, C", oper: exec::bit::default() },
    Instruction { code: 0x7a, repr: "BIT 7, D", oper: exec::bit::default() },
    Instruction { code: 0x7b, repr: "BIT 7, E", oper: exec::bit::default() },
    Instruction { code: 0x7c, repr: "BIT 7, H", oper: exec::bit::default() },
    Instruction { code: 0x7d, repr: "BIT 7, L", oper: exec::bit::default() },
    Instruction { code: 0x7e, repr: "BIT 7, (HL)", oper: exec::bit::default() },
    Instruction { code: 0x7f, repr: "BIT 7, A", oper: exec::bit::default() },
    Instruction { code: 0x80, repr: "RES 0, B", oper: exec::res::default() },
    Instruction { code: 0x81, repr: "RES 0, C", oper: exec::res::default() },
    Instruction { code: 0x82, repr: "RES 0, D", oper: exec::res::default() },
    Instruction { code: 0x83, repr: "RES 0, E", oper: exec::res::default() },
    Instruction { code: 0x84, repr: "RES 0, H", oper: exec::res::default() },
    Instruction { code: 0x85, repr: "RES 0, L", oper: exec::res::default() },
    Instruction { code: 0x86, repr: "RES 0, (HL)", oper: exec::res::default() },
    Instruction { code: 0x87, repr: "RES 0, A", oper: exec::res::default() },
    Instruction { code: 0x88, repr: "RES 1, B", oper: exec::res::default() },
    Instruction { code: 0x89, repr: "RES 1, C", oper: exec::res::default() },
    Instruction { code: 0x8a, repr: "RES 1, D", oper: exec::res::default() },
    Instruction { code: 0x8b, repr: "RES 1, E", oper: exec::res::default() },
    Instruction { code: 0x8c, repr: "RES 1, H", oper: exec::res::default() },
    Instruction { code: 0x8d, repr: "RES 1, L", oper: exec::res::default() },
    Instruction { code: 0x8e, repr: "RES 1, (HL)", oper: exec::res::default() },
    Instruction { code: 0x8f, repr: "RES 1, A", oper: exec::res::default() },
    Instruction { code: 0x90, repr: "RES 2, B", oper: exec::res::default() },
    Instruction { code: 0x91, repr: "RES 2, C", oper: exec::res::default() },
    Instruction { code: 0x92, repr: "RES 2, D", oper: exec::res::default() },
    Instruction { code: 0x93, repr: "RES 2, E", oper: exec::res::default() },
    Instruction { code: 0x94, repr: "RES 2, H", oper: exec::res::default() },
    Instruction { code: 0x95, repr: "RES 2, L", oper: exec::res::default() },
    Instruction { code: 0x96, repr: "RES 2, (HL)", oper: exec::res::default() },
    Instruction { code: 0x97, repr: "RES 2, A", oper: exec::res::default() },
    Instruction { code: 0x98, repr: "RES 3, B", oper: exec::res::default() },
    Instruction { code: 0x99, repr: "RES 3, C", oper: exec::res::default() },
    Instruction { code: 0x9a, repr: "RES 3, D", oper: exec::res::default() },
    Instruction { code: 0x9b, repr: "RES 3, E", oper: exec::res::default() },
    Instruction { code: 0x9c, repr: "RES 3, H", oper: exec::res::default() },
    Instruction { code: 0x9d, repr: "RES 3, L", oper: exec::res::default() },
    Instruction { code: 0x9e, repr: "RES 3, (HL)", oper: exec::res::default() },
    Instruction { code: 0x9f, repr: "RES 3, A", oper: exec::res::default() },
    Instruction { code: 0xa0, repr: "RES 4, B", oper: exec::res::default() },
    Instruction { code: 0xa1, repr: "RES 4, C", oper: exec::res::default() },
    Instruction { code: 0xa2, repr: "RES 4, D", oper: exec::res::default() },
    Instruction { code: 0xa3, repr: "RES 4, E", oper: exec::res::default() },
    Instruction { code: 0xa4, repr: "RES 4, H", oper: exec::res::default() },
    Instruction { code: 0xa5, repr: "RES 4, L", oper: exec::res::default() },
    Instruction { code: 0xa6, repr: "RES 4, (HL)", oper: exec::res::default() },
    Instruction { code: 0xa7, repr: "RES 4, A", oper: exec::res::default() },
    Instruction { code: 0xa8, repr: "RES 5, B", oper: exec::res::default() },
    Instruction { code: 0xa9, repr: "RES 5, C", oper: exec::res::default() },
    Instruction { code: 0xaa, repr: "RES 5, D", oper: exec::res::default() },
    Instruction { code: 0xab, repr: "RES 5, E", oper: exec::res::default() },
    Instruction { code: 0xac, repr: "RES 5, H", oper: exec::res::default() },
    Instruction { code: 0xad, repr: "RES 5, L", oper: exec::res::default() },
    Instruction { code: 0xae, repr: "RES 5, (HL)", oper: exec::res::default() },
    Instruction { code: 0xaf, repr: "RES 5, A", oper: exec::res::default() },
    Instruction { code: 0xb0, repr: "RES 6, B", oper: exec::res::default() },
    Instruction { code: 0xb1, repr: "RES 6, C", oper: exec::res::default() },
    Instruction { code: 0xb2, repr: "RES 6, D", oper: exec::res::default() },
    Instruction { code: 0xb3, repr: "RES 6, E", oper: exec::res::default() },
    Instruction { code: 0xb4, repr: "RES 6, H", oper: exec::res::default() },
    Instruction { code: 0xb5, repr: "RES 6, L", oper: exec::res::default() },
    Instruction { code: 0xb6, repr: "RES 6, (HL)", oper: exec::res::default() },
    Instruction { code: 0xb7, repr: "RES 6, A", oper: exec::res::default() },
    Instruction { code: 0xb8, repr: "RES 7, B", oper: exec::res::default() },
    Instruction { code: 0xb9, repr: "RES 7, C", oper: exec::res::default() },
    Instruction { code: 0xba, repr: "RES 7, D", oper: exec::res::default() },
    Instruction { code: 0xbb, repr: "RES 7, E", oper: exec::res::default() },
    Instruction { code: 0xbc, repr: "RES 7, H", oper: exec::res::default() },
    Instruction { code: 0xbd, repr: "RES 7, L", oper: exec::res::default() },
    Instruction { code: 0xbe, repr: "RES 7, (HL)", oper: exec::res::default() },
    Instruction { code: 0xbf, repr: "RES 7, A", oper: exec::res::default() },
    Instruction { code: 0xc0, repr: "SET 0, B", oper: exec::set::default() },
    Instruction { code: 0xc1, repr: "SET 0, C", oper: exec::set::default() },
    Instruction { code: 0xc2, repr: "SET 0, D", oper: exec::set::default() },
    Instruction { code: 0xc3, repr: "SET 0, E", oper: exec::set::default() },
    Instruction { code: 0xc4, repr: "SET 0, H", oper: exec::set::default() },
    Instruction { code: 0xc5, repr: "SET 0, L", oper: exec::set::default() },
    Instruction { code: 0xc6, repr: "SET 0, (HL)", oper: exec::set::default() },
    Instruction { code: 0xc7, repr: "SET 0, A", oper: exec::set::default() },
    Instruction { code: 0xc8, repr: "SET 1, B", oper: exec::set::default() },
    Instruction { code: 0xc9, repr: "SET 1, C", oper: exec::set::default() },
    Instruction { code: 0xca, repr: "SET 1, D", oper: exec::set::default() },
    Instruction { code: 0xcb, repr: "SET 1, E", oper: exec::set::default() },
    Instruction { code: 0xcc, repr: "SET 1, H", oper: exec::set::default() },
    Instruction { code: 0xcd, repr: "SET 1, L", oper: exec::set::default() },
    Instruction { code: 0xce, repr: "SET 1, (HL)", oper: exec::set::default() },
    Instruction { code: 0xcf, repr: "SET 1, A", oper: exec::set::default() },
    Instruction { code: 0xd0, repr: "SET 2, B", oper: exec::set::default() },
    Instruction { code: 0xd1, repr: "SET 2, C", oper: exec::set::default() },
    Instruction { code: 0xd2, repr: "SET 2, D", oper: exec::set::default() },
    Instruction { code: 0xd3, repr: "SET 2, E", oper: exec::set::default() },
    Instruction { code: 0xd4, repr: "SET 2, H", oper: exec::set::default() },
    Instruction { code: 0xd5, repr: "SET 2, L", oper: exec::set::default() },
    Instruction { code: 0xd6, repr: "SET 2, (HL)", oper: exec::set::default() },
    Instruction { code: 0xd7, repr: "SET 2, A", oper: exec::set::default() },
    Instruction { code: 0xd8, repr: "SET 3, B", oper: exec::set::default() },
    Instruction { code: 0xd9, repr: "SET 3, C", oper: exec::set::default() },
    Instruction { code: 0xda, repr: "SET 3, D", oper: exec::set::default() },
    Instruction { code: 0xdb, repr: "SET 3, E", oper: exec::set::default() },
    Instruction { code: 0xdc, repr: "SET 3, H", oper: exec::set::default() },
    Instruction { code: 0xdd, repr: "SET 3, L", oper: exec::set::default() },
    Instruction { code: 0xde, repr: "SET 3, (HL)", oper: exec::set::default() },
    Instruction { code: 0xdf, repr: "SET 3, A", oper: exec::set::default() },
    Instruction { code: 0xe0, repr: "SET 4, B", oper: exec::set::default() },
    Instruction { code: 0xe1, repr: "SET 4, C", oper: exec::set::default() },
    Instruction { code: 0xe2, repr: "SET 4, D", oper: exec::set::default() },
    Instruction { code: 0xe3, repr: "SET 4, E", oper: exec::set::default() },
    Instruction { code: 0xe4, repr: "SET 4, H", oper: exec::set::default() },
    Instruction { code: 0xe5, repr: "SET 4, L", oper: exec::set::default() },
    Instruction { code: 0xe6, repr: "SET 4, (HL)", oper: exec::set::default() },
    Instruction { code: 0xe7, repr: "SET 4, A", oper: exec::set::default() },
    Instruction { code: 0xe8, repr: "SET 5, B", oper: exec::set::default() },
    Instruction { code: 0xe9, repr: "SET 5, C", oper: exec::set::default() },
    Instruction { code: 0xea, repr: "SET 5, D", oper: exec::set::default() },
    Instruction { code: 0xeb, repr: "SET 5, E", oper: exec::set::default() },
    Instruction { code: 0xec, repr: "SET 5, H", oper: exec::set::default() },
    Instruction { code: 0xed, repr: "SET 5, L", oper: exec::set::default() },
    Instruction { code: 0xee, repr: "SET 5, (HL)", oper: exec::set::default() },
    Instruction { code: 0xef, repr: "SET 5, A", oper: exec::set::default() },
    Instruction { code: 0xf0, repr: "SET 6, B", oper: exec::set::default() },
    Instruction { code: 0xf1, repr: "SET 6, C", oper: exec::set::default() },
    Instruction { code: 0xf2, repr: "SET 6, D", oper: exec::set::default() },
    Instruction { code: 0xf3, repr: "SET 6, E", oper: exec::set::default() },
    Instruction { code: 0xf4, repr: "SET 6, H", oper: exec::set::default() },
    Instruction { code: 0xf5, repr: "SET 6, L", oper: exec::set::default() },
    Instruction { code: 0xf6, repr: "SET 6, (HL)", oper: exec::set::default() },
    Instruction { code: 0xf7, repr: "SET 6, A", oper: exec::set::default() },
    Instruction { code: 0xf8, repr: "SET 7, B", oper: exec::set::default() },
    Instruction { code: 0xf9, repr: "SET 7, C", oper: exec::set::default() },
    Instruction { code: 0xfa, repr: "SET 7, D", oper: exec::set::default() },
    Instruction { code: 0xfb, repr: "SET 7, E", oper: exec::set::default() },
    Instruction { code: 0xfc, repr: "SET 7, H", oper: exec::set::default() },
    Instruction { code: 0xfd, repr: "SET 7, L", oper: exec::set::default() },
    Instruction { code: 0xfe, repr: "SET 7, (HL)", oper: exec::set::default() },
    Instruction { code: 0xff, repr: "SET 7, A", oper: exec::set::default() },
];
