use crate::opcode::Opcode;
use crate::operations::*;

/// Selects the operation for a given opcode
///
/// Returns None for bit patterns with no instruction assigned; the executor
/// turns that into an `InvalidOpcode` fault carrying the raw word
pub fn from_op(op: Opcode) -> Option<Operation> {
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Some(clear_screen),
        (0x0, 0x0, 0xE, 0xE) => Some(ret),
        (0x1, ..) => Some(jump),
        (0x2, ..) => Some(call),
        (0x3, ..) => Some(skip_eq_imm),
        (0x4, ..) => Some(skip_ne_imm),
        (0x5, .., 0x0) => Some(skip_eq_reg),
        (0x6, ..) => Some(load_imm),
        (0x7, ..) => Some(add_imm),
        (0x8, .., 0x0) => Some(copy),
        (0x8, .., 0x1) => Some(or),
        (0x8, .., 0x2) => Some(and),
        (0x8, .., 0x3) => Some(xor),
        (0x8, .., 0x4) => Some(add_carry),
        (0x8, .., 0x5) => Some(sub_borrow),
        (0x8, .., 0x6) => Some(shift_right),
        (0x8, .., 0x7) => Some(sub_reverse),
        (0x8, .., 0xE) => Some(shift_left),
        (0x9, .., 0x0) => Some(skip_ne_reg),
        (0xA, ..) => Some(load_index),
        (0xB, ..) => Some(jump_offset),
        (0xC, ..) => Some(random),
        (0xD, ..) => Some(draw),
        (0xE, .., 0x9, 0xE) => Some(skip_key_pressed),
        (0xE, .., 0xA, 0x1) => Some(skip_key_released),
        (0xF, .., 0x0, 0x7) => Some(read_delay),
        (0xF, .., 0x0, 0xA) => Some(wait_key),
        (0xF, .., 0x1, 0x5) => Some(set_delay),
        (0xF, .., 0x1, 0x8) => Some(set_sound),
        (0xF, .., 0x1, 0xE) => Some(add_index),
        (0xF, .., 0x2, 0x9) => Some(font_index),
        (0xF, .., 0x3, 0x3) => Some(store_bcd),
        (0xF, .., 0x5, 0x5) => Some(dump_registers),
        (0xF, .., 0x6, 0x5) => Some(load_registers),
        _ => None,
    }
}
