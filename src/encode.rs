//! Bit slot encoding of a corrected level into the two words the transmitter consumes.
//!
//! Every bit of the level becomes one byte slot, most significant bit first. A set bit is
//! `0x00` (the line is left alone) and a clear bit is `0xff` (the line is cleared early,
//! shortening the pulse). The eight slots are packed four per word, first slot in the low
//! byte, so the words can be copied straight into little-endian DMA memory.

/// Slot byte for a set bit.
pub const SLOT_SET: u8 = 0x00;
/// Slot byte for a clear bit.
pub const SLOT_CLEAR: u8 = 0xff;

/// Number of 32-bit words per entry.
pub const WORDS: usize = 2;

const SLOTS_PER_WORD: usize = 4;

/// Expand a level into its eight slot bytes, MSB first.
#[inline(always)]
pub fn slots(level: u8) -> [u8; 8] {
    core::array::from_fn(|i| {
        if level & (0x80 >> i) != 0 {
            SLOT_SET
        } else {
            SLOT_CLEAR
        }
    })
}

/// Pack the slot bytes of a level into its word pair.
pub fn words(level: u8) -> [u32; WORDS] {
    let slots = slots(level);
    core::array::from_fn(|w| {
        let mut bytes = [0; SLOTS_PER_WORD];
        bytes.copy_from_slice(&slots[w * SLOTS_PER_WORD..(w + 1) * SLOTS_PER_WORD]);
        u32::from_le_bytes(bytes)
    })
}

/// Binary digits of a level, MSB first.
pub fn bits(level: u8) -> String {
    format!("{level:08b}")
}

/// Render a word as a C hex literal.
pub fn literal(word: u32) -> String {
    format!("0x{word:08x}")
}
