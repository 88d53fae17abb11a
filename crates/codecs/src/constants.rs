/// Lowercase hexadecimal digits.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Prefix written once by the `0xhex` encoder.
pub const HEX_PREFIX: &[u8] = b"0x";

/// Opening literal of the `go` encoder.
pub const GO_SLICE_OPEN: &[u8] = b"[]byte{\n\t";

/// Closing literal of the `go` encoder.
pub const GO_SLICE_CLOSE: &[u8] = b"}";

/// Number of byte entries per line in `go` output.
pub const GO_BYTES_PER_LINE: u64 = 16;

/// Pre-computed two-character lookup table for hex encoding.
/// Entry `b` holds the two lowercase digits of byte `b`.
pub(crate) static HEX_TABLE: [[u8; 2]; 256] = {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i][0] = HEX_DIGITS[i >> 4];
        table[i][1] = HEX_DIGITS[i & 0x0f];
        i += 1;
    }
    table
};

/// Reverse lookup: ASCII byte to nibble value, `-1` for non-digits.
/// Both cases are accepted.
pub(crate) static HEX_REVERSE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as i8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as i8;
        table[b'A' as usize + i] = 10 + i as i8;
        i += 1;
    }
    table
};
