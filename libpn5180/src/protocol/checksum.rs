// libpn5180/src/protocol/checksum.rs

/// Compute the 16-bit CRC used by PN5180 download-mode frames.
///
/// Seeded with 0xFFFF and processed byte-wise with a byte swap and three
/// shift/XOR feedback steps, as in the vendor host library. The result
/// matches CRC-16/CCITT-FALSE (check value 0x29B1 over "123456789").
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0xFFFFu16, |crc, &b| {
        let mut c = crc.swap_bytes();
        c ^= b as u16;
        c ^= (c & 0xFF) >> 4;
        c ^= c << 12;
        c ^= (c & 0xFF) << 5;
        c
    })
}

/// CRC16 of `data` in wire order (big-endian).
pub fn crc16_be_bytes(data: &[u8]) -> [u8; 2] {
    crc16(data).to_be_bytes()
}
