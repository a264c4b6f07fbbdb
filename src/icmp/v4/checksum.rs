/// One's-complement 16-bit checksum over `bytes`.
///
/// Words are summed low byte first, so the folded complement comes out
/// byte-swapped; the final swap turns it back into the value that belongs in
/// the (big-endian) checksum field of the header.
pub fn checksum(bytes: &[u8]) -> u16 {
    let mut sum: u32 = 0;

    let mut words = bytes.chunks_exact(2);
    for word in &mut words {
        sum = sum.wrapping_add(u32::from(word[1]) * 256 + u32::from(word[0]));
    }
    if let [last] = words.remainder() {
        sum = sum.wrapping_add(u32::from(*last));
    }

    sum = (sum >> 16) + (sum & 0xffff);
    sum += sum >> 16;

    #[allow(clippy::cast_possible_truncation)]
    let answer = (!sum & 0xffff) as u16;
    answer.swap_bytes()
}
