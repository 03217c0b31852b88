use crate::{FIRST_DIGIT, NULL_WORD};

/// Returns the largest number of bytes [`encode_into`] can write for `n`
/// input bytes.
///
/// This is the size without any `z` shortcuts, i.e. 5 bytes for every
/// started group of 4.
pub const fn max_encode_len(n: usize) -> usize {
    (n + 3) / 4 * 5
}

fn divmod(n: u32, m: u32) -> (u32, u32) {
    (n / m, n % m)
}

fn a85(n: u32) -> u8 {
    // n < 85, always fits
    n as u8 + FIRST_DIGIT
}

fn encode_word(n: u32) -> [u8; 5] {
    let (n, e) = divmod(n, 85);
    let (n, d) = divmod(n, 85);
    let (n, c) = divmod(n, 85);
    let (a, b) = divmod(n, 85);

    [a85(a), a85(b), a85(c), a85(d), a85(e)]
}

/// Packs up to 4 bytes into a big endian word, padding missing bytes with 0.
fn pack_word(group: &[u8]) -> u32 {
    group
        .iter()
        .enumerate()
        .fold(0, |v, (i, &b)| v | u32::from(b) << (24 - 8 * i))
}

/// Encodes `src` into `dst` and returns how many bytes were written.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`max_encode_len`] of `src.len()` and
/// the output does not fit.
pub fn encode_into(dst: &mut [u8], src: &[u8]) -> usize {
    let mut read = 0;
    let mut written = 0;

    while read < src.len() {
        let group = &src[read..src.len().min(read + 4)];
        let v = pack_word(group);

        if v == 0 && group.len() == 4 {
            dst[written] = NULL_WORD;
            written += 1;
            read += 4;
            continue;
        }

        // a short group of k bytes only needs k + 1 digits
        let len = group.len() + 1;
        dst[written..written + len].copy_from_slice(&encode_word(v)[..len]);
        written += len;
        read += group.len();
    }

    written
}

/// Encodes arbitrary bytes as ASCII85.
///
/// Never fails. Empty input results in empty output.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut buf = vec![0; max_encode_len(data.len())];
    let n = encode_into(&mut buf, data);
    buf.truncate(n);
    buf
}
