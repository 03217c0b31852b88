use crate::{DecodeError, FIRST_DIGIT, LAST_DIGIT, MAX_WHITESPACE, NULL_WORD};

/// The digit assumed for the missing positions of a short final group.
const PAD_DIGIT: u32 = 84;

/// How far [`decode_into`] got.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of bytes written to the destination.
    pub written: usize,
    /// Number of input bytes fully accounted for by `written`.
    pub consumed: usize,
}

/// Maps an ASCII character to a number
fn to_number(byte: u8) -> Option<u32> {
    match byte {
        FIRST_DIGIT..=LAST_DIGIT => Some(u32::from(byte - FIRST_DIGIT)),
        _ => None,
    }
}

/// Returns a destination size for which [`decode_into`] with `flush` set
/// never stops early on `src`.
///
/// Every byte other than `z` produces at most one output byte and every `z`
/// produces four. The extra 4 bytes keep a group of room available until the
/// last input byte.
pub fn max_decode_len(src: &[u8]) -> usize {
    let zeros = src.iter().filter(|&&b| b == NULL_WORD).count();
    src.len() + 3 * zeros + 4
}

/// Decodes ASCII85 data from `src` into `dst`.
///
/// Whitespace (any byte up to and including `b' '`) is skipped. Decoding
/// stops early, without an error, as soon as less than 4 bytes are left in
/// `dst`; [`Progress::consumed`] then tells where to resume.
///
/// With `flush` set, `src` is taken to be the end of the input: a trailing
/// partial group is decoded and a single dangling digit is an error.
pub fn decode_into(dst: &mut [u8], src: &[u8], flush: bool) -> Result<Progress, DecodeError> {
    let mut progress = Progress::default();
    let mut v: u32 = 0;
    let mut nb = 0;

    for (i, &b) in src.iter().enumerate() {
        if dst.len() - progress.written < 4 {
            log::trace!(
                "ascii85 output full after {} bytes, {} input bytes consumed",
                progress.written,
                progress.consumed
            );
            return Ok(progress);
        }

        match b {
            0..=MAX_WHITESPACE => continue,
            NULL_WORD if nb == 0 => {
                v = 0;
                nb = 5;
            }
            _ => {
                let n = to_number(b).ok_or(DecodeError::IllegalFormat { position: i })?;
                // 5 digits of 'u' exceed u32, such groups wrap
                v = v.wrapping_mul(85).wrapping_add(n);
                nb += 1;
            }
        }

        if nb == 5 {
            dst[progress.written..progress.written + 4].copy_from_slice(&v.to_be_bytes());
            progress.written += 4;
            progress.consumed = i + 1;
            v = 0;
            nb = 0;
        }
    }

    if flush {
        progress.consumed = src.len();
        match nb {
            0 => {}
            1 => return Err(DecodeError::IllegalFormat { position: src.len() }),
            _ => {
                // The short encoding truncated the low digits, assume the
                // largest ones so the top bytes come out right.
                for _ in nb..5 {
                    v = v.wrapping_mul(85).wrapping_add(PAD_DIGIT);
                }
                let tail = nb - 1;
                dst[progress.written..progress.written + tail]
                    .copy_from_slice(&v.to_be_bytes()[..tail]);
                progress.written += tail;
            }
        }
    }

    Ok(progress)
}

/// Decodes ASCII85 encoded data.
///
/// The whole input is decoded or an error is returned, never partial output.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = vec![0; max_decode_len(data)];

    let progress = decode_into(&mut out, data, true).map_err(|err| {
        log::debug!("rejected ascii85 input: {err}");
        err
    })?;
    debug_assert_eq!(progress.consumed, data.len());

    out.truncate(progress.written);
    Ok(out)
}
