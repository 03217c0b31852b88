//! # ASCII85 Encoding
//!
//! ascii85-codec implements the classic ASCII85 ("btoa") encoding. Every four
//! bytes of input are mapped to five characters in range `b'!'..=b'u'`. For
//! more details on the encoding scheme refer to [Wikipedia](https://en.wikipedia.org/wiki/Ascii85).
//!
//! The character `z` encodes four zero bytes. Whitespace and control
//! characters are skipped while decoding. There are no start (`<~`) or end
//! (`~>`) sequences.
//!
//! ## Decode Example
//!
//! ```
//! use ascii85_codec::decode;
//! const EXAMPLE_CODEC: &str = r#"9jqo^BlbD-BleB1DJ+*+F(f,q/0JhKF<GL>Cj@.4Gp$d7F!,L7@<6@)/0JDEF<G%<+EV:2F!,O<DJ+*.@<*K0@<6L(Df-\0Ec5e;DffZ(EZee.Bl.9pF"AGXBPCsi+DGm>@3BB/F*&OCAfu2/AKYi(DIb:@FD,*)+C]U=@3BN#EcYf8ATD3s@q?d$AftVqCh[NqF<G:8+EV:.+Cf>-FD5W8ARlolDIal(DId<j@<?3r@:F%a+D58'ATD4$Bl@l3De:,-DJs`8ARoFb/0JMK@qB4^F!,R<AKZ&-DfTqBG%G>uD.RTpAKYo'+CT/5+Cei#DII?(E,9)oF*2M7/c"#;
//!
//! println!("{:?}", decode(EXAMPLE_CODEC.as_bytes()).unwrap());
//! ```
//!
//! ## Encode Example
//!
//! ```
//! use ascii85_codec::encode;
//! const EXAMPLE_PLAIN: &[u8; 269] = b"Man is distinguished, not only by his reason, but by this singular passion from other animals, which is a lust of the mind, that by a perseverance of delight in the continued and indefatigable generation of knowledge, exceeds the short vehemence of any carnal pleasure.";
//!
//! println!("{}", String::from_utf8(encode(&EXAMPLE_PLAIN[..])).unwrap());
//! ```
//!
//! ## Codec Handle
//!
//! Code that is generic over binary-to-text codecs can use the [`Encoding`]
//! trait together with the zero-sized [`Ascii85`] handle.
//!
//! ```
//! use ascii85_codec::{Encoding, STD_CODEC};
//!
//! let encoded = STD_CODEC.encode(b"Man ");
//! assert_eq!(encoded, b"9jqo^");
//! assert_eq!(STD_CODEC.decode(&encoded).unwrap(), b"Man ");
//! ```

mod decode;
mod encode;
mod error;

pub use decode::{decode, decode_into, max_decode_len, Progress};
pub use encode::{encode, encode_into, max_encode_len};
pub use error::DecodeError;

/// The character `!` represents the digit 0.
const FIRST_DIGIT: u8 = b'!';

/// The character `u` represents the digit 84.
const LAST_DIGIT: u8 = b'u';

/// The character `z` in the ASCII table represents 4 null bytes (0x0000_0000).
const NULL_WORD: u8 = b'z';

/// Bytes up to and including the space are skipped by the decoder.
const MAX_WHITESPACE: u8 = b' ';

/// A binary-to-text codec over whole buffers.
pub trait Encoding {
    /// The error returned when decoding fails.
    type Error;

    /// Encodes `src` into its textual representation.
    fn encode(&self, src: &[u8]) -> Vec<u8>;

    /// Decodes `src` back into the bytes it represents.
    fn decode(&self, src: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// The ASCII85 codec. Holds no state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ascii85;

/// A ready to use [`Ascii85`] codec.
pub const STD_CODEC: Ascii85 = Ascii85;

impl Encoding for Ascii85 {
    type Error = DecodeError;

    fn encode(&self, src: &[u8]) -> Vec<u8> {
        encode(src)
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>, DecodeError> {
        decode(src)
    }
}
