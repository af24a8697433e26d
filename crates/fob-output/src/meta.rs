//! Binary metadata descriptor written next to the bundle code.
//!
//! Layout (21 bytes):
//!
//! ```text
//! [0..20]  SHA-1 of the code bytes as written to disk
//! [20]     encoding tag: 0 unknown, 1 ascii, 2 utf8, 3 utf16le
//! ```
//!
//! Utf8 code that contains no byte above 0x7F is tagged ascii, which lets
//! a loader pick a cheaper decoding path.

use sha1::{Digest, Sha1};

use fob_output_config::BundleEncoding;

pub const DIGEST_LEN: usize = 20;
pub const DESCRIPTOR_LEN: usize = DIGEST_LEN + 1;

/// Encoding recorded in the descriptor's trailing byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EncodingTag {
    Unknown = 0,
    Ascii = 1,
    Utf8 = 2,
    Utf16le = 3,
}

impl EncodingTag {
    fn from_byte(byte: u8) -> Self {
        match byte {
            1 => EncodingTag::Ascii,
            2 => EncodingTag::Utf8,
            3 => EncodingTag::Utf16le,
            _ => EncodingTag::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleMetadata {
    pub digest: [u8; DIGEST_LEN],
    pub encoding: EncodingTag,
}

impl BundleMetadata {
    /// Describe `code` as it will be written with `encoding`.
    pub fn compute(code: &str, encoding: BundleEncoding) -> Self {
        let bytes = encoding.encode(code);
        Self::from_encoded(&bytes, encoding)
    }

    /// Describe code that is already encoded.
    pub fn from_encoded(bytes: &[u8], encoding: BundleEncoding) -> Self {
        let digest: [u8; DIGEST_LEN] = Sha1::digest(bytes).into();
        Self {
            digest,
            encoding: tag_for(bytes, encoding),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(DESCRIPTOR_LEN);
        out.extend_from_slice(&self.digest);
        out.push(self.encoding as u8);
        out
    }

    /// Read a descriptor back. Returns `None` unless `bytes` is exactly
    /// [`DESCRIPTOR_LEN`] long.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != DESCRIPTOR_LEN {
            return None;
        }
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&bytes[..DIGEST_LEN]);
        Some(Self {
            digest,
            encoding: EncodingTag::from_byte(bytes[DIGEST_LEN]),
        })
    }

    pub fn digest_hex(&self) -> String {
        self.digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

fn tag_for(bytes: &[u8], encoding: BundleEncoding) -> EncodingTag {
    match encoding {
        BundleEncoding::Utf8 if bytes.is_ascii() => EncodingTag::Ascii,
        BundleEncoding::Utf8 => EncodingTag::Utf8,
        BundleEncoding::Ascii => EncodingTag::Ascii,
        BundleEncoding::Utf16le => EncodingTag::Utf16le,
    }
}

/// Metadata descriptor bytes for `code` written with `encoding`.
pub fn compute(code: &str, encoding: BundleEncoding) -> Vec<u8> {
    BundleMetadata::compute(code, encoding).to_bytes()
}
