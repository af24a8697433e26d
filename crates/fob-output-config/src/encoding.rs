//! Text encodings accepted for bundle code output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Encoding used when writing bundle code to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleEncoding {
    #[default]
    #[serde(alias = "utf-8")]
    Utf8,
    #[serde(alias = "utf-16le", alias = "ucs2", alias = "ucs-2")]
    Utf16le,
    Ascii,
}

impl BundleEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleEncoding::Utf8 => "utf8",
            BundleEncoding::Utf16le => "utf16le",
            BundleEncoding::Ascii => "ascii",
        }
    }

    /// Encode `text` into the bytes written to disk.
    ///
    /// `Ascii` keeps the low byte of each UTF-16 code unit, so characters
    /// outside the 7-bit range are truncated rather than rejected.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            BundleEncoding::Utf8 => text.as_bytes().to_vec(),
            BundleEncoding::Utf16le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            BundleEncoding::Ascii => text.encode_utf16().map(|unit| (unit & 0xff) as u8).collect(),
        }
    }
}

impl FromStr for BundleEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(BundleEncoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(BundleEncoding::Utf16le),
            "ascii" => Ok(BundleEncoding::Ascii),
            other => Err(format!("Invalid bundle encoding: {}", other)),
        }
    }
}

impl fmt::Display for BundleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
