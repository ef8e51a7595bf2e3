use anyhow::{Result, bail};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shared color set for the whole cursor pack.
///
/// Declared once and passed explicitly to every composition routine so that
/// cursors meant to match (arrow/hand horns, ibeam/move glyphs) cannot drift
/// apart. Serializes to TOML as `#RRGGBB` strings so a pack can be re-themed
/// without recompiling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(with = "hex")]
    pub horn_fill: Rgba<u8>,
    #[serde(with = "hex")]
    pub horn_outline: Rgba<u8>,
    #[serde(with = "hex")]
    pub aura: Rgba<u8>,
    #[serde(with = "hex")]
    pub star_fill: Rgba<u8>,
    #[serde(with = "hex")]
    pub star_outline: Rgba<u8>,
    #[serde(with = "hex")]
    pub glyph_fill: Rgba<u8>,
    #[serde(with = "hex")]
    pub glyph_outline: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // Lavender horn with a dark indigo outline
            horn_fill: Rgba([0xD1, 0x9F, 0xE3, 0xFF]),
            horn_outline: Rgba([0x24, 0x18, 0x42, 0xFF]),
            // Magenta magic aura
            aura: Rgba([0xFA, 0x5F, 0xE3, 0xFF]),
            // Pink star with white outline for the busy spinner
            star_fill: Rgba([0xD3, 0x5E, 0x99, 0xFF]),
            star_outline: Rgba([0xFF, 0xFF, 0xFF, 0xFF]),
            // Cyan shared by the ibeam and move glyphs, teal outline
            glyph_fill: Rgba([0x99, 0xD9, 0xEA, 0xFF]),
            glyph_outline: Rgba([0x2F, 0x6B, 0x80, 0xFF]),
        }
    }
}

impl Palette {
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional) into an RGBA color.
/// Six-digit colors are fully opaque.
pub fn parse_hex(s: &str) -> Result<Rgba<u8>> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = match digits.len() {
        6 => {
            let v = u32::from_str_radix(digits, 16)?;
            [(v >> 16) as u8, (v >> 8) as u8, v as u8, 0xFF]
        }
        8 => {
            let v = u32::from_str_radix(digits, 16)?;
            [(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8]
        }
        _ => bail!("invalid color {:?}: expected #RRGGBB or #RRGGBBAA", s),
    };
    Ok(Rgba(bytes))
}

pub fn to_hex(color: &Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 0xFF {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

mod hex {
    use image::Rgba;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Rgba<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_hex(color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgba<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
