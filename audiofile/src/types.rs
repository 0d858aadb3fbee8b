use std::fmt;

/// A four-character chunk code, stored exactly as it appears on disk.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct ID(pub [u8; 4]);

impl ID {
    pub const RIFF: ID = ID(*b"RIFF");
    pub const WAVE: ID = ID(*b"WAVE");
    pub const FMT: ID = ID(*b"fmt ");
    pub const DATA: ID = ID(*b"data");

    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 4]> for ID {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID(")?;
        fmt::Display::fmt(&self, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            // keep garbage bytes readable in error messages
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Fields of the canonical WAVE header, in wire order.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum HeaderField {
    ChunkID,
    ChunkSize,
    Format,
    Subchunk1ID,
    Subchunk1Size,
    AudioFormat,
    NumChannels,
    SampleRate,
    ByteRate,
    BlockAlign,
    BitsPerSample,
    Subchunk2ID,
    Subchunk2Size,
    /// The sample payload following the header.
    Data,
}

impl HeaderField {
    pub fn name(self) -> &'static str {
        use HeaderField::*;

        match self {
            ChunkID => "ChunkID",
            ChunkSize => "ChunkSize",
            Format => "Format",
            Subchunk1ID => "Subchunk1ID",
            Subchunk1Size => "Subchunk1Size",
            AudioFormat => "AudioFormat",
            NumChannels => "NumChannels",
            SampleRate => "SampleRate",
            ByteRate => "ByteRate",
            BlockAlign => "BlockAlign",
            BitsPerSample => "BitsPerSample",
            Subchunk2ID => "Subchunk2ID",
            Subchunk2Size => "Subchunk2Size",
            Data => "data chunk",
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
