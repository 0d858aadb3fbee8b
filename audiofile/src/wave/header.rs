use crate::error::*;
use crate::types::*;
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{self, Read, Write};
use std::time::Duration;

/// The 44-byte canonical WAVE header.
///
/// Chunk codes are stored as raw bytes, every integer is little-endian on
/// disk. See <https://ccrma.stanford.edu/courses/422/projects/WaveFormat/>.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaveHeader {
    pub chunk_id: ID,
    /// Size of the whole file minus the 8 bytes of `chunk_id` and `chunk_size`.
    pub chunk_size: u32,
    pub format: ID,

    pub subchunk1_id: ID,
    pub subchunk1_size: u32,
    /// 1 for uncompressed PCM.
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    /// `sample_rate * block_align`
    pub byte_rate: u32,
    /// Bytes per sample frame, all channels included.
    pub block_align: u16,
    pub bits_per_sample: u16,

    pub subchunk2_id: ID,
    /// Length of the sample payload in bytes.
    pub subchunk2_size: u32,
}

impl WaveHeader {
    pub const SIZE: usize = 44;

    pub const PCM_SUBCHUNK1_SIZE: u32 = 16;
    pub const FORMAT_PCM: u16 = 1;

    /// Mono, 16 bits, 44.1kHz, no samples.
    pub fn canonical() -> Self {
        Self {
            chunk_id: ID::RIFF,
            chunk_size: 36,
            format: ID::WAVE,
            subchunk1_id: ID::FMT,
            subchunk1_size: Self::PCM_SUBCHUNK1_SIZE,
            audio_format: Self::FORMAT_PCM,
            num_channels: 1,
            sample_rate: 44_100,
            byte_rate: 44_100 * 2,
            block_align: 2,
            bits_per_sample: 16,
            subchunk2_id: ID::DATA,
            subchunk2_size: 0,
        }
    }

    /// Reads the 13 header fields in wire order. Nothing is validated here,
    /// see [`WaveHeader::validate`].
    pub fn read(reader: &mut dyn Read) -> Result<Self> {
        use HeaderField::*;

        Ok(Self {
            chunk_id: read_id(reader, ChunkID)?,
            chunk_size: read_u32(reader, ChunkSize)?,
            format: read_id(reader, Format)?,
            subchunk1_id: read_id(reader, Subchunk1ID)?,
            subchunk1_size: read_u32(reader, Subchunk1Size)?,
            audio_format: read_u16(reader, AudioFormat)?,
            num_channels: read_u16(reader, NumChannels)?,
            sample_rate: read_u32(reader, SampleRate)?,
            byte_rate: read_u32(reader, ByteRate)?,
            block_align: read_u16(reader, BlockAlign)?,
            bits_per_sample: read_u16(reader, BitsPerSample)?,
            subchunk2_id: read_id(reader, Subchunk2ID)?,
            subchunk2_size: read_u32(reader, Subchunk2Size)?,
        })
    }

    /// Writes the header as-is, consistent or not.
    pub fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(self.chunk_id.data())?;
        writer.write_u32::<LE>(self.chunk_size)?;
        writer.write_all(self.format.data())?;
        writer.write_all(self.subchunk1_id.data())?;
        writer.write_u32::<LE>(self.subchunk1_size)?;
        writer.write_u16::<LE>(self.audio_format)?;
        writer.write_u16::<LE>(self.num_channels)?;
        writer.write_u32::<LE>(self.sample_rate)?;
        writer.write_u32::<LE>(self.byte_rate)?;
        writer.write_u16::<LE>(self.block_align)?;
        writer.write_u16::<LE>(self.bits_per_sample)?;
        writer.write_all(self.subchunk2_id.data())?;
        writer.write_u32::<LE>(self.subchunk2_size)
    }

    /// Checks the four chunk codes. Sizes and rates are not looked at.
    pub fn validate(&self) -> Result<()> {
        let magics = [
            (HeaderField::ChunkID, self.chunk_id, ID::RIFF),
            (HeaderField::Format, self.format, ID::WAVE),
            (HeaderField::Subchunk1ID, self.subchunk1_id, ID::FMT),
            (HeaderField::Subchunk2ID, self.subchunk2_id, ID::DATA),
        ];

        for &(field, found, expected) in magics.iter() {
            if found != expected {
                return Err(CorruptFile::BadMagic {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Playing time of the payload, `None` if the byte rate is zero.
    pub fn audio_length(&self) -> Option<Duration> {
        if self.byte_rate == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(
            self.subchunk2_size as f64 / self.byte_rate as f64,
        ))
    }
}

fn read_id(reader: &mut dyn Read, field: HeaderField) -> Result<ID> {
    let mut id = [0u8; 4];
    reader
        .read_exact(&mut id)
        .map_err(|source| CorruptFile::Truncated { field, source })?;
    Ok(ID(id))
}

fn read_u16(reader: &mut dyn Read, field: HeaderField) -> Result<u16> {
    reader
        .read_u16::<LE>()
        .map_err(|source| CorruptFile::Truncated { field, source })
}

fn read_u32(reader: &mut dyn Read, field: HeaderField) -> Result<u32> {
    reader
        .read_u32::<LE>()
        .map_err(|source| CorruptFile::Truncated { field, source })
}
