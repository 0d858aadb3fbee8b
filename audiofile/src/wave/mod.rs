//! Canonical PCM WAVE files: one `fmt ` chunk of 16 bytes followed directly
//! by the `data` chunk.

use crate::error::*;
use crate::{AudioReader, AudioWriter};
use log::{debug, warn};
use std::io::{self, Read, Write};

mod header;
pub use header::WaveHeader;

/// What to do when the data chunk is shorter than its header says.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadPolicy {
    /// Fail with [`CorruptFile::ShortPayload`].
    Strict,
    /// Keep what could be read and pad it with zeros up to the declared size.
    Lenient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub payload: PayloadPolicy,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            payload: PayloadPolicy::Strict,
        }
    }

    pub fn lenient() -> Self {
        Self {
            payload: PayloadPolicy::Lenient,
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// A WAVE file held entirely in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wavefile {
    pub header: WaveHeader,
    pub data: Vec<u8>,
}

impl Wavefile {
    /// A file with the canonical header and no samples.
    pub fn new() -> Self {
        let mut file = Self::default();
        file.init();
        file
    }

    /// Loads the header and payload from `reader`.
    ///
    /// The header is validated before the payload is read. On error `self`
    /// is left untouched.
    pub fn load_with(&mut self, reader: &mut dyn Read, options: &LoadOptions) -> Result<()> {
        let header = WaveHeader::read(reader)?;
        header.validate()?;

        let data = read_payload(reader, header.subchunk2_size, options.payload)?;
        debug!(
            "loaded wave file: {} channel(s), {} Hz, {} bits, {} data bytes",
            header.num_channels, header.sample_rate, header.bits_per_sample, data.len()
        );

        self.header = header;
        self.data = data;
        Ok(())
    }

    pub fn load(&mut self, reader: &mut dyn Read) -> Result<()> {
        self.load_with(reader, &LoadOptions::default())
    }

    /// Writes the header followed by the payload. The header is written as
    /// it is, without any validation.
    pub fn save(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.header.write(writer)?;
        writer.write_all(&self.data)?;
        debug!(
            "saved wave file: {} header bytes, {} data bytes",
            WaveHeader::SIZE,
            self.data.len()
        );
        Ok(())
    }

    pub fn init(&mut self) {
        self.header = WaveHeader::canonical();
        self.data.clear();
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Replaces the payload and updates the data chunk size to match.
    pub fn set_bytes(&mut self, data: Vec<u8>) {
        // the data chunk size field is 32 bits wide
        self.header.subchunk2_size = data.len() as u32;
        self.data = data;
    }
}

fn read_payload(reader: &mut dyn Read, declared: u32, policy: PayloadPolicy) -> Result<Vec<u8>> {
    // don't trust `declared` enough to allocate it up front
    let mut data = Vec::new();
    let read = reader.take(declared as u64).read_to_end(&mut data);

    match (read, policy) {
        (Ok(n), _) if n == declared as usize => Ok(data),

        (Ok(n), PayloadPolicy::Strict) => Err(CorruptFile::ShortPayload { declared, read: n }),
        (Err(err), PayloadPolicy::Strict) => Err(CorruptFile::Payload(err)),

        (read, PayloadPolicy::Lenient) => {
            match read {
                Ok(n) => warn!("data chunk declares {} bytes, only {} present; padding", declared, n),
                Err(err) => warn!("error reading data chunk ({}), padding to {} bytes", err, declared),
            }
            data.resize(declared as usize, 0);
            Ok(data)
        }
    }
}

impl AudioReader for Wavefile {
    fn load(&mut self, reader: &mut dyn Read) -> Result<()> {
        Wavefile::load(self, reader)
    }

    fn bytes(&self) -> &[u8] {
        Wavefile::bytes(self)
    }
}

impl AudioWriter for Wavefile {
    fn save(&self, writer: &mut dyn Write) -> io::Result<()> {
        Wavefile::save(self, writer)
    }

    fn init(&mut self) {
        Wavefile::init(self)
    }

    fn set_bytes(&mut self, data: Vec<u8>) {
        Wavefile::set_bytes(self, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderField;

    fn header_with_size(subchunk2_size: u32) -> Vec<u8> {
        let mut out = Vec::new();
        let header = WaveHeader {
            subchunk2_size,
            ..WaveHeader::canonical()
        };
        header.write(&mut out).unwrap();
        out
    }

    #[test]
    fn new_is_initialized() {
        let file = Wavefile::new();
        assert_eq!(file.header, WaveHeader::canonical());
        assert!(file.data.is_empty());
    }

    #[test]
    fn init_clears_previous_contents() {
        let mut file = Wavefile::default();
        file.header.sample_rate = 8000;
        file.set_bytes(vec![1, 2, 3]);
        file.init();
        assert_eq!(file, Wavefile::new());
    }

    #[test]
    fn set_bytes_tracks_length() {
        let mut file = Wavefile::new();
        for len in [0usize, 1, 2, 11, 4096].iter() {
            file.set_bytes(vec![0xaa; *len]);
            assert_eq!(file.header.subchunk2_size as usize, *len);
            assert_eq!(file.bytes().len(), *len);
        }
    }

    #[test]
    fn strict_load_rejects_short_payload() {
        let mut bytes = header_with_size(6);
        bytes.extend_from_slice(&[1, 2, 3]);

        let mut file = Wavefile::default();
        match file.load(&mut bytes.as_slice()) {
            Err(CorruptFile::ShortPayload { declared, read }) => {
                assert_eq!(declared, 6);
                assert_eq!(read, 3);
            }
            other => panic!("expected a short payload error, got {:?}", other),
        }
        assert_eq!(file, Wavefile::default());
    }

    #[test]
    fn lenient_load_pads_short_payload() {
        let mut bytes = header_with_size(6);
        bytes.extend_from_slice(&[1, 2, 3]);

        let mut file = Wavefile::default();
        file.load_with(&mut bytes.as_slice(), &LoadOptions::lenient())
            .unwrap();
        assert_eq!(file.data, vec![1, 2, 3, 0, 0, 0]);
        assert_eq!(file.header.subchunk2_size, 6);
    }

    #[test]
    fn trailing_bytes_are_left_in_the_reader() {
        let mut bytes = header_with_size(2);
        bytes.extend_from_slice(&[1, 2, 3, 4]);

        let mut reader = bytes.as_slice();
        let mut file = Wavefile::default();
        file.load(&mut reader).unwrap();
        assert_eq!(file.data, vec![1, 2]);
        assert_eq!(reader, &[3, 4]);
    }

    #[test]
    fn bad_magic_is_reported_before_the_payload_is_read() {
        let mut bytes = header_with_size(1000);
        bytes[8] = b'X';

        let err = Wavefile::default().load(&mut bytes.as_slice()).unwrap_err();
        assert_eq!(err.field(), HeaderField::Format);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn payload_io_error_is_corruption() {
        let header = header_with_size(4);
        let mut reader = header.as_slice().chain(FailingReader);

        let err = Wavefile::default().load(&mut reader).unwrap_err();
        assert!(matches!(err, CorruptFile::Payload(_)));

        let mut reader = header.as_slice().chain(FailingReader);
        let mut file = Wavefile::default();
        file.load_with(&mut reader, &LoadOptions::lenient()).unwrap();
        assert_eq!(file.data, vec![0; 4]);
    }
}
