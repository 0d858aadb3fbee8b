//! Reading and writing of canonical PCM WAVE files.
//!
//! Files are loaded from any [`std::io::Read`] and saved to any
//! [`std::io::Write`]; opening and buffering is left to the caller. The whole
//! sample payload is kept in memory as raw bytes, [`pcm`] converts it to and
//! from 16-bit signed samples.
//!
//! ```
//! use audiofile::{pcm, Wavefile};
//!
//! let mut wav = Wavefile::new();
//! pcm::set_pcm(&mut wav, &[0, 1, -1]);
//!
//! let mut out = Vec::new();
//! wav.save(&mut out).unwrap();
//!
//! let mut loaded = Wavefile::default();
//! loaded.load(&mut out.as_slice()).unwrap();
//! assert_eq!(pcm::get_pcm(&loaded), vec![0, 1, -1]);
//! ```

mod error;
pub mod pcm;
mod types;
pub mod wave;

pub use error::*;
pub use types::*;
pub use wave::{LoadOptions, PayloadPolicy, WaveHeader, Wavefile};

use std::io;

/// An audio file that can be loaded. Not every readable format can be
/// written back, compressed ones in particular.
pub trait AudioReader {
    /// Loads the file from `reader`, checking that it looks sane.
    fn load(&mut self, reader: &mut dyn io::Read) -> Result<()>;

    /// The raw sample data, without any conversion.
    fn bytes(&self) -> &[u8];
}

/// An audio file that can be written out.
pub trait AudioWriter {
    /// Only fails if `writer` does.
    fn save(&self, writer: &mut dyn io::Write) -> io::Result<()>;

    /// Resets the metadata to the format's defaults and drops all samples.
    fn init(&mut self);

    /// Replaces the raw sample data, without any conversion.
    fn set_bytes(&mut self, data: Vec<u8>);
}

/// A format that can be both read and written.
pub trait AudioFile: AudioReader + AudioWriter {}

impl<T: AudioReader + AudioWriter + ?Sized> AudioFile for T {}
