//! BMP-style RGB565 image blobs.
//!
//! A blob starts with a 54-byte header of which four little-endian `u32`
//! fields are used:
//!
//! | offset | field                    |
//! |--------|--------------------------|
//! | 2      | total size in bytes      |
//! | 10     | offset of the pixel data |
//! | 18     | width in pixels          |
//! | 22     | height in pixels         |
//!
//! The pixel data is a run of little-endian RGB565 words.

/// Length of the header written by [`BitmapHeader::write`].
pub const HEADER_LEN: usize = 54;

const SIZE_AT: usize = 2;
const DATA_OFFSET_AT: usize = 10;
const WIDTH_AT: usize = 18;
const HEIGHT_AT: usize = 22;

fn read_u32(blob: &[u8], at: usize) -> Option<u32> {
    let bytes = blob.get(at..at + 4)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

/// The header fields of a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub size: u32,
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
}

impl BitmapHeader {
    /// Header of a `width` x `height` image with the pixels right after it.
    pub fn new(width: u16, height: u16) -> Self {
        let payload = u32::from(width) * u32::from(height) * 2;
        Self {
            size: HEADER_LEN as u32 + payload,
            data_offset: HEADER_LEN as u32,
            width: u32::from(width),
            height: u32::from(height),
        }
    }

    /// Reads the header fields, `None` if the blob is too short to hold them.
    pub fn parse(blob: &[u8]) -> Option<Self> {
        Some(Self {
            size: read_u32(blob, SIZE_AT)?,
            data_offset: read_u32(blob, DATA_OFFSET_AT)?,
            width: read_u32(blob, WIDTH_AT)?,
            height: read_u32(blob, HEIGHT_AT)?,
        })
    }

    /// Stores the fields into the first [`HEADER_LEN`] bytes of `blob`.
    ///
    /// # Panics
    ///
    /// If `blob` is shorter than [`HEADER_LEN`].
    pub fn write(&self, blob: &mut [u8]) {
        let header = &mut blob[..HEADER_LEN];
        header.fill(0);
        header[0..2].copy_from_slice(b"BM");
        for (at, value) in [
            (SIZE_AT, self.size),
            (DATA_OFFSET_AT, self.data_offset),
            (WIDTH_AT, self.width),
            (HEIGHT_AT, self.height),
        ] {
            header[at..at + 4].copy_from_slice(&value.to_le_bytes());
        }
    }

    /// Number of pixels announced by the header.
    pub fn pixel_count(&self) -> u32 {
        self.size.saturating_sub(self.data_offset) / 2
    }
}

/// A parsed blob.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    header: BitmapHeader,
    payload: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Returns `None` when the header is truncated or the data offset points
    /// past the end of the blob.
    pub fn parse(blob: &'a [u8]) -> Option<Self> {
        let header = BitmapHeader::parse(blob)?;
        let offset = usize::try_from(header.data_offset).ok()?;
        let payload = blob.get(offset..)?;
        Some(Self { header, payload })
    }

    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Pixels in stream order.
    ///
    /// Stops at the announced pixel count or at the end of the blob, whichever
    /// comes first.
    pub fn pixels(&self) -> impl Iterator<Item = u16> + 'a {
        let count = usize::try_from(self.header.pixel_count()).unwrap_or(usize::MAX);
        self.payload
            .chunks_exact(2)
            .take(count)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
    }
}
