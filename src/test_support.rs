//! Minimal EXIF-carrying JPEG files for tests
//!
//! Only the markers kamadak-exif needs are written: SOI, an APP1 `Exif`
//! segment holding a little-endian TIFF structure, and EOI. There is no
//! image data.

use std::fs;
use std::path::Path;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

/// Build a TIFF structure whose Exif IFD holds one ASCII field
fn tiff_with_exif_ascii(tag: u16, value: &[u8]) -> Vec<u8> {
    let ifd0_offset = 8u32;
    let ifd0_len = 2 + 12 + 4;
    let exif_ifd_offset = ifd0_offset + ifd0_len;
    let exif_ifd_len = 2 + 12 + 4;
    let data_offset = exif_ifd_offset + exif_ifd_len;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&ifd0_offset.to_le_bytes());

    // IFD0: pointer to the Exif IFD
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&TAG_EXIF_IFD_POINTER.to_le_bytes());
    tiff.extend_from_slice(&TYPE_LONG.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&exif_ifd_offset.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD: the single ASCII entry
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&tag.to_le_bytes());
    tiff.extend_from_slice(&TYPE_ASCII.to_le_bytes());
    tiff.extend_from_slice(&(value.len() as u32).to_le_bytes());
    if value.len() <= 4 {
        let mut inline = [0u8; 4];
        inline[..value.len()].copy_from_slice(value);
        tiff.extend_from_slice(&inline);
    } else {
        tiff.extend_from_slice(&data_offset.to_le_bytes());
    }
    tiff.extend_from_slice(&0u32.to_le_bytes());

    if value.len() > 4 {
        tiff.extend_from_slice(value);
    }
    tiff
}

/// Wrap a TIFF structure in a JPEG APP1 segment
fn jpeg_with_tiff(tiff: &[u8]) -> Vec<u8> {
    let segment_len = (2 + 6 + tiff.len()) as u16;

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

fn ascii(value: &str) -> Vec<u8> {
    let mut bytes = value.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

/// JPEG bytes whose `DateTimeOriginal` is `value`
pub fn jpeg_with_capture_time(value: &str) -> Vec<u8> {
    jpeg_with_tiff(&tiff_with_exif_ascii(TAG_DATE_TIME_ORIGINAL, &ascii(value)))
}

pub fn write_jpeg_with_capture_time(path: &Path, value: &str) {
    fs::write(path, jpeg_with_capture_time(value)).unwrap();
}

/// EXIF present, but only `DateTimeDigitized` is set
pub fn write_jpeg_without_capture_time(path: &Path) {
    let tiff = tiff_with_exif_ascii(TAG_DATE_TIME_DIGITIZED, &ascii("2023:06:15 10:30:00"));
    fs::write(path, jpeg_with_tiff(&tiff)).unwrap();
}

/// `DateTimeOriginal` present with an empty string
pub fn write_jpeg_with_empty_capture_time(path: &Path) {
    let tiff = tiff_with_exif_ascii(TAG_DATE_TIME_ORIGINAL, b"\0");
    fs::write(path, jpeg_with_tiff(&tiff)).unwrap();
}

/// A JPEG without any APP1 segment
pub fn write_jpeg_without_exif(path: &Path) {
    fs::write(path, [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
}
