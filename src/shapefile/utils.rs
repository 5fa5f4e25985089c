//! Low-level byte reading utilities
//!
//! Every read takes an optional remaining-length accumulator. When present,
//! the read is refused if it would run past the accumulator and, on success,
//! the accumulator is decremented by the bytes consumed.

use std::io::{ErrorKind, Read};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use super::types::error::{Result, ShapefileError};

/// Read exactly `N` bytes, charging them to `remaining` if given.
///
/// A short read is a hard failure: the format frames every field exactly,
/// so running out of input is never a clean end of stream here.
fn read_array<R: Read, const N: usize>(reader: &mut R, remaining: Option<&mut u64>) -> Result<[u8; N]> {
    if let Some(&left) = remaining.as_deref() {
        if (N as u64) > left {
            return Err(ShapefileError::RegionOverrun { requested: N, remaining: left });
        }
    }

    let mut buf = [0u8; N];
    let mut filled = 0;
    while filled < N {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    if filled != N {
        return Err(ShapefileError::ShortRead { requested: N, read: filled });
    }

    if let Some(left) = remaining {
        *left -= N as u64;
    }
    Ok(buf)
}

pub fn read_i16_be<R: Read>(reader: &mut R, remaining: Option<&mut u64>) -> Result<i16> {
    let buf = read_array::<_, 2>(reader, remaining)?;
    Ok(BigEndian::read_i16(&buf))
}

pub fn read_i32_le<R: Read>(reader: &mut R, remaining: Option<&mut u64>) -> Result<i32> {
    let buf = read_array::<_, 4>(reader, remaining)?;
    Ok(LittleEndian::read_i32(&buf))
}

pub fn read_i32_be<R: Read>(reader: &mut R, remaining: Option<&mut u64>) -> Result<i32> {
    let buf = read_array::<_, 4>(reader, remaining)?;
    Ok(BigEndian::read_i32(&buf))
}

pub fn read_f64_le<R: Read>(reader: &mut R, remaining: Option<&mut u64>) -> Result<f64> {
    let buf = read_array::<_, 8>(reader, remaining)?;
    Ok(LittleEndian::read_f64(&buf))
}

/// Read a 32-bit length stored as two big-endian 16-bit words, high word first.
///
/// Bit-for-bit the same value as a single 32-bit big-endian read.
pub fn read_i32_size_be<R: Read>(reader: &mut R, mut remaining: Option<&mut u64>) -> Result<i32> {
    let high = read_i16_be(reader, remaining.as_deref_mut())?;
    let low = read_i16_be(reader, remaining)?;
    Ok(combine_halves(high, low))
}

pub(crate) fn combine_halves(high: i16, low: i16) -> i32 {
    (((high as u16 as u32) << 16) | low as u16 as u32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn two_half_length_combines_high_then_low() {
        assert_eq!(combine_halves(0x0001, 0x0002), 0x0001_0002);

        let mut cursor = Cursor::new(vec![0x00, 0x01, 0x00, 0x02]);
        assert_eq!(read_i32_size_be(&mut cursor, None).unwrap(), 0x0001_0002);
    }

    #[test]
    fn two_half_length_matches_plain_big_endian_read() {
        let bytes = [0x80, 0x00, 0xFF, 0xFE];
        let halves = read_i32_size_be(&mut Cursor::new(bytes), None).unwrap();
        let whole = read_i32_be(&mut Cursor::new(bytes), None).unwrap();
        assert_eq!(halves, whole);
    }

    #[test]
    fn mixed_byte_orders() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x0000_270Ai32.to_be_bytes());
        bytes.extend_from_slice(&1000i32.to_le_bytes());
        bytes.extend_from_slice(&(-2.25f64).to_le_bytes());
        let mut cursor = Cursor::new(bytes);

        assert_eq!(read_i32_be(&mut cursor, None).unwrap(), 0x0000_270A);
        assert_eq!(read_i32_le(&mut cursor, None).unwrap(), 1000);
        assert_eq!(read_f64_le(&mut cursor, None).unwrap(), -2.25);
    }

    #[test]
    fn tracked_reads_decrement_remaining() {
        let mut cursor = Cursor::new(vec![0u8; 16]);
        let mut remaining = 16u64;

        read_i32_be(&mut cursor, Some(&mut remaining)).unwrap();
        assert_eq!(remaining, 12);
        read_f64_le(&mut cursor, Some(&mut remaining)).unwrap();
        assert_eq!(remaining, 4);
        read_i32_size_be(&mut cursor, Some(&mut remaining)).unwrap();
        assert_eq!(remaining, 0);
    }

    #[test]
    fn tracked_read_refuses_to_overrun_region() {
        let mut cursor = Cursor::new(vec![0u8; 16]);
        let mut remaining = 4u64;

        let err = read_f64_le(&mut cursor, Some(&mut remaining)).unwrap_err();
        assert!(matches!(err, ShapefileError::RegionOverrun { requested: 8, remaining: 4 }));
        assert_eq!(remaining, 4);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn short_read_is_an_error() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let err = read_i32_le(&mut cursor, None).unwrap_err();
        assert!(matches!(err, ShapefileError::ShortRead { requested: 4, read: 3 }));
        assert_eq!(err.to_string(), "Error reading 4 bytes: Only read 3");
    }
}
