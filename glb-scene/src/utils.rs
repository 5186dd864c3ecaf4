//! Packing helpers and the GLB container writer

use crate::error::SceneError;
use gltf_json as json;
use std::io::Write;

/// Chunk type tag for the JSON chunk ("JSON", little-endian)
const CHUNK_JSON: u32 = 0x4E4F534A;
/// Chunk type tag for the binary chunk ("BIN\0", little-endian)
const CHUNK_BIN: u32 = 0x004E4942;

/// Compute the axis-aligned bounding box of a position stream
pub fn compute_bounds(positions: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min, max)
}

/// Align buffer to 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }
}

/// Write a GLB container: 12-byte header, JSON chunk, binary chunk.
///
/// The JSON chunk is padded to 4 bytes with spaces, the binary chunk with
/// zeros, as the container format requires. All integers are little-endian.
pub fn write_glb<W: Write>(w: &mut W, root: &json::Root, bin: &[u8]) -> Result<(), SceneError> {
    let json_string =
        json::serialize::to_string(root).map_err(|err| SceneError::Serialize(err.to_string()))?;
    let json_bytes = json_string.as_bytes();

    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let json_chunk_length = json_bytes.len() + json_padding;

    let bin_padding = (4 - (bin.len() % 4)) % 4;
    let bin_chunk_length = bin.len() + bin_padding;

    let total_length = 12 + 8 + json_chunk_length + 8 + bin_chunk_length;

    // Header
    w.write_all(b"glTF")?;
    w.write_all(&2u32.to_le_bytes())?;
    w.write_all(&(total_length as u32).to_le_bytes())?;

    // JSON chunk
    w.write_all(&(json_chunk_length as u32).to_le_bytes())?;
    w.write_all(&CHUNK_JSON.to_le_bytes())?;
    w.write_all(json_bytes)?;
    for _ in 0..json_padding {
        w.write_all(&[0x20])?;
    }

    // Binary chunk
    w.write_all(&(bin_chunk_length as u32).to_le_bytes())?;
    w.write_all(&CHUNK_BIN.to_le_bytes())?;
    w.write_all(bin)?;
    for _ in 0..bin_padding {
        w.write_all(&[0])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_root() -> json::Root {
        json::Root {
            asset: json::Asset {
                version: "2.0".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_compute_bounds() {
        let positions = [[1.0, -2.0, 0.5], [-3.0, 4.0, 0.0], [2.0, 0.0, -1.5]];
        let (min, max) = compute_bounds(&positions);
        assert_eq!(min, [-3.0, -2.0, -1.5]);
        assert_eq!(max, [2.0, 4.0, 0.5]);
    }

    #[test]
    fn test_align_buffer() {
        let mut buffer = vec![7u8; 5];
        align_buffer(&mut buffer);
        assert_eq!(buffer.len(), 8);
        assert_eq!(&buffer[5..], &[0, 0, 0]);

        let mut aligned = vec![7u8; 8];
        align_buffer(&mut aligned);
        assert_eq!(aligned.len(), 8);
    }

    #[test]
    fn test_write_glb_framing() {
        let mut out = Vec::new();
        let bin = [1u8, 2, 3]; // forces one byte of zero padding
        write_glb(&mut out, &empty_root(), &bin).unwrap();

        assert_eq!(&out[0..4], b"glTF");
        assert_eq!(u32::from_le_bytes(out[4..8].try_into().unwrap()), 2);
        let total = u32::from_le_bytes(out[8..12].try_into().unwrap());
        assert_eq!(total as usize, out.len());
        assert_eq!(out.len() % 4, 0);

        let json_len = u32::from_le_bytes(out[12..16].try_into().unwrap()) as usize;
        assert_eq!(json_len % 4, 0);
        assert_eq!(&out[16..20], b"JSON");

        let bin_chunk = 20 + json_len;
        let bin_len = u32::from_le_bytes(out[bin_chunk..bin_chunk + 4].try_into().unwrap());
        assert_eq!(bin_len, 4);
        assert_eq!(&out[bin_chunk + 4..bin_chunk + 8], b"BIN\0");
        assert_eq!(&out[bin_chunk + 8..], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_json_chunk_padded_with_spaces() {
        let mut out = Vec::new();
        write_glb(&mut out, &empty_root(), &[]).unwrap();

        let json_len = u32::from_le_bytes(out[12..16].try_into().unwrap()) as usize;
        let json_chunk = &out[20..20 + json_len];

        let mut end = json_chunk.len();
        while end > 0 && json_chunk[end - 1] == 0x20 {
            end -= 1;
        }
        assert!(json_chunk[..end].ends_with(b"}"));
        assert!(json_chunk.len() - end < 4);
    }
}
