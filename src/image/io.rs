//! I/O helpers for the command-line tool.
//!
//! - `load_packed_frame`: read a PNG/JPEG into packed ARGB pixels.
//! - `save_grayscale_u8`: write an 8-bit gray image (e.g. an edge map) to PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use crate::color::pack_argb;
use image::GrayImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned frame of packed `0xAARRGGBB` pixels, as a host would hand them over.
#[derive(Clone, Debug)]
pub struct PackedFrame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

/// Load an image from disk and pack every pixel as ARGB.
pub fn load_packed_frame(path: &Path) -> Result<PackedFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            pack_argb(r, g, b, a)
        })
        .collect();
    Ok(PackedFrame {
        width,
        height,
        pixels,
    })
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_bytes().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("frame_edges_io_{name}_{}", std::process::id()))
    }

    #[test]
    fn png_round_trip_packs_argb() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("gray.png");
        let gray = GrayImageU8::new(3, 2, vec![0, 255, 0, 255, 0, 128]).unwrap();
        save_grayscale_u8(&gray, &path).unwrap();

        let frame = load_packed_frame(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.pixels[0], 0xFF00_0000);
        assert_eq!(frame.pixels[1], 0xFFFF_FFFF);
        assert_eq!(frame.pixels[5], 0xFF80_8080);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn json_is_written() {
        let dir = scratch_dir("json");
        let path = dir.join("report.json");
        write_json_file(&path, &serde_json::json!({"edgePixels": 3})).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"edgePixels\": 3"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_input_reports_path() {
        let err = load_packed_frame(Path::new("/nonexistent/frame.png")).unwrap_err();
        assert!(err.contains("/nonexistent/frame.png"));
    }
}
