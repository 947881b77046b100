pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Frame filled with one packed colour.
pub fn uniform(width: usize, height: usize, color: u32) -> Vec<u32> {
    vec![color; width * height]
}

/// Left `split` columns `left`, the rest `right`.
pub fn vertical_split(width: usize, height: usize, split: usize, left: u32, right: u32) -> Vec<u32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    (0..width * height)
        .map(|i| if i % width < split { left } else { right })
        .collect()
}

/// High-contrast checkerboard with square cells.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> Vec<u32> {
    assert!(cell > 0, "cell size must be positive");
    let mut img = vec![0u32; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { 0xFF20_2020 } else { 0xFFDC_DCDC };
        }
    }
    img
}

/// Deterministic pseudo-random opaque pixels (xorshift32).
pub fn noise(width: usize, height: usize, seed: u32) -> Vec<u32> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state | 0xFF00_0000
        })
        .collect()
}
