//! RGBA Image Filters
//!
//! Canvas-style pixel buffers: tightly packed RGBA, four bytes per pixel,
//! rows top to bottom. Point filters (`grayscale`, `invert`) take any buffer
//! and leave a trailing partial pixel alone. Neighbourhood filters need the
//! dimensions and reject a buffer whose length does not match them.
//!
//! Alpha is never modified by a filter. The convolution filters
//! (`edge_detection`, `sharpen`) only write pixels whose whole kernel fits
//! inside the image; border pixels of their output stay transparent black.

use thiserror::Error;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SHARPEN_KERNEL: [[i64; 5]; 5] = [
    [-1, -1, -1, -1, -1],
    [-1, 2, 2, 2, -1],
    [-1, 2, 8, 2, -1],
    [-1, 2, 2, 2, -1],
    [-1, -1, -1, -1, -1],
];
const SHARPEN_KERNEL_SUM: i64 = 8;

/// Complex-plane window rendered by [`mandelbrot`]
const MANDELBROT_X: (f64, f64) = (-2.5, 1.0);
const MANDELBROT_Y: (f64, f64) = (-1.0, 1.0);

/// Pixel buffer does not match the stated dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("buffer holds {actual} bytes, a {width}x{height} RGBA image needs {expected}")]
pub struct ImageError {
    /// Stated width in pixels
    pub width: u32,
    /// Stated height in pixels
    pub height: u32,
    /// `width * height * 4`
    pub expected: u64,
    /// Bytes actually supplied
    pub actual: usize,
}

fn check_dimensions(
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(usize, usize), ImageError> {
    let expected = u64::from(width) * u64::from(height) * BYTES_PER_PIXEL as u64;
    if pixels.len() as u64 != expected {
        return Err(ImageError {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    Ok((width as usize, height as usize))
}

/// Integer luminance `(299 R + 587 G + 114 B) / 1000`
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
}

/// Replace R, G and B of every pixel with its luminance
pub fn grayscale(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        let gray = luminance(px[0], px[1], px[2]);
        px[..3].fill(gray);
    }
}

/// Replace R, G and B of every pixel with `255 - value`
pub fn invert(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        for channel in &mut px[..3] {
            *channel = 255 - *channel;
        }
    }
}

/// Separable Gaussian blur with `sigma = radius / 3`, clamping at the edges
///
/// A radius of 0 leaves the image unchanged.
pub fn blur(pixels: &mut [u8], width: u32, height: u32, radius: u32) -> Result<(), ImageError> {
    let (w, h) = check_dimensions(pixels, width, height)?;
    if radius == 0 || pixels.is_empty() {
        return Ok(());
    }

    let radius = i64::from(radius);
    let sigma = radius as f32 / 3.0;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let weights: Vec<f32> = (-radius..=radius)
        .map(|d| (-((d * d) as f32) / two_sigma_sq).exp())
        .collect();

    let mut horizontal = pixels.to_vec();
    for y in 0..h {
        for x in 0..w {
            let neighbour = |d: i64| (y * w + clamp_index(x, d, w)) * BYTES_PER_PIXEL;
            let out = (y * w + x) * BYTES_PER_PIXEL;
            convolve_rgb(pixels, &mut horizontal[out..out + 3], &weights, radius, neighbour);
        }
    }

    for y in 0..h {
        for x in 0..w {
            let neighbour = |d: i64| (clamp_index(y, d, h) * w + x) * BYTES_PER_PIXEL;
            let out = (y * w + x) * BYTES_PER_PIXEL;
            convolve_rgb(&horizontal, &mut pixels[out..out + 3], &weights, radius, neighbour);
        }
    }

    Ok(())
}

#[inline]
fn clamp_index(pos: usize, offset: i64, len: usize) -> usize {
    (pos as i64 + offset).clamp(0, len as i64 - 1) as usize
}

/// Weighted average of R, G and B over one blur line
#[inline]
fn convolve_rgb(
    src: &[u8],
    out: &mut [u8],
    weights: &[f32],
    radius: i64,
    neighbour: impl Fn(i64) -> usize,
) {
    let mut sums = [0.0f32; 3];
    let mut weight_sum = 0.0f32;

    for (d, &weight) in (-radius..=radius).zip(weights) {
        let idx = neighbour(d);
        for (sum, &value) in sums.iter_mut().zip(&src[idx..idx + 3]) {
            *sum += f32::from(value) * weight;
        }
        weight_sum += weight;
    }

    for (channel, sum) in out.iter_mut().zip(sums) {
        *channel = (sum / weight_sum) as u8;
    }
}

/// Sobel gradient magnitude of the luminance, clamped to 255
///
/// Interior pixels get the magnitude in R, G and B and keep their alpha.
pub fn edge_detection(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    let (w, h) = check_dimensions(pixels, width, height)?;
    let mut result = vec![0u8; pixels.len()];

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let idx = ((y + ky - 1) * w + (x + kx - 1)) * BYTES_PER_PIXEL;
                    let gray = f32::from(pixels[idx]) * 0.299
                        + f32::from(pixels[idx + 1]) * 0.587
                        + f32::from(pixels[idx + 2]) * 0.114;
                    gx += gray * SOBEL_X[ky][kx];
                    gy += gray * SOBEL_Y[ky][kx];
                }
            }

            let magnitude = (gx * gx + gy * gy).sqrt().min(255.0) as u8;
            let idx = (y * w + x) * BYTES_PER_PIXEL;
            result[idx..idx + 3].fill(magnitude);
            result[idx + 3] = pixels[idx + 3];
        }
    }

    Ok(result)
}

/// 5x5 unsharp mask; `strength` is a percentage of the mask response
///
/// Each interior channel becomes `orig + mask * strength / 800`, clamped to
/// `0..=255`.
pub fn sharpen(
    pixels: &[u8],
    width: u32,
    height: u32,
    strength: u32,
) -> Result<Vec<u8>, ImageError> {
    let (w, h) = check_dimensions(pixels, width, height)?;
    let strength = i64::from(strength);
    let mut result = vec![0u8; pixels.len()];

    for y in 2..h.saturating_sub(2) {
        for x in 2..w.saturating_sub(2) {
            let mut sums = [0i64; 3];

            for (ky, row) in SHARPEN_KERNEL.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    let idx = ((y + ky - 2) * w + (x + kx - 2)) * BYTES_PER_PIXEL;
                    for (sum, &value) in sums.iter_mut().zip(&pixels[idx..idx + 3]) {
                        *sum += i64::from(value) * k;
                    }
                }
            }

            let idx = (y * w + x) * BYTES_PER_PIXEL;
            for (c, sum) in sums.into_iter().enumerate() {
                let orig = i64::from(pixels[idx + c]);
                let value = orig + (sum * strength) / (SHARPEN_KERNEL_SUM * 100);
                result[idx + c] = value.clamp(0, 255) as u8;
            }
            result[idx + 3] = pixels[idx + 3];
        }
    }

    Ok(result)
}

/// Escape-time rendering of the Mandelbrot set over `[-2.5, 1] x [-1, 1]`
///
/// Points that do not escape within `max_iterations` are black. Escaping
/// points fade from red to blue with the escape ratio. Every pixel is opaque.
pub fn mandelbrot(width: u32, height: u32, max_iterations: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut result = vec![0u8; w * h * BYTES_PER_PIXEL];

    let x_scale = (MANDELBROT_X.1 - MANDELBROT_X.0) / w as f64;
    let y_scale = (MANDELBROT_Y.1 - MANDELBROT_Y.0) / h as f64;

    for py in 0..h {
        for px in 0..w {
            let x0 = MANDELBROT_X.0 + px as f64 * x_scale;
            let y0 = MANDELBROT_Y.0 + py as f64 * y_scale;

            let (mut x, mut y) = (0.0f64, 0.0f64);
            let mut iteration = 0;
            while x * x + y * y <= 4.0 && iteration < max_iterations {
                let x_next = x * x - y * y + x0;
                y = 2.0 * x * y + y0;
                x = x_next;
                iteration += 1;
            }

            let idx = (py * w + px) * BYTES_PER_PIXEL;
            if iteration < max_iterations {
                let ratio = iteration as f32 / max_iterations as f32;
                result[idx] = (255.0 * (1.0 - ratio)) as u8;
                result[idx + 1] = (255.0 * ratio.sqrt()) as u8;
                result[idx + 2] = (255.0 * ratio) as u8;
            }
            result[idx + 3] = 255;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat((width * height) as usize)
    }

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) as usize) * BYTES_PER_PIXEL;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn test_luminance_formula() {
        // (100*299 + 150*587 + 200*114) / 1000 = 140.75
        assert_eq!(luminance(100, 150, 200), 140);
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 149);
        assert_eq!(luminance(0, 0, 255), 29);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_grayscale_keeps_alpha_and_partial_pixel() {
        let mut buf = vec![100, 150, 200, 17, 255, 0, 0, 0, 9, 9];
        grayscale(&mut buf);
        assert_eq!(buf, vec![140, 140, 140, 17, 76, 76, 76, 0, 9, 9]);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let original = vec![0, 128, 255, 42, 1, 2, 3, 4];
        let mut buf = original.clone();
        invert(&mut buf);
        assert_eq!(buf, vec![255, 127, 0, 42, 254, 253, 252, 4]);
        invert(&mut buf);
        assert_eq!(buf, original);
    }

    #[test]
    fn test_blur_spreads_symmetrically() {
        let mut buf = solid(5, 1, [0, 0, 0, 200]);
        buf[8..11].copy_from_slice(&[255, 255, 255]);

        blur(&mut buf, 5, 1, 1).unwrap();
        let left = pixel(&buf, 5, 1, 0);
        let right = pixel(&buf, 5, 3, 0);
        assert_eq!(left, right);
        assert!(left[0] > 0);
        assert!(pixel(&buf, 5, 2, 0)[0] < 255);
        // Beyond the radius nothing changes
        assert_eq!(pixel(&buf, 5, 0, 0), [0, 0, 0, 200]);
        assert!(buf.chunks_exact(4).all(|px| px[3] == 200));
    }

    #[test]
    fn test_blur_clamps_at_borders() {
        let mut buf = solid(3, 3, [0, 0, 0, 255]);
        blur(&mut buf, 3, 3, 4).unwrap();
        assert_eq!(buf, solid(3, 3, [0, 0, 0, 255]));
    }

    #[test]
    fn test_blur_zero_radius_is_identity() {
        let original: Vec<u8> = (0..36).collect();
        let mut buf = original.clone();
        blur(&mut buf, 3, 3, 0).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let mut buf = vec![0u8; 15];
        assert_eq!(
            blur(&mut buf, 2, 2, 1),
            Err(ImageError {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15,
            })
        );
        assert!(edge_detection(&buf, 2, 2).is_err());
        assert!(sharpen(&buf, 2, 2, 50).is_err());
    }

    #[test]
    fn test_edge_detection_step() {
        // Two black columns, two white columns
        let mut buf = solid(4, 3, [0, 0, 0, 77]);
        for y in 0..3 {
            for x in 2..4 {
                let i = (y * 4 + x) * BYTES_PER_PIXEL;
                buf[i..i + 3].fill(255);
            }
        }

        let out = edge_detection(&buf, 4, 3).unwrap();
        assert_eq!(pixel(&out, 4, 1, 1), [255, 255, 255, 77]);
        assert_eq!(pixel(&out, 4, 2, 1), [255, 255, 255, 77]);
        // Border pixels are never written
        for (x, y) in [(0, 0), (3, 0), (0, 1), (3, 1), (1, 2)] {
            assert_eq!(pixel(&out, 4, x, y), [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_edge_detection_flat_and_tiny() {
        let out = edge_detection(&solid(3, 3, [90, 90, 90, 255]), 3, 3).unwrap();
        assert_eq!(pixel(&out, 3, 1, 1), [0, 0, 0, 255]);

        assert_eq!(edge_detection(&solid(2, 2, [1, 2, 3, 4]), 2, 2).unwrap(), vec![0; 16]);
        assert!(edge_detection(&[], 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_sharpen_uniform_interior() {
        // Mask sums to 8, so a flat region gains value * strength / 100
        let out = sharpen(&solid(5, 5, [100, 100, 100, 200]), 5, 5, 50).unwrap();
        assert_eq!(pixel(&out, 5, 2, 2), [150, 150, 150, 200]);
        assert_eq!(pixel(&out, 5, 0, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(&out, 5, 1, 2), [0, 0, 0, 0]);

        let out = sharpen(&solid(5, 5, [200, 200, 200, 255]), 5, 5, 100).unwrap();
        assert_eq!(pixel(&out, 5, 2, 2), [255, 255, 255, 255]);
    }

    #[test]
    fn test_sharpen_small_image() {
        assert_eq!(sharpen(&solid(4, 4, [9; 4]), 4, 4, 100).unwrap(), vec![0; 64]);
    }

    #[test]
    fn test_mandelbrot_colors() {
        // 7x2 puts pixel (5, 1) on c = 0, inside the set
        let img = mandelbrot(7, 2, 50);
        assert_eq!(img.len(), 7 * 2 * 4);
        assert!(img.chunks_exact(4).all(|px| px[3] == 255));
        assert_eq!(pixel(&img, 7, 5, 1), [0, 0, 0, 255]);

        // c = -2.5 - i escapes after one step: ratio 0.02
        assert_eq!(pixel(&img, 7, 0, 0), [249, 36, 5, 255]);
    }

    #[test]
    fn test_mandelbrot_degenerate() {
        assert!(mandelbrot(0, 10, 100).is_empty());
        assert!(mandelbrot(3, 3, 0).chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }
}
