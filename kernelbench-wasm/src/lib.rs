//! WebAssembly bindings for the kernelbench kernels
//!
//! A browser page calls the accelerated kernels directly through the
//! `calculate_primes` .. `process_text` exports, or asks [`run_kernel`] for a
//! timed measurement of either variant. Timing inside wasm uses
//! `performance.now()`.
//!
//! The `apply_*` and `generate_mandelbrot` exports work on canvas
//! `ImageData` bytes (RGBA, row-major).

use kernelbench_accelerated::{Accelerated, image};
use kernelbench_core::{BenchmarkKind, Clock, Kernels, ParseError, Variant};
use kernelbench_runner::{Measurement, entry, run_with, speedup_ratio};
use wasm_bindgen::prelude::*;

mod clock;

pub use clock::host_clock;

// Import the `console.log` function from the `console` module
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(not(target_arch = "wasm32"))]
fn log(s: &str) {
    tracing::debug!("{}", s);
}

// `println!`-style logging to the browser console
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_log!("kernelbench module loaded");
}

/// Grayscale by integer luminance; alpha untouched
#[wasm_bindgen]
pub fn apply_grayscale(mut image_data: Vec<u8>) -> Vec<u8> {
    image::grayscale(&mut image_data);
    image_data
}

/// Invert R, G and B; alpha untouched
#[wasm_bindgen]
pub fn apply_invert(mut image_data: Vec<u8>) -> Vec<u8> {
    image::invert(&mut image_data);
    image_data
}

/// Separable Gaussian blur, `sigma = radius / 3`
#[wasm_bindgen]
pub fn apply_blur(
    mut image_data: Vec<u8>,
    width: u32,
    height: u32,
    radius: u32,
) -> Result<Vec<u8>, JsError> {
    image::blur(&mut image_data, width, height, radius)?;
    Ok(image_data)
}

/// Sobel edge magnitude; border pixels come back transparent black
#[wasm_bindgen]
pub fn apply_edge_detection(
    image_data: Vec<u8>,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, JsError> {
    Ok(image::edge_detection(&image_data, width, height)?)
}

/// Fresh `width` x `height` RGBA rendering of the Mandelbrot set
#[wasm_bindgen]
pub fn generate_mandelbrot(width: u32, height: u32, max_iterations: u32) -> Vec<u8> {
    console_log!("mandelbrot {}x{}, {} iterations", width, height, max_iterations);
    image::mandelbrot(width, height, max_iterations)
}

/// 5x5 unsharp mask at `strength` percent
#[wasm_bindgen]
pub fn apply_sharpen(
    image_data: Vec<u8>,
    width: u32,
    height: u32,
    strength: u32,
) -> Result<Vec<u8>, JsError> {
    Ok(image::sharpen(&image_data, width, height, strength)?)
}

/// Primes up to `limit`
#[wasm_bindgen]
pub fn calculate_primes(limit: u32) -> Vec<u32> {
    Accelerated.primes(limit)
}

/// Row-major product of the generated `size` x `size` matrices
#[wasm_bindgen]
pub fn matrix_multiply(size: u32) -> Vec<f64> {
    Accelerated.matrix(size)
}

/// First `count` Fibonacci numbers as decimal strings
///
/// Terms past F(78) are not exactly representable as JS numbers.
#[wasm_bindgen]
pub fn fibonacci_sequence(count: u32) -> Vec<String> {
    Accelerated
        .fibonacci(count)
        .iter()
        .map(|n| n.to_string())
        .collect()
}

/// Hash accumulator after `iterations` mixing rounds
#[wasm_bindgen]
pub fn compute_hashes(iterations: u32) -> u32 {
    Accelerated.hash(iterations)
}

/// Monte Carlo estimate of π from `samples` points
#[wasm_bindgen]
pub fn estimate_pi(samples: u32) -> f64 {
    Accelerated.pi(samples)
}

/// `count` generated integers in ascending order
#[wasm_bindgen]
pub fn sort_array(count: u32) -> Vec<i32> {
    Accelerated.sort(count)
}

/// First 100 characters of `iterations` case-inverted phrases
#[wasm_bindgen]
pub fn process_text(iterations: u32) -> String {
    Accelerated.text(iterations)
}

/// Timed kernel run handed back to JavaScript
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone, PartialEq)]
pub struct WasmMeasurement {
    pub kind: String,
    pub variant: String,
    pub elapsed_ms: f64,
    pub summary: String,
}

impl From<Measurement> for WasmMeasurement {
    fn from(m: Measurement) -> Self {
        Self {
            kind: m.kind.name().to_string(),
            variant: m.variant.name().to_string(),
            elapsed_ms: m.elapsed_ms,
            summary: m.summary,
        }
    }
}

/// Run `kind` on `variant` at its fixed workload
///
/// Both names are parsed case-insensitively; "js" and "wasm" are accepted
/// as variant aliases.
#[wasm_bindgen]
pub fn run_kernel(kind: &str, variant: &str) -> Result<WasmMeasurement, JsError> {
    let clock = host_clock();
    let measurement = measure(kind, variant, &*clock)?;
    console_log!(
        "{} ({}): {:.2} ms",
        measurement.kind,
        measurement.variant,
        measurement.elapsed_ms
    );
    Ok(measurement.into())
}

fn measure(kind: &str, variant: &str, clock: &dyn Clock) -> Result<Measurement, ParseError> {
    let kind: BenchmarkKind = kind.parse()?;
    let variant: Variant = variant.parse()?;
    Ok(run_with(kind, variant, entry(kind).workload, clock))
}

/// Reference time divided by accelerated time, 2 decimal places
///
/// `undefined` when the ratio is not meaningful (zero or invalid times).
#[wasm_bindgen]
pub fn speedup(reference_ms: f64, accelerated_ms: f64) -> Option<f64> {
    speedup_ratio(reference_ms, accelerated_ms).ratio()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelbench_core::MonotonicClock;

    #[test]
    fn test_fibonacci_strings() {
        let seq = fibonacci_sequence(100);
        assert_eq!(seq.len(), 100);
        assert_eq!(seq[10], "55");
        assert_eq!(seq[99], "218922995834555169026");
    }

    #[test]
    fn test_direct_exports() {
        assert_eq!(calculate_primes(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(compute_hashes(1), 0x53d4_4bfd);
        assert_eq!(estimate_pi(1000), 3.128);
        assert_eq!(sort_array(5), vec![401, 5912, 8454, 9383, 9675]);
        assert_eq!(process_text(1), "tHE QUICK BROWN FOX JUMPS OVER THE LAZY DOG");
        assert_eq!(matrix_multiply(2), vec![0.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_measure_parses_names() {
        let clock = MonotonicClock::new();
        let m = measure("Hash", "wasm", &clock).unwrap();
        assert_eq!(m.kind, BenchmarkKind::Hash);
        assert_eq!(m.variant, Variant::Accelerated);
        assert_eq!(m.summary, "Hash: 0xe1a36b17");

        let js: WasmMeasurement = m.into();
        assert_eq!(js.kind, "hash");
        assert_eq!(js.variant, "accelerated");

        assert_eq!(
            measure("fft", "wasm", &clock),
            Err(ParseError::UnknownKind("fft".to_string()))
        );
        assert!(measure("pi", "gpu", &clock).is_err());
    }

    #[test]
    fn test_point_filters() {
        assert_eq!(apply_grayscale(vec![100, 150, 200, 9]), vec![140, 140, 140, 9]);
        assert_eq!(apply_invert(vec![0, 10, 255, 9]), vec![255, 245, 0, 9]);
    }

    #[test]
    fn test_mandelbrot_buffer() {
        let img = generate_mandelbrot(8, 4, 30);
        assert_eq!(img.len(), 8 * 4 * 4);
        assert!(img.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(50.0, 20.0), Some(2.5));
        assert_eq!(speedup(50.0, 0.0), None);
        assert_eq!(speedup(f64::NAN, 1.0), None);
    }
}
