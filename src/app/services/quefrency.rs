//! Quefrency-domain analysis over normalized power samples
//!
//! Downstream consumer of the capture parser: transforms the retained
//! power trace into a magnitude spectrum and a power cepstrum (the
//! quefrency view). Samples are zero-padded to the next power of two
//! before transforming.

use rustfft::{FftPlanner, num_complex::Complex};

use crate::app::models::SpectrumPoint;

/// Floor for log magnitudes, keeps log(0) out of the cepstrum
const LOG_EPSILON: f64 = 1e-12;

/// Magnitude spectrum of the power trace.
///
/// Returns the first half of the FFT bins (the input is real, so the
/// upper half mirrors the lower), magnitudes normalized by the padded
/// length. Empty input yields an empty spectrum.
pub fn power_spectrum(points: &[SpectrumPoint]) -> Vec<f64> {
    let mut buffer = padded_buffer(points);
    if buffer.is_empty() {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    let scale = 1.0 / buffer.len() as f64;
    buffer
        .iter()
        .take(buffer.len() / 2)
        .map(|bin| bin.norm() * scale)
        .collect()
}

/// Power cepstrum of the power trace: IFFT of the log magnitude
/// spectrum, squared. The x-axis of the result is quefrency.
pub fn power_cepstrum(points: &[SpectrumPoint]) -> Vec<f64> {
    let mut buffer = padded_buffer(points);
    if buffer.is_empty() {
        return Vec::new();
    }

    let len = buffer.len();
    let mut planner = FftPlanner::new();

    let forward = planner.plan_fft_forward(len);
    forward.process(&mut buffer);

    for bin in buffer.iter_mut() {
        *bin = Complex::new((bin.norm().max(LOG_EPSILON)).ln(), 0.0);
    }

    let inverse = planner.plan_fft_inverse(len);
    inverse.process(&mut buffer);

    let scale = 1.0 / len as f64;
    buffer
        .iter()
        .take(len / 2)
        .map(|bin| {
            let v = bin.re * scale;
            v * v
        })
        .collect()
}

/// Copy power samples into a complex buffer zero-padded to a power of two
fn padded_buffer(points: &[SpectrumPoint]) -> Vec<Complex<f64>> {
    if points.is_empty() {
        return Vec::new();
    }

    let padded_len = points.len().next_power_of_two();
    let mut buffer = Vec::with_capacity(padded_len);
    buffer.extend(points.iter().map(|p| Complex::new(p.power, 0.0)));
    buffer.resize(padded_len, Complex::new(0.0, 0.0));
    buffer
}
