// File: crates/wave-core/src/signal.rs
// Summary: Sample generation: evenly spaced sequences and elementwise sine.

use thiserror::Error;

/// Start of the sampled interval.
pub const X_START: f64 = 0.0;
/// End of the sampled interval.
pub const X_END: f64 = 10.0;
/// Number of samples across the interval.
pub const SAMPLES: usize = 100;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SignalError {
    #[error("sample count must be at least 2, got {n}")]
    InvalidCount { n: usize },
    #[error("interval bound `{name}` is not finite ({value})")]
    NonFiniteBound { name: &'static str, value: f64 },
}

/// Ordered sequence of `n` values linearly interpolated from `start` to
/// `end` inclusive, with uniform spacing `(end - start) / (n - 1)`.
/// The endpoint is written verbatim so `out[n - 1] == end` holds exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, SignalError> {
    if n < 2 {
        return Err(SignalError::InvalidCount { n });
    }
    if !start.is_finite() {
        return Err(SignalError::NonFiniteBound { name: "start", value: start });
    }
    if !end.is_finite() {
        return Err(SignalError::NonFiniteBound { name: "end", value: end });
    }
    let step = (end - start) / (n as f64 - 1.0);
    let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    out[n - 1] = end;
    Ok(out)
}

/// Elementwise sine (radians). Output length equals input length.
pub fn sine(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|x| x.sin()).collect()
}

/// A sampled waveform: parallel `x` and `y` sequences of equal length.
/// Immutable by convention once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Wave {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The fixed program configuration: 100 samples of sin(x) over [0, 10].
    pub fn standard() -> Result<Self, SignalError> {
        sine_wave(X_START, X_END, SAMPLES)
    }
}

/// Sample `sin` over `[start, end]` at `n` evenly spaced points.
pub fn sine_wave(start: f64, end: f64, n: usize) -> Result<Wave, SignalError> {
    let x = linspace(start, end, n)?;
    let y = sine(&x);
    Ok(Wave { x, y })
}
