pub mod raw;

/// Complex sample pair (real, imaginary)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexSample {
    pub re: f32,
    pub im: f32,
}

impl ComplexSample {
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// Group interleaved values into (real, imaginary) pairs.
/// A trailing unpaired value is dropped.
pub fn pair_up(values: &[f32]) -> Vec<ComplexSample> {
    values
        .chunks_exact(2)
        .map(|pair| ComplexSample::new(pair[0], pair[1]))
        .collect()
}
