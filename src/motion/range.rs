use super::MotionError;

/// Piecewise-linear map from an ordered list of input breakpoints to a
/// parallel list of outputs. Inputs outside the first/last breakpoint clamp
/// to the boundary output.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMapper {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl RangeMapper {
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(MotionError::TooFewBreakpoints(inputs.len()));
        }
        let ordered = inputs.iter().all(|x| x.is_finite())
            && inputs.windows(2).all(|pair| pair[0] < pair[1]);
        if !ordered {
            return Err(MotionError::UnorderedBreakpoints);
        }
        Ok(Self { inputs, outputs })
    }

    /// Two-point map, the common case (`[0, 1] -> [40, 0]`).
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Result<Self, MotionError> {
        Self::new(vec![domain.0, domain.1], vec![range.0, range.1])
    }

    pub fn map(&self, x: f64) -> f64 {
        interpolate_unchecked(x, &self.inputs, &self.outputs)
    }
}

fn interpolate_unchecked(x: f64, inputs: &[f64], outputs: &[f64]) -> f64 {
    let last = inputs.len() - 1;
    if x.is_nan() || x <= inputs[0] {
        return outputs[0];
    }
    if x >= inputs[last] {
        return outputs[last];
    }
    // first breakpoint strictly above x; x > inputs[0] so idx >= 1
    let idx = inputs.partition_point(|b| *b <= x);
    let (x0, x1) = (inputs[idx - 1], inputs[idx]);
    let (y0, y1) = (outputs[idx - 1], outputs[idx]);
    let t = (x - x0) / (x1 - x0);
    y0 + (y1 - y0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_mapper() -> RangeMapper {
        RangeMapper::linear((0.0, 1.0), (40.0, 0.0)).unwrap()
    }

    #[test]
    fn maps_endpoints_and_midpoint() {
        let m = offset_mapper();
        assert_eq!(m.map(0.0), 40.0);
        assert_eq!(m.map(1.0), 0.0);
        assert!((m.map(0.5) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_outside_domain() {
        let m = offset_mapper();
        assert_eq!(m.map(-1.0), 40.0);
        assert_eq!(m.map(2.0), 0.0);
    }

    #[test]
    fn multi_segment_interpolation() {
        let m = RangeMapper::new(vec![0.0, 0.5, 1.0], vec![0.0, 1.0, 0.0]).unwrap();
        assert!((m.map(0.25) - 0.5).abs() < 1e-9);
        assert!((m.map(0.5) - 1.0).abs() < 1e-9);
        assert!((m.map(0.75) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn nan_input_maps_to_first_output() {
        assert_eq!(offset_mapper().map(f64::NAN), 40.0);
    }

    #[test]
    fn rejects_bad_breakpoints() {
        assert_eq!(
            RangeMapper::new(vec![0.0], vec![1.0]),
            Err(MotionError::TooFewBreakpoints(1))
        );
        assert_eq!(
            RangeMapper::new(vec![0.0, 1.0], vec![1.0]),
            Err(MotionError::LengthMismatch { inputs: 2, outputs: 1 })
        );
        assert_eq!(
            RangeMapper::new(vec![1.0, 1.0], vec![0.0, 1.0]),
            Err(MotionError::UnorderedBreakpoints)
        );
    }
}
