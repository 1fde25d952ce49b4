use std::f64::consts::E;

pub fn logistic(x: f64, midpoint_offset: f64, multiplier: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(multiplier * (midpoint_offset - x)))
}

/// Hyperbolic-tangent shaped curve centered at `center`.
///
/// Yields `middle + height / 2` far below the center and `middle - height / 2`
/// far above it.
pub fn sigmoid(value: f64, center: f64, width: f64, middle: f64, height: f64) -> f64 {
    f64::tanh(E * -(value - center) / width) * (height / 2.0) + middle
}

pub fn smoothstep(x: f64, start: f64, end: f64) -> f64 {
    let x = reverse_lerp(x, start, end);

    x * x * (3.0 - 2.0 * x)
}

pub fn reverse_lerp(x: f64, start: f64, end: f64) -> f64 {
    f64::clamp((x - start) / (end - start), 0.0, 1.0)
}

pub const fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Maps a 0-10 difficulty setting onto a range where 5 is `mid`.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid + (mid - min) * (difficulty - 5.0) / 5.0
    } else {
        mid
    }
}

/// `sin²(π/2 · x)` for `x` in `[0, 1]`.
pub fn sin_squared_ramp(x: f64) -> f64 {
    f64::powf(f64::sin(std::f64::consts::FRAC_PI_2 * x), 2.0)
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn difficulty_range_preempt() {
        assert!(difficulty_range(5.0, 1800.0, 1200.0, 450.0).eq(1200.0));
        assert!(difficulty_range(10.0, 1800.0, 1200.0, 450.0).eq(450.0));
        assert!(difficulty_range(0.0, 1800.0, 1200.0, 450.0).eq(1800.0));
    }

    #[test]
    fn sigmoid_bounds() {
        assert!(sigmoid(2.0, 2.0, 2.0, 0.5, 1.0).eq(0.5));
        assert!(sigmoid(-100.0, 2.0, 2.0, 0.5, 1.0) > 0.999);
        assert!(sigmoid(100.0, 2.0, 2.0, 0.5, 1.0) < 0.001);
    }

    #[test]
    fn smoothstep_clamps() {
        assert!(smoothstep(-5.0, 0.0, 10.0).eq(0.0));
        assert!(smoothstep(15.0, 0.0, 10.0).eq(1.0));
        assert!(smoothstep(5.0, 0.0, 10.0).eq(0.5));
    }
}
