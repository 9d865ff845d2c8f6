/// Types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Piecewise-linear map of an animation position over the fixed input range
/// `[-1, 0, 1]`. Positions outside the range are clamped.
pub fn interpolate<T: Lerp + Clone>(position: f32, outputs: [T; 3]) -> T {
    let [errored, rest, active] = outputs;
    let position = if position.is_nan() {
        0.0
    } else {
        position.clamp(-1.0, 1.0)
    };
    if position <= -1.0 {
        errored
    } else if position >= 1.0 {
        active
    } else if position < 0.0 {
        rest.lerp(&errored, -position)
    } else if position > 0.0 {
        rest.lerp(&active, position)
    } else {
        rest
    }
}
