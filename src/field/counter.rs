use crate::domain::Color;

/// Props handed to the counter renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterProps {
    pub base_color: Color,
    pub error_color: Color,
    pub count: usize,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub errored: bool,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterDisplay {
    pub text: String,
    pub color: Color,
}

impl CounterProps {
    pub fn display(&self) -> Option<CounterDisplay> {
        counter_display(
            self.count,
            self.min,
            self.max,
            self.errored,
            self.base_color,
            self.error_color,
        )
    }
}

/// Counter text and color, or `None` when neither bound is configured.
pub fn counter_display(
    count: usize,
    min: Option<usize>,
    max: Option<usize>,
    errored: bool,
    base_color: Color,
    error_color: Color,
) -> Option<CounterDisplay> {
    let limit = max.or(min)?;
    let below = min.is_some_and(|min| count < min);
    let above = max.is_some_and(|max| count > max);
    let color = if errored && (below || above) {
        error_color
    } else {
        base_color
    };
    Some(CounterDisplay {
        text: format!("{count} / {limit}"),
        color,
    })
}
