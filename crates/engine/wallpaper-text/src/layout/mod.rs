//! Text layout module

mod wrap;

pub use wrap::wrap_words;

/// Horizontal alignment of a line relative to its anchor x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Left edge of a line of `width` pixels anchored at `anchor_x`
    pub fn line_start(&self, anchor_x: f32, width: f32) -> f32 {
        match self {
            Self::Left => anchor_x,
            Self::Center => anchor_x - width / 2.0,
            Self::Right => anchor_x - width,
        }
    }
}
