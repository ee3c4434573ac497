//! Text shaping module

mod shaper;
mod run;
mod script;

pub use shaper::TextShaper;
pub use run::{ShapedGlyph, ShapedRun, PositionedGlyph};
pub use script::{Script, detect_script};
