//! Rendering primitives shared by the text handler: colors, level labels, and
//! the text form of every value kind.

mod color;
mod value;

pub use color::{Color, colorize, level_label};
pub use value::{
    format_clock, format_duration, format_float, format_time, format_value, quote, render_value,
};
