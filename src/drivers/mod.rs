//! Input-side drivers: pure signal conditioning for the button lines.

pub mod button;
