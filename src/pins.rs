//! GPIO pin assignments for the Inky Impression 7.3" button strip.
//!
//! Single source of truth — the default configuration references this
//! module rather than hard-coding pin numbers.  Change a pin here and it
//! propagates everywhere.
//!
//! Buttons A–D sit top to bottom on the left edge of the frame.  Each is
//! a momentary switch wired active-low: the line idles high through the
//! internal pull-up and pressing pulls it to ground.

/// Button A (topmost) — BCM numbering.
pub const BUTTON_A_GPIO: u8 = 5;
/// Button B — BCM numbering.
pub const BUTTON_B_GPIO: u8 = 6;
/// Button C — BCM numbering.
pub const BUTTON_C_GPIO: u8 = 16;
/// Button D (bottom) — BCM numbering.
pub const BUTTON_D_GPIO: u8 = 24;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Debounce window: a press must hold the line low this long to count.
pub const DEBOUNCE_MS: u64 = 300;

/// Poll interval for the GPIO sampling thread.  Well under the debounce
/// window so no qualifying press can slip between samples.
pub const SAMPLE_INTERVAL_MS: u64 = 10;
