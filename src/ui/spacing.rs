//! Standardized spacing constants for consistent UI in Stockroom.
//!
//! All constants are f32, in points.

/// Small spacing value (8px)
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing value (12px)
pub const SPACING_MD: f32 = 12.0;

/// Large spacing value (16px)
pub const SPACING_LG: f32 = 16.0;

/// Width of the form side panel
pub const FORM_PANEL_WIDTH: f32 = 300.0;

/// Button padding (8px horizontal, 4px vertical)
pub const BUTTON_PADDING: (f32, f32) = (8.0, 4.0);

/// Standard item spacing (8px horizontal, 6px vertical)
pub const ITEM_SPACING: (f32, f32) = (8.0, 6.0);
