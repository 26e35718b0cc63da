//! Application constants for the deck processor
//!
//! This module contains the deck grammar constants, the keyword names
//! consumed by the aquifer extractor, and the fixed unit-system constants.

// =============================================================================
// Deck Grammar
// =============================================================================

/// Inline comment marker; everything from here to end of line is ignored
pub const COMMENT_MARKER: &str = "--";

/// Quote character delimiting a verbatim token span
pub const QUOTE_CHAR: char = '\'';

/// Record terminator; an unquoted slash ends the tokens of a data line
pub const RECORD_TERMINATOR: char = '/';

/// Maximum length of a keyword name token
pub const MAX_KEYWORD_LENGTH: usize = 8;

// =============================================================================
// Aquifer Keywords
// =============================================================================

/// Carter-Tracy aquifer property keyword
pub const KEYWORD_AQUCT: &str = "AQUCT";

/// Aquifer-to-grid connection keyword
pub const KEYWORD_AQUANCON: &str = "AQUANCON";

/// User-supplied influence function table keyword
pub const KEYWORD_AQUTAB: &str = "AQUTAB";

// =============================================================================
// Unit-System Constants (METRIC)
// =============================================================================

/// Time conversion constant for the Carter-Tracy model (METRIC, PVT-M)
pub const CARTER_TRACY_C1_METRIC: f64 = 0.008527;

/// Influx conversion constant for the Carter-Tracy model (METRIC, PVT-M)
pub const CARTER_TRACY_C2_METRIC: f64 = 6.283;

/// Influence angle applied when a record leaves the item defaulted (degrees)
pub const DEFAULT_INFLUENCE_ANGLE: f64 = 360.0;

/// Influx coefficient multiplier applied when the item is defaulted
pub const DEFAULT_INFLUX_MULT: f64 = 1.0;

/// Lowest influence table id that refers to a user-supplied AQUTAB table;
/// ids at or below one resolve to the built-in curve
pub const FIRST_AQUTAB_TABLE_ID: i64 = 2;
