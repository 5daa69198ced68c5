/// Minimum sidebar width used when the style configuration has none.
pub const DEFAULT_MIN_WIDTH: u32 = 220;
/// Maximum sidebar width used when the style configuration has none.
pub const DEFAULT_MAX_WIDTH: u32 = 500;

/// Closed pixel interval an expanded sidebar width must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthBounds {
    min: u32,
    max: u32,
}

impl WidthBounds {
    /// Build bounds from explicit limits.
    ///
    /// A maximum below the minimum is raised to the minimum, so the minimum
    /// always wins when the two disagree.
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Build bounds from raw style property values such as `"220px"`.
    ///
    /// Missing, empty, negative or non-numeric values fall back to
    /// [`DEFAULT_MIN_WIDTH`] and [`DEFAULT_MAX_WIDTH`] respectively.
    pub fn from_style_values(min: Option<&str>, max: Option<&str>) -> Self {
        let min = min
            .and_then(style_pixels)
            .unwrap_or(DEFAULT_MIN_WIDTH);
        let max = max
            .and_then(style_pixels)
            .unwrap_or(DEFAULT_MAX_WIDTH);

        Self::new(min, max)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Constrain a candidate width to the interval.
    pub fn clamp(&self, candidate: i64) -> u32 {
        let clamped =
            candidate.clamp(i64::from(self.min), i64::from(self.max));
        // Both limits are u32, so the clamped value always fits.
        u32::try_from(clamped).unwrap_or(self.min)
    }

    /// Return whether `width` already lies inside the interval.
    pub fn contains(&self, width: u32) -> bool {
        (self.min..=self.max).contains(&width)
    }
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WIDTH, DEFAULT_MAX_WIDTH)
    }
}

/// Parse the leading integer of a CSS-like pixel value.
///
/// Leading whitespace and an optional sign are accepted, and parsing stops
/// at the first non-digit, so `"312px"`, `" 312"` and `"312.7px"` all yield
/// `312`. Returns `None` when no digits lead the value or it overflows.
pub fn parse_pixels(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Serialize a width the way the store and the presentation layer expect.
pub fn format_pixels(width: u32) -> String {
    format!("{width}px")
}

fn style_pixels(value: &str) -> Option<u32> {
    parse_pixels(value).and_then(|pixels| u32::try_from(pixels).ok())
}
