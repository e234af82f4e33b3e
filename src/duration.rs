use std::sync::OnceLock;

use regex::Regex;

/// How far below the budget a video may end and still count
pub const WINDOW_WIDTH_MINUTES: u32 = 5;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn duration_re() -> &'static Regex {
    DURATION_RE.get_or_init(|| {
        Regex::new(r"^PT(?:(\d+)H)?(\d+)M(\d+)S$").expect("duration pattern is valid")
    })
}

/// Convert a YouTube duration (`PT1H5M30S`) to whole minutes, truncating seconds.
///
/// Anything without both a minutes and a seconds part (`PT45S`, `PT1H`)
/// does not match and counts as 0 minutes.
pub fn to_minutes(duration: &str) -> u32 {
    let Some(caps) = duration_re().captures(duration) else {
        return 0;
    };

    // Captures are all digits, so a failed parse means overflow
    let hours: u32 = caps
        .get(1)
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
        .unwrap_or(0);
    let minutes: u32 = caps[2].parse().unwrap_or(u32::MAX);

    hours.saturating_mul(60).saturating_add(minutes)
}

/// Inclusive range of acceptable video lengths for a time budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub lower: u32,
    pub upper: u32,
}

impl TimeWindow {
    pub fn for_budget(minutes: u32) -> Self {
        Self {
            lower: minutes.saturating_sub(WINDOW_WIDTH_MINUTES),
            upper: minutes,
        }
    }

    pub fn contains(&self, minutes: u32) -> bool {
        self.lower <= minutes && minutes <= self.upper
    }
}
