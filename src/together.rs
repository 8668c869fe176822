// "Time together" counter shown on the page, recomputed by the page every second.
// Years are 365 days and months 30 days; the page has always counted that way.

use wasm_bindgen::prelude::*;

const SECOND_MS: f64 = 1000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Local time, parsed by the JS `Date` so it follows the visitor's timezone.
pub const RELATIONSHIP_START: &str = "2022-05-12T00:00:00";

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeTogether {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeTogether {
    /// Breakdown of `now_ms - start_ms`. A start in the future counts as zero.
    pub fn between(start_ms: f64, now_ms: f64) -> TimeTogether {
        let diff = elapsed(start_ms, now_ms);
        TimeTogether {
            years: (diff / YEAR_MS).floor() as u32,
            months: ((diff % YEAR_MS) / MONTH_MS).floor() as u32,
            days: ((diff % MONTH_MS) / DAY_MS).floor() as u32,
            hours: ((diff % DAY_MS) / HOUR_MS).floor() as u32,
            minutes: ((diff % HOUR_MS) / MINUTE_MS).floor() as u32,
            seconds: ((diff % MINUTE_MS) / SECOND_MS).floor() as u32,
        }
    }
}

fn elapsed(start_ms: f64, now_ms: f64) -> f64 {
    let diff = now_ms - start_ms;
    if diff.is_finite() && diff > 0.0 {
        diff
    } else {
        0.0
    }
}

#[wasm_bindgen]
pub fn time_together(start_ms: f64, now_ms: f64) -> TimeTogether {
    TimeTogether::between(start_ms, now_ms)
}

/// Whole days since `start_ms`, for the stats section.
#[wasm_bindgen]
pub fn days_together(start_ms: f64, now_ms: f64) -> u32 {
    (elapsed(start_ms, now_ms) / DAY_MS).floor() as u32
}

/// Counter from the relationship start date to the current browser time.
#[wasm_bindgen]
pub fn time_together_now() -> TimeTogether {
    let start = js_sys::Date::new(&JsValue::from_str(RELATIONSHIP_START)).get_time();
    TimeTogether::between(start, js_sys::Date::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_each_unit() {
        // 421 days: 1 year, 56 days = 1 month, 421 % 30 = 1 day
        let diff = 421.0 * DAY_MS + HOUR_MS + MINUTE_MS + SECOND_MS;
        assert_eq!(
            TimeTogether::between(1_000.0, 1_000.0 + diff),
            TimeTogether {
                years: 1,
                months: 1,
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn partial_seconds_are_dropped() {
        let t = TimeTogether::between(0.0, 59_999.0);
        assert_eq!(t.seconds, 59);
        assert_eq!(t.minutes, 0);
    }

    #[test]
    fn day_count_is_taken_modulo_thirty_day_months() {
        // 364 days: 12 months of 30 days plus 4 days
        let t = TimeTogether::between(0.0, 364.0 * DAY_MS);
        assert_eq!((t.years, t.months, t.days), (0, 12, 4));
        // 400 days: one year, 35 days left = 1 month, and 400 % 30 = 10 days
        let t = TimeTogether::between(0.0, 400.0 * DAY_MS);
        assert_eq!((t.years, t.months, t.days), (1, 1, 10));
    }

    #[test]
    fn future_start_counts_as_zero() {
        assert_eq!(TimeTogether::between(5_000.0, 1_000.0), TimeTogether::default());
        assert_eq!(days_together(5_000.0, 1_000.0), 0);
        assert_eq!(TimeTogether::between(f64::NAN, 1_000.0), TimeTogether::default());
    }

    #[test]
    fn days_together_floors() {
        assert_eq!(days_together(0.0, 10.5 * DAY_MS), 10);
        assert_eq!(time_together(0.0, 10.5 * DAY_MS).hours, 12);
    }
}
