use chrono::{DateTime, SubsecRound as _, Utc};

/// Current time at the precision timestamps are stored with (microseconds).
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
