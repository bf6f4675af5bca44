use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, FixedOffset, Utc};

static NEXT_SEQ: AtomicU32 = AtomicU32::new(1);

/// Returns a process-wide unique sequence number for factory values that carry
/// a uniqueness constraint (emails, display names, slugs).
pub fn next_seq() -> u32 {
    NEXT_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Builds a unique slug with the given prefix, e.g. `mod-42`.
pub fn unique_slug(prefix: &str) -> String {
    format!("{}-{}", prefix, next_seq())
}

/// Current timestamp in the entity column type.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
