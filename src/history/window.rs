//! Recency windowing over chronologically ordered entries.

/// Keep the `limit` most recent items, preserving their order.
///
/// Items are assumed to be oldest-first. A `limit` of zero or below, or one
/// at least as large as the input, returns the input untouched.
pub fn most_recent<T>(mut items: Vec<T>, limit: i64) -> Vec<T> {
    let Some(limit) = positive_limit(limit) else {
        return items;
    };
    if items.len() <= limit {
        return items;
    }

    let excess = items.len() - limit;
    items.drain(..excess);
    items
}

/// Borrowing variant of [`most_recent`].
pub fn recent_slice<T>(items: &[T], limit: i64) -> &[T] {
    match positive_limit(limit) {
        Some(limit) if items.len() > limit => &items[items.len() - limit..],
        _ => items,
    }
}

fn positive_limit(limit: i64) -> Option<usize> {
    usize::try_from(limit).ok().filter(|&limit| limit > 0)
}
