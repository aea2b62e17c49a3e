/// Identifier shared by every in-memory record.
///
/// Records created in the UI get a millisecond timestamp, seeded demo records
/// use small sequential numbers.
pub type EntityId = u64;

/// Next identifier for a new record.
///
/// Derived from the clock, but never lower than `max(existing) + 1`, so two
/// submits inside the same millisecond still get distinct ids.
pub fn next_id<I>(now_millis: i64, existing: I) -> EntityId
where
    I: IntoIterator<Item = EntityId>,
{
    let clock = u64::try_from(now_millis).unwrap_or(0);
    match existing.into_iter().max() {
        Some(max) if clock <= max => max + 1,
        _ => clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_clock_when_ahead_of_existing() {
        assert_eq!(next_id(1_700_000_000_000, [1, 2, 3]), 1_700_000_000_000);
    }

    #[test]
    fn bumps_past_existing_when_clock_collides() {
        let first = next_id(1_700_000_000_000, [1, 2]);
        let second = next_id(1_700_000_000_000, [1, 2, first]);
        assert_eq!(second, first + 1);
    }

    #[test]
    fn empty_store_and_bad_clock() {
        assert_eq!(next_id(-5, []), 0);
        assert_eq!(next_id(-5, [7]), 8);
    }
}
