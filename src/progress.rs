use std::collections::HashMap;

/// Resumable crossing-off cursors, one per odd base.
///
/// For each base b we keep the largest multiple of b already struck. Only bases up to the square
/// root of the largest bound ever sieved are tracked, so this stays at O(sqrt(n)) entries.
///
/// A base seen for the first time is seeded at b * (b - 2). The first multiplier probed is then b
/// itself: every smaller odd multiple b * k has a factor k < b, and was struck by k's own base.
#[derive(Debug, Default)]
pub struct BaseProgress {
    multiples: HashMap<u64, u64>,
}

impl BaseProgress {
    pub fn new() -> BaseProgress {
        BaseProgress::default()
    }

    /// First odd multiple of base that no window has struck yet.
    pub fn next_multiple(&mut self, base: u64) -> u64 {
        let struck = *self
            .multiples
            .entry(base)
            .or_insert_with(|| base * (base - 2));
        let factor = struck / base + 2;
        base * factor
    }

    /// Record that every odd multiple of base below next_multiple has been struck.
    pub fn advance(&mut self, base: u64, next_multiple: u64) {
        let struck = next_multiple - 2 * base;
        let entry = self.multiples.entry(base).or_insert(struck);
        debug_assert!(*entry <= struck, "cursor for {} moved backwards", base);
        *entry = struck;
    }

    #[cfg(test)]
    pub fn struck(&self, base: u64) -> Option<u64> {
        self.multiples.get(&base).copied()
    }

    pub fn len(&self) -> usize {
        self.multiples.len()
    }
}
