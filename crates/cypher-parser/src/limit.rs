use std::fmt;

/// Counts usage against a ceiling: grammar nesting depth for the parser,
/// token count for the lexer.
///
/// The counter moves both ways for depth-style limits (entering a nesting
/// level consumes budget, leaving it releases the budget again), while the
/// lexer only ever consumes. Whatever the direction, the tracker remembers
/// the deepest point it reached, so after parsing you can see how close the
/// input came to the ceiling:
///
/// ```rust
/// use cypher_parser::Parser;
///
/// let query = "MATCH (a)-[:KNOWS]->(b) WHERE a.age > ((((1)))) RETURN b";
/// let parser = Parser::new(query).recursion_limit(16);
/// let tree = parser.parse();
///
/// let usage = tree.recursion_limit();
/// assert_eq!(usage.limit, 16);
/// // `high` is how deep the grammar actually nested
/// assert!(usage.high <= usage.limit);
/// assert_eq!(0, tree.errors().len());
/// ```
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct LimitTracker {
    in_use: usize,
    /// Deepest utilization seen so far.
    pub high: usize,
    /// The ceiling being enforced.
    pub limit: usize,
}

impl Default for LimitTracker {
    fn default() -> Self {
        Self {
            in_use: 0,
            high: 0,
            limit: usize::MAX,
        }
    }
}

impl LimitTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            in_use: 0,
            high: 0,
            limit,
        }
    }

    /// Whether the most recent `consume` went past the ceiling.
    pub fn limited(&self) -> bool {
        self.in_use > self.limit
    }

    /// Take one unit of budget, raising the high-water mark if this is the
    /// deepest the tracker has been.
    pub fn consume(&mut self) {
        self.in_use = self.in_use.saturating_add(1);
        self.high = self.high.max(self.in_use);
    }

    /// Hand one unit of budget back. Used for depth-style limits where
    /// leaving a nesting level frees the budget again.
    pub fn release(&mut self) {
        self.in_use = self.in_use.saturating_sub(1);
    }
}

impl fmt::Debug for LimitTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limit: {}, high: {}", self.limit, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_water_mark_survives_release() {
        let mut tracker = LimitTracker::new(2);
        tracker.consume();
        tracker.consume();
        tracker.release();
        tracker.consume();
        assert_eq!(tracker.high, 2);
        assert!(!tracker.limited());
        tracker.consume();
        assert!(tracker.limited());
        assert_eq!(tracker.high, 3);
    }
}
