use crate::scope::Verdict;

/// Counters for a filtering run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Input lines read
    pub lines: u64,
    /// Lines classified in scope
    pub in_scope: u64,
    /// Lines classified out of scope (including invalid URLs)
    pub out_of_scope: u64,
    /// URL-shaped lines that failed to parse
    pub invalid_urls: u64,
    /// Lines written to the output
    pub printed: u64,
}

impl Stats {
    /// Account for one classified line
    pub fn record(&mut self, verdict: Verdict) {
        self.lines += 1;
        match verdict {
            Verdict::InScope => self.in_scope += 1,
            Verdict::OutOfScope => self.out_of_scope += 1,
            Verdict::InvalidUrl => {
                self.out_of_scope += 1;
                self.invalid_urls += 1;
            }
        }
    }
}
