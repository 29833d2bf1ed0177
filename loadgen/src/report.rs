use std::{collections::BTreeMap, fmt};

/// Counters collected over a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    attempted: usize,
    failed: usize,
    statuses: BTreeMap<u16, usize>,
}

impl RunReport {
    #[inline]
    pub fn record_reply(&mut self, status: u16) {
        self.attempted += 1;
        *self.statuses.entry(status).or_default() += 1;
    }

    #[inline]
    pub fn record_failure(&mut self) {
        self.attempted += 1;
        self.failed += 1;
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Requests that got a response, whatever its status.
    pub fn delivered(&self) -> usize {
        self.attempted - self.failed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// How many responses came back with each status code.
    pub fn statuses(&self) -> &BTreeMap<u16, usize> {
        &self.statuses
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} request(s) sent, {} delivered, {} failed",
            self.attempted,
            self.delivered(),
            self.failed
        )?;

        for (status, count) in &self.statuses {
            write!(f, ", {status}: {count}")?;
        }

        Ok(())
    }
}
