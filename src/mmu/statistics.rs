use std::fmt;

use super::AccessOutcome;

/// Run-level counters accumulated by the translator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of addresses translated
    pub total_addresses: u64,
    /// Number of translations that had to load a page
    pub page_faults: u64,
    /// Number of translations resolved by the TLB
    pub tlb_hits: u64,
    /// Number of faults that reused a resident frame
    pub evictions: u64,
}

impl Statistics {
    /// Folds one translation outcome into the counters.
    pub fn record(&mut self, outcome: &AccessOutcome) {
        self.total_addresses += 1;
        match outcome {
            AccessOutcome::TlbHit => self.tlb_hits += 1,
            AccessOutcome::PageTableHit => {}
            AccessOutcome::PageFault { evicted } => {
                self.page_faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Page faults per translated address (0 when nothing was translated).
    pub fn fault_rate(&self) -> f64 {
        ratio(self.page_faults, self.total_addresses)
    }

    /// TLB hits per translated address (0 when nothing was translated).
    pub fn hit_rate(&self) -> f64 {
        ratio(self.tlb_hits, self.total_addresses)
    }
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Translated Addresses = {}", self.total_addresses)?;
        writeln!(f, "Page Faults = {}", self.page_faults)?;
        writeln!(f, "Page Fault Rate = {:.3}", self.fault_rate())?;
        writeln!(f, "TLB Hits = {}", self.tlb_hits)?;
        write!(f, "TLB Hit Rate = {:.3}", self.hit_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageNumber;

    #[test]
    fn test_statistics_record() {
        let mut stats = Statistics::default();
        stats.record(&AccessOutcome::PageFault { evicted: None });
        stats.record(&AccessOutcome::TlbHit);
        stats.record(&AccessOutcome::PageTableHit);
        stats.record(&AccessOutcome::PageFault {
            evicted: Some(PageNumber::new(2)),
        });

        assert_eq!(stats.total_addresses, 4);
        assert_eq!(stats.page_faults, 2);
        assert_eq!(stats.tlb_hits, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.fault_rate(), 0.5);
        assert_eq!(stats.hit_rate(), 0.25);
    }

    #[test]
    fn test_statistics_empty_rates() {
        let stats = Statistics::default();
        assert_eq!(stats.fault_rate(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_statistics_summary_format() {
        let stats = Statistics {
            total_addresses: 3,
            page_faults: 1,
            tlb_hits: 2,
            evictions: 0,
        };
        let expected = "Number of Translated Addresses = 3\n\
                        Page Faults = 1\n\
                        Page Fault Rate = 0.333\n\
                        TLB Hits = 2\n\
                        TLB Hit Rate = 0.667";
        assert_eq!(stats.to_string(), expected);
    }
}
