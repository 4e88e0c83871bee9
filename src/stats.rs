use std::fmt;

use crate::error::PageFault;
use crate::translation::AccessResult;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SimStats {
    pub accesses: u64,
    pub tlb_hits: u64,
    pub tlb_misses: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub invalid_page_faults: u64,
    pub out_of_memory_faults: u64,
    pub frames_allocated: u32,
}

impl SimStats {
    pub fn record(&mut self, result: &AccessResult) {
        self.accesses += 1;
        match *result {
            AccessResult::Faulted { fault: PageFault::InvalidPage, .. } => {
                self.invalid_page_faults += 1;
            }
            AccessResult::Faulted { fault: PageFault::OutOfMemory, .. } => {
                self.out_of_memory_faults += 1;
            }
            AccessResult::Resolved { tlb_hit, cache_hit, .. } => {
                if tlb_hit {
                    self.tlb_hits += 1;
                } else {
                    self.tlb_misses += 1;
                }
                if cache_hit {
                    self.cache_hits += 1;
                } else {
                    self.cache_misses += 1;
                }
            }
        }
    }

    pub fn from_results(results: &[AccessResult], frames_allocated: u32) -> Self {
        let mut stats = SimStats {
            frames_allocated,
            ..SimStats::default()
        };
        for result in results {
            stats.record(result);
        }
        stats
    }

    #[inline]
    pub fn faults(&self) -> u64 {
        self.invalid_page_faults + self.out_of_memory_faults
    }

    pub fn tlb_hit_rate(&self) -> Option<f64> {
        rate(self.tlb_hits, self.tlb_hits + self.tlb_misses)
    }

    pub fn cache_hit_rate(&self) -> Option<f64> {
        rate(self.cache_hits, self.cache_hits + self.cache_misses)
    }
}

fn rate(hits: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(hits as f64 / total as f64)
}

fn write_rate(f: &mut fmt::Formatter<'_>, label: &str, hits: u64, misses: u64) -> fmt::Result {
    let total = hits + misses;
    match rate(hits, total) {
        Some(rate) => writeln!(
            f,
            "{:<22}{:.2}% hit rate ({} / {})",
            label,
            rate * 100.0,
            hits,
            total
        ),
        None => writeln!(f, "{:<22}N/A", label),
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-----------------------------")?;
        writeln!(f, "{:<22}{}", "Accesses:", self.accesses)?;
        write_rate(f, "TLB:", self.tlb_hits, self.tlb_misses)?;
        write_rate(f, "Cache:", self.cache_hits, self.cache_misses)?;
        writeln!(
            f,
            "{:<22}{} ({} invalid page, {} out of memory)",
            "Page Faults:",
            self.faults(),
            self.invalid_page_faults,
            self.out_of_memory_faults
        )?;
        writeln!(f, "{:<22}{}", "Frames Allocated:", self.frames_allocated)?;
        write!(f, "-----------------------------")
    }
}
