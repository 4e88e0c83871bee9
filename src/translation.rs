use std::fmt;

use crate::error::PageFault;

/// Represents the decomposed components of a Virtual Address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualAddress {
    pub va: u32,
    pub page: u32,
    pub offset: u32,
}

impl VirtualAddress {
    /// Split a raw VA into page number and offset.
    /// The page is not range-checked here; the page table does that.
    pub fn decompose(va: u32, page_size: u32) -> Self {
        VirtualAddress {
            va,
            page: va / page_size,
            offset: va % page_size,
        }
    }

    /// Physical address of this offset within `frame`
    #[inline]
    pub fn physical_in(&self, frame: u32, page_size: u32) -> u32 {
        frame * page_size + self.offset
    }
}

impl fmt::Display for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VA({}) = (page={}, offset={})", self.va, self.page, self.offset)
    }
}

/// Outcome of a single access through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessResult {
    /// Translation aborted. Neither the TLB nor the cache was touched.
    Faulted {
        address: VirtualAddress,
        fault: PageFault,
    },
    Resolved {
        address: VirtualAddress,
        tlb_hit: bool,
        frame: u32,
        physical_address: u32,
        cache_hit: bool,
    },
}

impl AccessResult {
    pub fn address(&self) -> VirtualAddress {
        match self {
            AccessResult::Faulted { address, .. } | AccessResult::Resolved { address, .. } => {
                *address
            }
        }
    }

    pub fn physical_address(&self) -> Option<u32> {
        match self {
            AccessResult::Resolved { physical_address, .. } => Some(*physical_address),
            AccessResult::Faulted { .. } => None,
        }
    }

    pub fn fault(&self) -> Option<PageFault> {
        match self {
            AccessResult::Faulted { fault, .. } => Some(*fault),
            AccessResult::Resolved { .. } => None,
        }
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessResult::Faulted { .. })
    }
}

fn hit_or_miss(hit: bool) -> &'static str {
    if hit { "Hit" } else { "Miss" }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = self.address();
        writeln!(
            f,
            "Virtual Addr: {} (Page {}, Offset {})",
            address.va, address.page, address.offset
        )?;
        match self {
            AccessResult::Faulted { fault, .. } => {
                writeln!(f, " -> Page Fault: {}", fault)?;
                write!(f, " -> Access aborted.")
            }
            AccessResult::Resolved {
                tlb_hit,
                frame,
                physical_address,
                cache_hit,
                ..
            } => {
                writeln!(f, " -> TLB {}", hit_or_miss(*tlb_hit))?;
                writeln!(f, " -> Physical Addr: {} (Frame {})", physical_address, frame)?;
                write!(f, " -> Cache {}", hit_or_miss(*cache_hit))
            }
        }
    }
}
