use std::collections::VecDeque;

/// One cached page -> frame mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: u32,
    pub frame: u32,
}

/// Translation-lookaside buffer with FIFO replacement.
///
/// Entries are kept oldest first. Lookups never reorder them, so the entry
/// evicted next is always the one inserted earliest.
#[derive(Debug)]
pub struct Tlb {
    entries: VecDeque<TlbEntry>,
    capacity: usize,
}

impl Tlb {
    pub fn new(capacity: usize) -> Self {
        Tlb {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Scan in insertion order and return the first matching frame
    pub fn lookup(&self, page: u32) -> Option<u32> {
        for entry in &self.entries {
            if entry.page == page {
                log::trace!("TLB hit: page {} -> frame {}", page, entry.frame);
                return Some(entry.frame);
            }
        }
        log::trace!("TLB miss: page {}", page);
        None
    }

    /// Append a mapping, evicting the oldest entry when full.
    ///
    /// An existing entry for the same page is left in place; lookups keep
    /// returning the older one until it is evicted.
    pub fn insert(&mut self, page: u32, frame: u32) {
        if self.entries.iter().any(|e| e.page == page) {
            log::warn!("TLB already holds page {}, inserting duplicate", page);
        }
        if self.entries.len() >= self.capacity {
            if let Some(old) = self.entries.pop_front() {
                log::debug!("TLB evict: page {} (frame {})", old.page, old.frame);
            }
        }
        self.entries.push_back(TlbEntry { page, frame });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &TlbEntry> {
        self.entries.iter()
    }
}
