use crate::error::PageFault;

/// State of one page table slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTableEntry {
    #[default]
    Unmapped,
    Mapped(u32),
}

/// Hands out frames in increasing order until physical memory runs out.
/// Frames are never returned.
#[derive(Debug)]
pub struct FrameAllocator {
    next: u32,
    limit: u32,
}

impl FrameAllocator {
    pub fn new(limit: u32) -> Self {
        FrameAllocator { next: 0, limit }
    }

    /// Take the next free frame, or None once all `limit` frames are used
    pub fn allocate(&mut self) -> Option<u32> {
        if self.next >= self.limit {
            return None;
        }
        let frame = self.next;
        self.next += 1;
        Some(frame)
    }

    #[inline]
    pub fn allocated(&self) -> u32 {
        self.next
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.limit - self.next
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.limit
    }
}

/// Single-level page table with demand allocation
#[derive(Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    frames: FrameAllocator,
}

impl PageTable {
    /// Create a table of `entries` unmapped pages backed by `num_frames` frames
    pub fn new(entries: u32, num_frames: u32) -> Self {
        PageTable {
            entries: vec![PageTableEntry::Unmapped; entries as usize],
            frames: FrameAllocator::new(num_frames),
        }
    }

    /// Find the frame for `page`, mapping it to a fresh frame on first touch.
    ///
    /// A fault leaves the table and the allocator unchanged.
    pub fn resolve(&mut self, page: u32) -> Result<u32, PageFault> {
        let entries = self.entries.len();
        let Some(slot) = self.entries.get_mut(page as usize) else {
            log::debug!("page {} outside page table ({} entries)", page, entries);
            return Err(PageFault::InvalidPage);
        };

        match *slot {
            PageTableEntry::Mapped(frame) => Ok(frame),
            PageTableEntry::Unmapped => {
                let Some(frame) = self.frames.allocate() else {
                    log::debug!("no free frame for page {}", page);
                    return Err(PageFault::OutOfMemory);
                };
                *slot = PageTableEntry::Mapped(frame);
                log::debug!("mapped page {} -> frame {}", page, frame);
                Ok(frame)
            }
        }
    }

    /// Get the frame for a page without allocating
    pub fn lookup(&self, page: u32) -> Option<u32> {
        match self.entries.get(page as usize) {
            Some(PageTableEntry::Mapped(frame)) => Some(*frame),
            _ => None,
        }
    }

    #[inline]
    pub fn entry(&self, page: u32) -> Option<PageTableEntry> {
        self.entries.get(page as usize).copied()
    }

    #[inline]
    pub fn entries(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn mapped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, PageTableEntry::Mapped(_)))
            .count()
    }

    #[inline]
    pub fn frames_allocated(&self) -> u32 {
        self.frames.allocated()
    }

    #[inline]
    pub fn frames_free(&self) -> u32 {
        self.frames.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ffl = FrameAllocator::new(3);
        assert_eq!(ffl.allocate(), Some(0));
        assert_eq!(ffl.allocate(), Some(1));
        assert_eq!(ffl.allocate(), Some(2));
        assert!(ffl.is_exhausted());
        assert_eq!(ffl.allocate(), None);
        assert_eq!(ffl.allocated(), 3);
        assert_eq!(ffl.remaining(), 0);
    }

    #[test]
    fn test_table_initialization() {
        let pt = PageTable::new(PAGE_TABLE_ENTRIES, NUM_FRAMES);
        assert_eq!(pt.entries(), 64);
        assert_eq!(pt.mapped_count(), 0);
        assert_eq!(pt.frames_free(), 32);
        assert_eq!(pt.entry(0), Some(PageTableEntry::Unmapped));
        assert_eq!(pt.entry(64), None);
    }

    #[test]
    fn test_first_touch_allocates_in_order() {
        let mut pt = PageTable::new(PAGE_TABLE_ENTRIES, NUM_FRAMES);

        // Frames follow touch order, not page order
        assert_eq!(pt.resolve(40), Ok(0));
        assert_eq!(pt.resolve(2), Ok(1));
        assert_eq!(pt.resolve(17), Ok(2));

        assert_eq!(pt.entry(40), Some(PageTableEntry::Mapped(0)));
        assert_eq!(pt.lookup(2), Some(1));
        assert_eq!(pt.lookup(3), None);
        assert_eq!(pt.frames_allocated(), 3);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut pt = PageTable::new(PAGE_TABLE_ENTRIES, NUM_FRAMES);
        let first = pt.resolve(9).unwrap();
        let allocated = pt.frames_allocated();

        let second = pt.resolve(9).unwrap();
        assert_eq!(first, second);
        assert_eq!(pt.frames_allocated(), allocated);
    }

    #[test]
    fn test_invalid_page() {
        let mut pt = PageTable::new(PAGE_TABLE_ENTRIES, NUM_FRAMES);
        assert_eq!(pt.resolve(64), Err(PageFault::InvalidPage));
        assert_eq!(pt.resolve(65), Err(PageFault::InvalidPage));
        assert_eq!(pt.resolve(u32::MAX), Err(PageFault::InvalidPage));

        // Nothing allocated for a bad page
        assert_eq!(pt.frames_allocated(), 0);
        assert_eq!(pt.mapped_count(), 0);
    }

    #[test]
    fn test_out_of_memory_after_all_frames_used() {
        let mut pt = PageTable::new(PAGE_TABLE_ENTRIES, NUM_FRAMES);
        for page in 0..NUM_FRAMES {
            assert_eq!(pt.resolve(page), Ok(page));
        }
        assert_eq!(pt.frames_free(), 0);

        // 33rd distinct page
        assert_eq!(pt.resolve(NUM_FRAMES), Err(PageFault::OutOfMemory));
        assert_eq!(pt.entry(NUM_FRAMES), Some(PageTableEntry::Unmapped));

        // Same fault every time; mapped pages still resolve
        assert_eq!(pt.resolve(NUM_FRAMES), Err(PageFault::OutOfMemory));
        assert_eq!(pt.resolve(5), Ok(5));
        assert_eq!(pt.frames_allocated(), NUM_FRAMES);
        assert_eq!(pt.mapped_count(), NUM_FRAMES as usize);
    }

    #[test]
    fn test_invalid_page_checked_before_exhaustion() {
        let mut pt = PageTable::new(4, 1);
        pt.resolve(0).unwrap();
        assert_eq!(pt.resolve(1), Err(PageFault::OutOfMemory));
        assert_eq!(pt.resolve(4), Err(PageFault::InvalidPage));
    }
}
