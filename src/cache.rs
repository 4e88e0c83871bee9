use std::collections::VecDeque;

/// FIFO set of recently touched physical blocks.
///
/// A block is `physical_address / page_size`, so each block lines up with
/// exactly one frame.
#[derive(Debug)]
pub struct PhysicalBlockCache {
    blocks: VecDeque<u32>,
    capacity: usize,
    page_size: u32,
}

impl PhysicalBlockCache {
    pub fn new(capacity: usize, page_size: u32) -> Self {
        PhysicalBlockCache {
            blocks: VecDeque::new(),
            capacity,
            page_size,
        }
    }

    /// Record an access to `physical_address`. Returns true on a hit.
    ///
    /// Hits leave the cache untouched. Misses insert the block at the back,
    /// evicting the oldest block first when the cache is full.
    pub fn touch(&mut self, physical_address: u32) -> bool {
        let block = physical_address / self.page_size;

        if self.contains(block) {
            log::trace!("cache hit: block {}", block);
            return true;
        }

        if self.blocks.len() >= self.capacity {
            if let Some(old) = self.blocks.pop_front() {
                log::debug!("cache evict: block {}", old);
            }
        }
        self.blocks.push_back(block);
        log::trace!("cache miss: block {}", block);
        false
    }

    pub fn contains(&self, block: u32) -> bool {
        for &cached in &self.blocks {
            if cached == block {
                return true;
            }
        }
        false
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Blocks from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.blocks.iter()
    }
}
