use crate::cache::PhysicalBlockCache;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::memory::PageTable;
use crate::tlb::Tlb;
use crate::translation::{AccessResult, VirtualAddress};

/// Owns every structure on the translation path: TLB, page table (with its
/// frame allocator) and the physical block cache.
///
/// Accesses run one at a time through [`TranslationPipeline::access`]. State
/// built up by earlier accesses (mappings, cached entries) carries over to
/// later ones for the lifetime of the pipeline.
#[derive(Debug)]
pub struct TranslationPipeline {
    config: SimConfig,
    tlb: Tlb,
    page_table: PageTable,
    cache: PhysicalBlockCache,
}

impl TranslationPipeline {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "pipeline: {} pages, {} frames, page size {}, TLB {}, cache {}",
            config.page_table_entries(),
            config.num_frames(),
            config.page_size,
            config.tlb_size,
            config.cache_size
        );
        Ok(TranslationPipeline {
            config,
            tlb: Tlb::new(config.tlb_size),
            page_table: PageTable::new(config.page_table_entries(), config.num_frames()),
            cache: PhysicalBlockCache::new(config.cache_size, config.page_size),
        })
    }

    /// Translate one virtual address
    pub fn access(&mut self, raw: u32) -> AccessResult {
        // Step 1: Split into page and offset
        let address = VirtualAddress::decompose(raw, self.config.page_size);

        // Step 2: TLB, falling back to the page table
        let (frame, tlb_hit) = match self.tlb.lookup(address.page) {
            Some(frame) => (frame, true),
            None => {
                let frame = match self.page_table.resolve(address.page) {
                    Ok(frame) => frame,
                    Err(fault) => {
                        log::debug!("{}: {}", address, fault);
                        return AccessResult::Faulted { address, fault };
                    }
                };
                self.tlb.insert(address.page, frame);
                (frame, false)
            }
        };

        // Step 3: Physical address and cache
        let physical_address = address.physical_in(frame, self.config.page_size);
        let cache_hit = self.cache.touch(physical_address);

        AccessResult::Resolved {
            address,
            tlb_hit,
            frame,
            physical_address,
            cache_hit,
        }
    }

    /// Translate a batch of virtual addresses in order
    pub fn access_all(&mut self, vas: &[u32]) -> Vec<AccessResult> {
        vas.iter().map(|&va| self.access(va)).collect()
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    #[inline]
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    #[inline]
    pub fn cache(&self) -> &PhysicalBlockCache {
        &self.cache
    }
}
