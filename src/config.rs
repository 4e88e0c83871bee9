use crate::constants::*;
use crate::error::ConfigError;

/// Geometry of the simulated machine, fixed once the pipeline is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub page_size: u32,
    pub virtual_size: u32,
    pub physical_size: u32,
    pub tlb_size: usize,
    pub cache_size: usize,
}

impl SimConfig {
    /// Check that sizes line up on page boundaries and caches can hold something
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.page_size.is_power_of_two() {
            return Err(ConfigError::PageSize(self.page_size));
        }
        for (name, size) in [("virtual", self.virtual_size), ("physical", self.physical_size)] {
            if size == 0 || size % self.page_size != 0 {
                return Err(ConfigError::Misaligned {
                    name,
                    size,
                    page_size: self.page_size,
                });
            }
        }
        if self.page_table_entries() > MAX_PAGE_TABLE_ENTRIES {
            return Err(ConfigError::TooLarge {
                name: "page table entries",
                value: self.page_table_entries() as u64,
                max: MAX_PAGE_TABLE_ENTRIES as u64,
            });
        }
        for (name, size) in [("TLB", self.tlb_size), ("physical cache", self.cache_size)] {
            if size == 0 {
                return Err(ConfigError::EmptyCache(name));
            }
            if size > MAX_CACHE_ENTRIES {
                return Err(ConfigError::TooLarge {
                    name,
                    value: size as u64,
                    max: MAX_CACHE_ENTRIES as u64,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn page_table_entries(&self) -> u32 {
        self.virtual_size / self.page_size
    }

    #[inline]
    pub fn num_frames(&self) -> u32 {
        self.physical_size / self.page_size
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            page_size: PAGE_SIZE,
            virtual_size: VIRTUAL_ADDR_SPACE,
            physical_size: PHYSICAL_MEMORY_SIZE,
            tlb_size: TLB_SIZE,
            cache_size: CACHE_SIZE,
        }
    }
}
