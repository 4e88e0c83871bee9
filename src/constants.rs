pub const PAGE_SIZE: u32 = 1024;
pub const VIRTUAL_ADDR_SPACE: u32 = 1 << 16;
pub const PHYSICAL_MEMORY_SIZE: u32 = 32 * 1024;

pub const NUM_FRAMES: u32 = PHYSICAL_MEMORY_SIZE / PAGE_SIZE;
pub const PAGE_TABLE_ENTRIES: u32 = VIRTUAL_ADDR_SPACE / PAGE_SIZE;

pub const TLB_SIZE: usize = 8;
// number of blocks
pub const CACHE_SIZE: usize = 8;

// upper bounds accepted for configured geometry
pub const MAX_CACHE_ENTRIES: usize = 1 << 16;
pub const MAX_PAGE_TABLE_ENTRIES: u32 = 1 << 20;

pub const REPORT_SEPARATOR_WIDTH: usize = 40;
