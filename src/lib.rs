pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod memory;
pub mod stats;
pub mod tlb;
pub mod translation;
pub mod vm_manager;

// Re-export commonly used items for convenience
pub use config::SimConfig;
pub use constants::*;
pub use error::{ConfigError, PageFault, SimError};
pub use translation::{AccessResult, VirtualAddress};
pub use vm_manager::TranslationPipeline;
