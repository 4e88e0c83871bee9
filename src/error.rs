use std::path::PathBuf;

/// Why a single access could not be translated.
///
/// Faults are local to one access: the pipeline reports them and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageFault {
    #[error("virtual page not in page table")]
    InvalidPage,
    #[error("out of physical memory frames")]
    OutOfMemory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("page size must be a non-zero power of two, got {0}")]
    PageSize(u32),
    #[error("{name} size {size} is not a non-zero multiple of the page size {page_size}")]
    Misaligned {
        name: &'static str,
        size: u32,
        page_size: u32,
    },
    #[error("{0} capacity must be at least 1")]
    EmptyCache(&'static str),
    #[error("{name} of {value} exceeds the limit of {max}")]
    TooLarge {
        name: &'static str,
        value: u64,
        max: u64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid virtual address {token:?}")]
    InvalidAddress { line: usize, token: String },
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
