//! Byte constants and sizing defaults

/// Line terminator; the only byte that ends a row
pub const NEWLINE: u8 = b'\n';

/// Escape byte: outside quotes it masks the byte that follows
pub const ESCAPE: u8 = b'\\';

/// Default size of one mapped file region (32 MiB)
pub const DEFAULT_REGION_SIZE: usize = 32 * 1024 * 1024;

/// Delimiter candidates considered by auto-detection
pub mod candidates {
    pub const TAB: u8 = b'\t';
    pub const COMMA: u8 = b',';
    pub const SEMICOLON: u8 = b';';
    pub const SPACE: u8 = b' ';
}
