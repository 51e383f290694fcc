/// Header carrying the originating client address when behind a proxy
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Client key used when no forwarding header is present
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Default page size for product listings
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Deepest reply level accepted below a comment thread root
pub const MAX_COMMENT_DEPTH: usize = 32;
