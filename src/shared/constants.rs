/// Number of questions returned per page by the question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the client omits `page` or sends something unparsable
pub const DEFAULT_PAGE: i64 = 1;

/// Quiz category id meaning "draw from every category"
pub const ALL_CATEGORIES: i32 = 0;

// =============================================================================
// ERROR MESSAGES
// =============================================================================

/// Client-visible message for 404 responses
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Client-visible message for 422 responses
pub const UNPROCESSABLE_MESSAGE: &str = "Unprocessable";
