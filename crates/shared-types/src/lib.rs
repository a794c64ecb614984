pub mod page;
pub mod types;

pub use page::{join_pages, split_pages, Page, PAGE_BREAK_MARKER};
pub use types::{DateRange, ErrorResponse, Event, EventCategory, TimelineResult, TimelineSummary};
