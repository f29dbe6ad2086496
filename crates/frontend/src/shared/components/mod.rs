pub mod boxed_tabs;
pub mod page_header;

pub use boxed_tabs::{BoxedTabItem, BoxedTabs};
pub use page_header::PageHeader;
