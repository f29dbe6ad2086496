pub mod alm_tab;
pub mod delete_modal;
pub mod integration;
pub mod page;
pub mod platform_tabs;

pub use delete_modal::DeleteModal;
pub use integration::AlmIntegration;
pub use page::AlmIntegrationPage;
