pub mod clipboard;
pub mod notifier;
pub mod page_source;
