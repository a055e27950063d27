mod copier;
mod error;

pub mod channel;
pub mod extract;
pub mod host;
pub mod page;
pub mod parser;
pub mod tracing;
pub mod types;

pub use channel::{ChannelId, FeedUrl};
pub use copier::{builder::RssCopierBuilder, Ack, Command, RssCopier};
pub use error::Error;
pub use host::{Clipboard, Notifier, PageSource, Toast, ToastKind};
pub use page::{Page, PageKind, PageSnapshot};
