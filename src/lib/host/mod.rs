//! Boundaries to the hosting environment: page state, clipboard and
//! user-visible notifications. Each is a single-purpose trait so the
//! orchestrator can be driven by fixtures in tests.

pub mod clipboard;
pub mod notifier;
pub mod source;

use std::{fmt::Debug, future::Future};

use crate::page::PageSnapshot;

/// Provides a fresh snapshot of the page. Called once per run; the page
/// may have changed between runs via client-side navigation, so snapshots
/// are never reused.
pub trait PageSource {
    type Error: Debug;

    fn snapshot(&self) -> impl Future<Output = Result<PageSnapshot, Self::Error>>;
}

/// Write access to the system clipboard. Fallible and asynchronous; the
/// orchestrator makes exactly one attempt per run, no retry.
pub trait Clipboard {
    type Error: Debug;

    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Fire-and-forget notification sink. Nothing in the control flow depends
/// on what a notifier does with a toast; implementations with a transient
/// surface should keep one visible for about 3 seconds before dismissing.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}
