use crate::{
    host::{Clipboard, Notifier, PageSource},
    RssCopier,
};

/// Typestate builder for [`RssCopier`]; `build` is only available once a
/// page source, a clipboard and a notifier have all been supplied.
pub struct RssCopierBuilder<P = (), C = (), N = ()> {
    page_source: P,
    clipboard: C,
    notifier: N,
}

impl RssCopierBuilder {
    pub fn new() -> Self {
        Self {
            page_source: (),
            clipboard: (),
            notifier: (),
        }
    }
}

impl Default for RssCopierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C, N> RssCopierBuilder<P, C, N> {
    pub fn page_source<P2: PageSource>(self, page_source: P2) -> RssCopierBuilder<P2, C, N> {
        RssCopierBuilder {
            page_source,
            clipboard: self.clipboard,
            notifier: self.notifier,
        }
    }

    pub fn clipboard<C2: Clipboard>(self, clipboard: C2) -> RssCopierBuilder<P, C2, N> {
        RssCopierBuilder {
            page_source: self.page_source,
            clipboard,
            notifier: self.notifier,
        }
    }

    pub fn notifier<N2: Notifier>(self, notifier: N2) -> RssCopierBuilder<P, C, N2> {
        RssCopierBuilder {
            page_source: self.page_source,
            clipboard: self.clipboard,
            notifier,
        }
    }
}

impl<P, C, N> RssCopierBuilder<P, C, N>
where
    P: PageSource,
    C: Clipboard,
    N: Notifier,
{
    pub fn build(self) -> RssCopier<P, C, N> {
        RssCopier {
            page_source: self.page_source,
            clipboard: self.clipboard,
            notifier: self.notifier,
        }
    }
}
