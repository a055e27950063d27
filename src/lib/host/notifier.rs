use super::{Notifier, Toast, ToastKind};

/// Prints toasts to stderr. The CLI has no transient surface, so the
/// auto-dismiss duration does not apply here.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => eprintln!("✔ {}", toast.message),
            ToastKind::Error => eprintln!("✖ {}", toast.message),
        }
    }
}
