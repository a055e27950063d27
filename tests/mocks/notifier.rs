use std::sync::{Arc, Mutex};

use feed_clip::{Notifier, Toast};

#[derive(Clone, Default)]
pub struct MockNotifier {
    pub toasts: Arc<Mutex<Vec<Toast>>>,
}

impl Notifier for MockNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
