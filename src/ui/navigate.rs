use std::sync::{Arc, Mutex};
use tracing::info;

/// Moves the user to another page.
pub trait Navigator {
    fn navigate(&self, target: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, target: &str) {
        (**self).navigate(target);
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate(&self, target: &str) {
        (**self).navigate(target);
    }
}

/// Terminal stand-in for a page change: prints the target.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: &str) {
        info!(target_page = target, "navigating");
        println!("-> {target}");
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    targets: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn targets(&self) -> Vec<String> {
        self.targets
            .lock()
            .map(|targets| targets.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        if let Ok(mut targets) = self.targets.lock() {
            targets.push(target.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_collects_targets() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("index.html");
        navigator.clone().navigate("dashboard.html");
        assert_eq!(navigator.targets(), vec!["index.html", "dashboard.html"]);
    }
}
