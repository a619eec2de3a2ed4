//! Named callbacks run at fixed points of an image parse.
//!
//! Hooks are registered once, before the registry is handed to an
//! [`ImageIntrospector`](crate::ImageIntrospector), and run in registration
//! order. They observe the parse; they cannot change its outcome.

use std::fmt;
use std::path::Path;

use crate::error::ImageError;
use crate::types::ImageMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionPoint {
    /// File bytes are in memory, detection has not run.
    Loaded,
    /// Metadata was produced.
    Parsed,
    /// The parse failed after the path was known.
    Failed,
}

#[derive(Debug)]
pub enum HookEvent<'a> {
    Loaded {
        path: &'a Path,
        size_bytes: usize,
    },
    Parsed {
        path: Option<&'a Path>,
        metadata: &'a ImageMetadata,
    },
    Failed {
        path: Option<&'a Path>,
        error: &'a ImageError,
    },
}

impl HookEvent<'_> {
    pub fn point(&self) -> ExtensionPoint {
        match self {
            HookEvent::Loaded { .. } => ExtensionPoint::Loaded,
            HookEvent::Parsed { .. } => ExtensionPoint::Parsed,
            HookEvent::Failed { .. } => ExtensionPoint::Failed,
        }
    }
}

pub type HookFn = Box<dyn Fn(&HookEvent<'_>) + Send + Sync>;

struct NamedHook {
    point: ExtensionPoint,
    name: String,
    callback: HookFn,
}

#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<NamedHook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, point: ExtensionPoint, name: impl Into<String>, callback: F)
    where
        F: Fn(&HookEvent<'_>) + Send + Sync + 'static,
    {
        self.hooks.push(NamedHook {
            point,
            name: name.into(),
            callback: Box::new(callback),
        });
    }

    pub fn with<F>(mut self, point: ExtensionPoint, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&HookEvent<'_>) + Send + Sync + 'static,
    {
        self.register(point, name, callback);
        self
    }

    pub fn names(&self, point: ExtensionPoint) -> Vec<&str> {
        self.hooks
            .iter()
            .filter(|h| h.point == point)
            .map(|h| h.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn dispatch(&self, event: &HookEvent<'_>) {
        let point = event.point();
        for hook in self.hooks.iter().filter(|h| h.point == point) {
            tracing::trace!(hook = %hook.name, ?point, "running hook");
            (hook.callback)(event);
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|h| (h.point, h.name.as_str())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_hooks_run_in_registration_order_for_their_point() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let mut registry = HookRegistry::new();
        for name in ["first", "second"] {
            let log = Arc::clone(&log);
            registry.register(ExtensionPoint::Loaded, name, move |_| {
                log.lock().unwrap().push(name);
            });
        }
        let other = Arc::clone(&log);
        registry.register(ExtensionPoint::Parsed, "parsed-only", move |_| {
            other.lock().unwrap().push("parsed-only");
        });

        registry.dispatch(&HookEvent::Loaded {
            path: Path::new("a.jpg"),
            size_bytes: 10,
        });

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(registry.names(ExtensionPoint::Loaded), vec!["first", "second"]);
        assert_eq!(registry.names(ExtensionPoint::Parsed), vec!["parsed-only"]);
        assert!(registry.names(ExtensionPoint::Failed).is_empty());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_failed_event_reaches_failed_hooks() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let registry = HookRegistry::new().with(ExtensionPoint::Failed, "record", move |event| {
            if let HookEvent::Failed { error, .. } = event {
                *sink.lock().unwrap() = Some(error.is_unsupported());
            }
        });

        let error = ImageError::UnsupportedFormat {
            prefix: [0, 1, 2, 3],
        };
        registry.dispatch(&HookEvent::Failed {
            path: None,
            error: &error,
        });

        assert_eq!(*seen.lock().unwrap(), Some(true));
    }
}
