//! Viewport signal - an observable viewport width
//!
//! Pages that depend on the viewport subscribe to the signal and re-render
//! when the layout variant flips. A subscription is released when dropped.

use tokio::sync::watch;

use super::{LayoutVariant, Viewport};

/// Publisher side of the viewport width
pub struct ViewportSignal {
    tx: watch::Sender<Viewport>,
    breakpoint: u32,
}

impl ViewportSignal {
    /// Create a signal holding an initial width
    pub fn new(width: u32, breakpoint: u32) -> Self {
        let (tx, _rx) = watch::channel(Viewport::new(width));
        Self { tx, breakpoint }
    }

    /// Current viewport
    pub fn current(&self) -> Viewport {
        *self.tx.borrow()
    }

    pub fn layout(&self) -> LayoutVariant {
        self.current().layout(self.breakpoint)
    }

    /// Record a new width.
    ///
    /// Subscribers are only woken when the layout variant changes; the stored
    /// width is always updated. Returns whether the variant changed.
    pub fn set(&self, width: u32) -> bool {
        let breakpoint = self.breakpoint;
        self.tx.send_if_modified(|viewport| {
            let before = viewport.layout(breakpoint);
            viewport.width = width;
            before != viewport.layout(breakpoint)
        })
    }

    /// Register a listener
    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription {
            rx: self.tx.subscribe(),
            breakpoint: self.breakpoint,
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Listener side; dropping it deregisters the listener
pub struct ViewportSubscription {
    rx: watch::Receiver<Viewport>,
    breakpoint: u32,
}

impl ViewportSubscription {
    /// Wait for the next layout change. `None` once the signal is gone.
    pub async fn changed(&mut self) -> Option<Viewport> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Whether a change is waiting to be observed
    pub fn has_pending(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    pub fn current(&self) -> Viewport {
        *self.rx.borrow()
    }

    pub fn layout(&self) -> LayoutVariant {
        self.current().layout(self.breakpoint)
    }

    /// Call `render` with the current viewport, then again after every layout
    /// change, until the signal is dropped.
    pub async fn for_each<F>(mut self, mut render: F)
    where
        F: FnMut(Viewport),
    {
        render(*self.rx.borrow_and_update());
        while let Some(viewport) = self.changed().await {
            render(viewport);
        }
    }
}
