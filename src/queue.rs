//! FIFO hand-off between producers and the writer.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::message::LogMessage;

/// Thread-safe FIFO of pending records with a monotonic shutdown flag.
///
/// Any number of producers may call [`LogQueue::add_log`] concurrently;
/// one consumer is expected to drive [`LogQueue::next_log`]. Records leave
/// the queue in exactly the order they entered it, globally across all
/// producers: enqueue is a single critical section.
#[derive(Debug, Default)]
pub struct LogQueue {
    pending: Mutex<VecDeque<LogMessage>>,
    available: Notify,
    shut_down: AtomicBool,
}

impl LogQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the tail and wakes a blocked consumer.
    ///
    /// Never fails and never suspends; the queue is unbounded. Records
    /// added after [`LogQueue::shutdown`] are still retained and will be
    /// yielded before `next_log` reports exhaustion.
    pub fn add_log(&self, message: LogMessage) {
        self.pending.lock().push_back(message);
        self.available.notify_one();
    }

    /// Takes the next record, waiting until one arrives.
    ///
    /// Returns `None` only once the queue has been shut down *and* every
    /// retained record has been yielded; this is the consumer's
    /// termination condition. The wait is wakeup-driven, not polling:
    /// `notify_one`'s stored permit covers a producer racing past a
    /// consumer that has not parked yet.
    pub async fn next_log(&self) -> Option<LogMessage> {
        loop {
            if let Some(message) = self.pending.lock().pop_front() {
                return Some(message);
            }
            if self.shut_down.load(Ordering::Acquire) {
                return None;
            }
            self.available.notified().await;
        }
    }

    /// True iff at least one record is queued. Non-blocking.
    pub fn has_next_log(&self) -> bool {
        !self.pending.lock().is_empty()
    }

    /// Sets the shutdown flag and wakes a blocked consumer.
    ///
    /// The flag is monotonic: once set it is never cleared.
    pub fn shutdown(&self) {
        self.shut_down.store(true, Ordering::Release);
        self.available.notify_one();
    }

    /// True once [`LogQueue::shutdown`] has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }
}
