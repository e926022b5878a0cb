/// Leading-edge throttle for scroll samples, driven by caller-supplied timestamps.
///
/// The first sample, and any sample arriving at least `rate_ms` after the last leading fire, goes
/// through immediately. Samples in between replace a single pending trailing sample that becomes
/// due `delay_ms` after it was offered; the host calls [`ScrollThrottle::poll`] from its timer or
/// frame loop to collect it.
///
/// ```
/// use grid_axis_adapter::ScrollThrottle;
///
/// let mut t = ScrollThrottle::new(16, 100);
/// assert_eq!(t.offer(10.0, 0), Some(10.0));
/// assert_eq!(t.offer(20.0, 5), None);
/// assert_eq!(t.offer(30.0, 8), None);
/// assert_eq!(t.poll(20), None);
/// assert_eq!(t.poll(24), Some(30.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollThrottle<T> {
    delay_ms: u64,
    rate_ms: u64,
    last_fire_ms: Option<u64>,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending<T> {
    sample: T,
    due_ms: u64,
}

impl<T: Copy> ScrollThrottle<T> {
    pub fn new(delay_ms: u64, rate_ms: u64) -> Self {
        Self {
            delay_ms,
            rate_ms,
            last_fire_ms: None,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn rate_ms(&self) -> u64 {
        self.rate_ms
    }

    /// Offers a new sample. Returns it back if it should be applied right away.
    ///
    /// A leading fire drops any pending trailing sample.
    pub fn offer(&mut self, sample: T, now_ms: u64) -> Option<T> {
        let rate_elapsed = self
            .last_fire_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= self.rate_ms);
        if rate_elapsed {
            self.last_fire_ms = Some(now_ms);
            self.pending = None;
            return Some(sample);
        }
        self.pending = Some(Pending {
            sample,
            due_ms: now_ms.saturating_add(self.delay_ms),
        });
        None
    }

    /// Delivers the pending trailing sample once it is due.
    ///
    /// A trailing fire does not restart the rate window.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let pending = self.pending?;
        if now_ms < pending.due_ms {
            return None;
        }
        self.pending = None;
        Some(pending.sample)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
