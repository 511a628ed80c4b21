use core::sync::atomic::{AtomicI32, Ordering};

/// Single-edge quadrature decoder.
///
/// Channel-A transitions are the trigger; channel B's level at the transition
/// supplies the direction. A call caused purely by a channel-B edge leaves the
/// stored phase unchanged and is a no-op, so a full cycle counts twice rather
/// than four times.
pub struct QuadratureDecoder<'a> {
    count: &'a AtomicI32,
    last_a: bool,
}

impl<'a> QuadratureDecoder<'a> {
    /// `level_a` is the channel-A level sampled at wiring time, so the first
    /// real transition is counted rather than swallowed.
    pub fn new(count: &'a AtomicI32, level_a: bool) -> Self {
        Self {
            count,
            last_a: level_a,
        }
    }

    /// Feed the pin levels observed at an edge of either channel.
    ///
    /// Runs in the edge-handling context: no blocking, no allocation. The
    /// counter has a single writer, so a load/store pair cannot lose updates
    /// (thumbv6m has no atomic read-modify-write anyway).
    pub fn on_edge(&mut self, level_a: bool, level_b: bool) {
        if level_a != self.last_a {
            let delta = if level_b != level_a { 1 } else { -1 };
            self.count.store(
                self.count.load(Ordering::Relaxed).wrapping_add(delta),
                Ordering::Relaxed,
            );
        }
        self.last_a = level_a;
    }
}
