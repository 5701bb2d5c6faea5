#[cfg(feature = "loom")]
mod imp {
    use loom::thread;

    /// Run both closures on freshly spawned loom threads and wait for both.
    ///
    /// A panic in either closure is resumed on the calling thread once both
    /// threads have been joined.
    pub(crate) fn join<A, B, RA, RB>(lhs: A, rhs: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send + 'static,
        B: FnOnce() -> RB + Send + 'static,
        RA: Send + 'static,
        RB: Send + 'static,
    {
        let lhs = thread::spawn(lhs);
        let rhs = thread::spawn(rhs);
        let lhs = lhs.join();
        let rhs = rhs.join();
        match (lhs, rhs) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            (Err(payload), _) | (_, Err(payload)) => std::panic::resume_unwind(payload),
        }
    }
}

#[cfg(not(feature = "loom"))]
mod imp {
    /// Run both closures, potentially in parallel on the rayon pool, and wait
    /// for both.
    ///
    /// Bounds match the loom variant so that callers compile under both.
    pub(crate) fn join<A, B, RA, RB>(lhs: A, rhs: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send + 'static,
        B: FnOnce() -> RB + Send + 'static,
        RA: Send + 'static,
        RB: Send + 'static,
    {
        rayon::join(lhs, rhs)
    }
}

pub(crate) use imp::*;
