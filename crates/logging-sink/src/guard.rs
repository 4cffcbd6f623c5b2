use std::fmt;
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

/// Mutual-exclusion domain a [`Sink`](crate::Sink) can expose.
///
/// The logger engine acquires the domain for the exact span of one write so
/// entries from concurrent callers never interleave. Identity matters: two
/// sinks are in the same domain only when they hand out a reference to the
/// same `LockDomain` value, typically by sharing an
/// [`Arc<LockDomain>`](std::sync::Arc).
#[derive(Default)]
pub struct LockDomain {
    mutex: Mutex<()>,
}

impl LockDomain {
    /// Creates a fresh, unshared domain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mutex: Mutex::new(()),
        }
    }

    /// Blocks until the domain is free and returns a guard holding it.
    ///
    /// A domain whose previous holder panicked is still usable: the domain
    /// protects no data of its own, so poisoning carries no meaning here.
    pub fn acquire(&self) -> DomainGuard<'_> {
        let guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        DomainGuard::new(self, guard)
    }

    /// Acquires the domain if nobody else holds it.
    pub fn try_acquire(&self) -> Option<DomainGuard<'_>> {
        match self.mutex.try_lock() {
            Ok(guard) => Some(DomainGuard::new(self, guard)),
            Err(TryLockError::Poisoned(poisoned)) => {
                Some(DomainGuard::new(self, poisoned.into_inner()))
            }
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Reports whether `other` is this very domain.
    #[must_use]
    pub fn same_domain(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl fmt::Debug for LockDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockDomain")
            .field("address", &ptr::from_ref(self))
            .finish()
    }
}

/// RAII guard holding a [`LockDomain`].
///
/// Instances are created by [`LockDomain::acquire`] and
/// [`LockDomain::try_acquire`]. Dropping the guard releases the domain.
#[must_use = "dropping the guard immediately releases the lock domain"]
pub struct DomainGuard<'a> {
    domain: &'a LockDomain,
    _held: MutexGuard<'a, ()>,
}

impl<'a> DomainGuard<'a> {
    const fn new(domain: &'a LockDomain, held: MutexGuard<'a, ()>) -> Self {
        Self {
            domain,
            _held: held,
        }
    }

    /// Returns the domain this guard holds.
    pub const fn domain(&self) -> &'a LockDomain {
        self.domain
    }
}

impl fmt::Debug for DomainGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainGuard")
            .field("domain", self.domain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn acquire_blocks_try_acquire_until_dropped() {
        let domain = LockDomain::new();
        let guard = domain.acquire();
        assert!(domain.try_acquire().is_none());
        drop(guard);
        assert!(domain.try_acquire().is_some());
    }

    #[test]
    fn guard_reports_its_domain() {
        let domain = LockDomain::new();
        let guard = domain.acquire();
        assert!(guard.domain().same_domain(&domain));
    }

    #[test]
    fn distinct_domains_are_not_the_same() {
        let first = LockDomain::new();
        let second = LockDomain::new();
        assert!(!first.same_domain(&second));
        assert!(first.same_domain(&first));
    }

    #[test]
    fn shared_domain_is_the_same_through_every_handle() {
        let domain = Arc::new(LockDomain::new());
        let other = Arc::clone(&domain);
        assert!(domain.same_domain(&other));
    }

    #[test]
    fn domain_survives_a_panicking_holder() {
        let domain = Arc::new(LockDomain::new());
        let held = Arc::clone(&domain);
        let outcome = thread::spawn(move || {
            let _guard = held.acquire();
            panic!("holder failed");
        })
        .join();

        assert!(outcome.is_err());
        assert!(domain.try_acquire().is_some());
        let _guard = domain.acquire();
    }
}
