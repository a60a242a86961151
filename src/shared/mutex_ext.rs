//! Usage: Poison-tolerant locking for `std::sync::Mutex`.

use std::sync::{Mutex, MutexGuard};

pub(crate) trait MutexExt<T> {
    /// Lock the mutex, recovering the inner value if a previous holder panicked.
    fn lock_or_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("mutex 已中毒，恢复内部状态继续使用");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_poisoned_mutex() {
        let mutex = Mutex::new(41);

        let _ = std::panic::catch_unwind(|| {
            let _guard = mutex.lock().unwrap();
            panic!("poison");
        });
        assert!(mutex.is_poisoned());

        let mut guard = mutex.lock_or_recover();
        *guard += 1;
        drop(guard);

        assert_eq!(*mutex.lock_or_recover(), 42);
    }
}
