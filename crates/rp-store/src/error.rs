/// Errors from receipt store operations.
///
/// None of these are caused by receipt content; scoring itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The id generator kept producing ids that were already issued.
    #[error("no unused receipt id after {attempts} attempts")]
    IdExhausted { attempts: usize },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
