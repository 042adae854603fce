//! Clock and id generator ports

/// Port for the current time
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Port for note identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier unique for the practical lifetime of the collection
    fn generate(&self) -> String;
}
