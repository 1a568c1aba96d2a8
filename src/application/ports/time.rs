// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source behind migration plan timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
