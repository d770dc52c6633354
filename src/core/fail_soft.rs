// src/core/fail_soft.rs
//! Read paths never fail a page: errors are logged and replaced by an
//! empty or absent value.

use std::fmt::Display;
use tracing::warn;

pub trait FailSoft<T> {
    /// Log the error and fall back to `T::default()`.
    fn or_empty(self, what: &str) -> T
    where
        T: Default;

    /// Log the error and fall back to `None`.
    fn or_none(self, what: &str) -> Option<T>;
}

impl<T, E: Display> FailSoft<T> for Result<T, E> {
    fn or_empty(self, what: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                warn!("Error fetching {}: {}", what, e);
                T::default()
            }
        }
    }

    fn or_none(self, what: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Error fetching {}: {}", what, e);
                None
            }
        }
    }
}
