#![doc = include_str!("../README.md")]

mod classify;
mod collapse;
mod dot;
mod error;
mod resolve;

pub mod v1 {
    //! Versioned public API for dot-path resolution.
    //!
    //! # Resolution
    //!
    //! - [`WildcardResolver`] — expands patterns such as `users.*.id` into the
    //!   concrete paths present in a structure
    //! - [`resolve`] — one-shot resolution with the standard dot notation
    //! - [`Pattern`] — the accepted pattern forms (none, string, segments)
    //! - [`ResolveError`] — raised for patterns ending in `.`
    //!
    //! # Dot notation
    //!
    //! - [`flatten`], [`get`], [`exists`], [`child`] — path lookups over
    //!   `serde_json::Value`
    //! - [`DotAccess`] / [`DotNotation`] — the lookups the resolver is built on,
    //!   replaceable through [`WildcardResolver::with_access`]
    //!
    //! # Building blocks
    //!
    //! - [`is_nested`] / [`Composite`] — does a container hold containers
    //! - [`collapse`] / [`Branch`] — merge per-branch wildcard results
    //!
    //! # Example — resolve every subscriber id
    //!
    //! ```
    //! use dotpath::v1::*;
    //! use serde_json::json;
    //!
    //! let doc = json!({
    //!     "users": {
    //!         "subscribers": {
    //!             "sumit": {"id": "12345", "name": "Sumit"},
    //!             "tony": {"id": "780643"},
    //!             "steve": {"id": "532678"}
    //!         }
    //!     }
    //! });
    //!
    //! assert_eq!(
    //!     resolve(&doc, "users.*.*.id").unwrap(),
    //!     vec![
    //!         "users.subscribers.sumit.id",
    //!         "users.subscribers.tony.id",
    //!         "users.subscribers.steve.id",
    //!     ]
    //! );
    //! assert_eq!(resolve(&doc, "*.*.sumit").unwrap(), vec!["users.subscribers.sumit"]);
    //! assert!(resolve(&doc, "users.*.id").unwrap().is_empty());
    //! ```

    pub use crate::classify::{Composite, has_composite, is_nested};
    pub use crate::collapse::{Branch, collapse};
    pub use crate::dot::{
        DotAccess, DotNotation, SEPARATOR, WILDCARD, child, exists, flatten, get,
    };
    pub use crate::error::{ResolveError, Result};
    pub use crate::resolve::{Pattern, WildcardResolver, resolve};
}
