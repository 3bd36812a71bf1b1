//! Capacity-bounded transaction pool for txrank.
#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/txrank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::{DEFAULT_POOL_LIMIT, PoolConfig};

mod heap;
pub use heap::{Admission, BoundedHeap, DrainDescending};

mod ordering;
pub use ordering::{ByScore, Priority, Reversed};

mod traits;
pub use traits::Scored;

mod pool;
pub use pool::{PoolStats, TransactionPool};
