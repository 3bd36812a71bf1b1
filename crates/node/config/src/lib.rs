//! Configuration types for txrank.
#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/txrank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod admission;
pub use admission::{AdmissionConfig, DEFAULT_LIMIT};

mod error;
pub use error::ConfigError;

mod io;
pub use io::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, IoConfig};

mod labels;
pub use labels::{
    DEFAULT_FEE_PER_GAS_WIDTH, DEFAULT_GAS_WIDTH, DEFAULT_SEPARATOR, LabelConfig, LabelMode,
};

mod rank;
pub use rank::RankConfig;
