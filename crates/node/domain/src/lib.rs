//! Core domain types for txrank.
#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/txrank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod decoder;
pub use decoder::{
    DEFAULT_FEE_PER_GAS_LABEL_WIDTH, DEFAULT_GAS_LABEL_WIDTH, DecoderConfig, LabelFormat,
    TxDecoder,
};

mod error;
pub use error::{DecodeError, FeeError, NumericField};

mod fee;
pub use fee::calculate_fee;

mod tx;
pub use tx::CandidateTx;
