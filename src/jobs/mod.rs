//! Batch jobs run by the command line subcommands

/// Symbol counting over corpora and word reports
pub mod counting;
/// Word report filtering
pub mod strip;
/// Weight updates from symbol reports
pub mod weights;
