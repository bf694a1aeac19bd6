//! Targets whose stat layout we don't know. Nothing is ever recognised, so every lookup ends up
//! at the sentinel.

use std::fs::Metadata;

use crate::fileinfo::Sys;
use crate::stat::AccessTimeProvider;
use crate::timestamp::Timestamp;

/// Uninhabited, so no `sys` blob can ever downcast to it.
#[derive(Debug)]
pub enum NativeStat {}

impl AccessTimeProvider for NativeStat {
    fn access_time(&self) -> Timestamp {
        match *self {}
    }
}

pub(crate) fn native_stat(_m: &Metadata) -> Option<Sys> {
    None
}
