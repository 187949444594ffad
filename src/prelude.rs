pub use crate::{
    cache::*,
    clap::*,
    download::*,
    filter::*,
    output::*,
    products::*,
    query::*,
    stores::*,
};

pub use clap::Parser;
pub use log::{info, warn, error, debug, trace};
pub use serde::{Serialize, Deserialize};
pub use async_trait::async_trait;
pub use std::{
    time::{SystemTime, UNIX_EPOCH},
    collections::HashMap, cmp::Ordering, str::FromStr,
};
pub use futures::future::join_all;
pub use reqwest::Client;

pub fn now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("Invalid system time").as_secs()
}
