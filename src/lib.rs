//! Users Data - loaders for the users and sessions CSV datasets
//!
//! The datasets live under a base directory (`../data/` by default):
//! `raw/{train_users,test_users,sessions}.csv` and
//! `processed/<prefix>{train_users,test_users}.csv`.

mod data;

pub use data::*;
