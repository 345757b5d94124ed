pub mod history;
pub mod pcr;
pub mod types;
