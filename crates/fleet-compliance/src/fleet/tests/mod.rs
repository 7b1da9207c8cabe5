mod common;
mod filter;
mod registry;
