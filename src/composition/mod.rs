pub(crate) mod assembler;
pub(crate) mod chrome;
pub(crate) mod config;
