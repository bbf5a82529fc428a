// Domain modules

pub mod gateway;
