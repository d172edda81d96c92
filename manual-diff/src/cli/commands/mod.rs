// Module for command implementations

pub mod compare;
