//! CopyPad daemon: configuration, tracing and service wiring around the
//! `cp-app` service, plus the poll loop that drives it.

pub mod bootstrap;
