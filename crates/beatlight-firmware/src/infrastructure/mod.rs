//! Infrastructure layer - board wiring
//!
//! Concrete hardware behind the `beatlight-stage` traits: the RMT strip
//! driver, the hue knobs and the board configuration.

pub(crate) mod config;
pub(crate) mod drivers;
pub(crate) mod types;
