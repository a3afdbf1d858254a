// libnci/src/protocol/mod.rs

pub mod commands;
pub mod deactivate;
pub mod discover;
pub mod intf_activated;
pub mod mode_param;
pub mod notification;
pub mod parser;

pub use commands::{Command, DiscoveryConfig, MAX_DISCOVERY_CONFIGS};
pub use deactivate::{RfDeactivateNtf, decode_rf_deactivate};
pub use discover::{RfDiscoverNtf, decode_rf_discover};
pub use intf_activated::{ActivationParam, IntfActivationNtf, decode_intf_activated};
pub use mode_param::{ModeParam, decode_mode_param};
pub use notification::{Notification, NotificationKind};
