pub mod config;
pub mod cors;
pub mod decision;
pub mod policy;
pub mod warn;

pub use config::OriginSettings;
pub use decision::{decide, OriginDecision};
pub use policy::{OriginResolver, PolicyConfig, PolicyMode};
pub use warn::WarnOnceGate;
