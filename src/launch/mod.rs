//! Launch configurator: from a request and the observed environment to a launch decision.

pub mod assemble;
pub mod configurator;
pub mod decision;
pub mod process;
pub mod request;
pub mod status;

pub use configurator::LaunchConfigurator;
pub use decision::{AbortKind, LaunchDecision};
pub use process::{ProcessLauncher, ShellLauncher};
pub use request::{LaunchRequest, LaunchRequestBuilder};
pub use status::StatusReport;
