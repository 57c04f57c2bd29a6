pub mod exporter;
pub mod identity;
pub mod options;
pub mod reporter;

pub use exporter::{ExportSummary, Exporter};
pub use identity::{IdentityMap, IdentityResolver};
pub use options::ExportOptions;
pub use reporter::{ConsoleReporter, NullReporter, Reporter};
