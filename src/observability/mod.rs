/// Operator-facing observability
pub mod audit;

pub use audit::AuditLog;
