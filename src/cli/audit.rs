//! Audit log CLI command

use clap::Args;

use crate::audit::AuditLogger;
use crate::error::TiffinResult;

/// Arguments for `tiffin audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `tiffin audit`
pub fn handle_audit(logger: &AuditLogger, audit_enabled: bool, args: AuditArgs) -> TiffinResult<()> {
    if !audit_enabled {
        println!("Audit logging is disabled (audit_enabled = false in config.json).");
    }

    if !logger.exists() {
        println!("No changes recorded yet ({}).", logger.path().display());
        return Ok(());
    }

    let entries = logger.read_recent(args.limit)?;
    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
