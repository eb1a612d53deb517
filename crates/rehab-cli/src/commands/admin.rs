use rehab_core::access::{GateDecision, admin_gate, is_admin_path};
use rehab_core::validation::validate_login;
use serde::Serialize;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GateResponse<'a> {
    path: &'a str,
    admin: bool,
    authenticated: bool,
    decision: GateDecision,
}

/// Handle `rehab admin`.
pub fn handle(action: &AdminCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Gate {
            path,
            authenticated,
        } => output(
            &GateResponse {
                path,
                admin: is_admin_path(path),
                authenticated: *authenticated,
                decision: admin_gate(path, *authenticated),
            },
            flags.format,
        ),
        AdminCommands::CheckLogin { email, password } => {
            validate_login(email, password)?;
            output(&json!({ "valid": true }), flags.format)
        }
    }
}
