use serde::Serialize;
use vt_vault::status::EMPTY_VAULT_HINT;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NothingRestored {
    restored: bool,
    hint: &'static str,
}

/// Handle `vtrip restore`: print the cached payload so it can be piped back
/// into `vtrip render` or `vtrip save`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut result = Ok(());
    let restored = ctx
        .vault
        .restore(|payload| result = output(&payload, flags.format));
    if restored {
        return result;
    }
    output(
        &NothingRestored {
            restored: false,
            hint: EMPTY_VAULT_HINT,
        },
        flags.format,
    )
}
