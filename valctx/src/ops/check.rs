//! Check operation - resolution without writing.

use std::path::Path;

use valctx_codegen::GenerationRequest;

use crate::reports::CheckReport;

/// Wrap a resolved request for display.
pub fn check(request: GenerationRequest, config_path: Option<&Path>) -> CheckReport {
    CheckReport {
        config_path: config_path.map(Path::to_path_buf),
        request,
    }
}
