use valctx_core::BuildInfo;

/// Metadata of this build. Commit and date come from the optional
/// `VALCTX_COMMIT_HASH` and `VALCTX_BUILD_DATE` compile-time variables.
pub(crate) const BUILD_INFO: BuildInfo = BuildInfo::new(
    env!("CARGO_PKG_VERSION"),
    match option_env!("VALCTX_COMMIT_HASH") {
        Some(hash) => hash,
        None => "main",
    },
    match option_env!("VALCTX_BUILD_DATE") {
        Some(date) => date,
        None => "unknown",
    },
);
