pub mod config;
pub mod domain;
pub mod json_codec;
pub mod member_client;
pub mod routes;
pub mod startup;
pub mod telemetry;

/// Writes an error followed by every source in its chain, one per line.
pub fn error_chain_fmt(
    err: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}", err)?;
    let mut current = err.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t({})", cause)?;
        current = cause.source();
    }
    Ok(())
}
