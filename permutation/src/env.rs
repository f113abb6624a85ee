use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::EnvError;
use ark_ec::pairing::Pairing;
use poly_commitment::PairingSRS;
use time::macros::format_description;
use tracing::debug;
use tracing_subscriber::{
    fmt::{format::FmtSpan, time::UtcTime},
    EnvFilter,
};

/// Load a MessagePack serialized SRS from `path`.
pub fn get_srs_from_cache<Pair: Pairing>(
    path: impl AsRef<Path>,
) -> Result<PairingSRS<Pair>, EnvError> {
    let path = path.as_ref();
    debug!("Loading SRS from cache {}", path.display());
    let file = File::open(path)?;
    let srs: PairingSRS<Pair> = rmp_serde::from_read(&file)?;
    debug!(
        max_poly_size = srs.max_poly_size(),
        "SRS loaded successfully from cache"
    );
    Ok(srs)
}

/// Store `srs` at `path`, in the format read by [get_srs_from_cache].
pub fn write_srs_to_cache<Pair: Pairing>(
    srs: &PairingSRS<Pair>,
    path: impl AsRef<Path>,
) -> Result<(), EnvError> {
    let path = path.as_ref();
    debug!("Writing SRS to cache {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    rmp_serde::encode::write(&mut writer, srs)?;
    writer.flush()?;
    Ok(())
}

/// Install a console subscriber filtered by `RUST_LOG`. Does nothing if a
/// global subscriber is already set.
pub fn init_console_subscriber() {
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(timer)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stdout)
        .try_init();
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    init_console_subscriber();
}
