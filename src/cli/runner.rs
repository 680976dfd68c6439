use std::io::{self, Write};

use tracing::{debug, warn};

use iconpack::{Error, IconConfig, WrittenFile, convert_with_config};

use super::args::CliArgs;

/// Run the conversion for `config`, writing the human-readable transcript to `out`.
///
/// Console write failures are ignored; the conversion result is what decides the
/// exit status.
pub fn report_conversion<W: Write>(
    config: &IconConfig,
    out: &mut W,
) -> Result<Vec<WrittenFile>, Error> {
    let result = convert_with_config(config, |file| {
        let _ = writeln!(
            out,
            "✅ Generated: {} ({}x{})",
            file.file_name(),
            file.size,
            file.size
        );
    });

    match &result {
        Ok(_) => {
            let _ = writeln!(out, "\n🎉 All icons generated!");
        }
        Err(Error::SourceNotFound { path }) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let _ = writeln!(out, "❌ Error: {} not found", name);
            let _ = writeln!(
                out,
                "Please make sure {} is in the project root directory",
                name
            );
        }
        Err(Error::ConversionFailed(cause)) => {
            let _ = writeln!(out, "❌ Conversion failed: {}", cause);
        }
        Err(other) => {
            let _ = writeln!(out, "❌ Conversion failed: {}", other);
        }
    }
    result
}

pub fn run(args: CliArgs) -> Result<(), Error> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let config = IconConfig::default();
    debug!("Using {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match report_conversion(&config, &mut out) {
        Ok(files) => {
            debug!("{} icons written", files.len());
            Ok(())
        }
        Err(e) => {
            warn!("Conversion did not complete: {}", e);
            Err(e)
        }
    }
}
