#![doc = r#"
iconpack — turn one logo into the square icon set a browser extension package needs.

The conversion loads a source image, resamples it to a square whose side is the
shorter of its two dimensions, then resamples that square to every target size
(16, 32, 48 and 128 px by default) and writes each one as `icon<size>.png`.

Non-square sources are squeezed to a square, not cropped.

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> iconpack::Result<()> {
    for file in iconpack::convert(Path::new("logo.png"))? {
        println!("{} ({}x{})", file.path.display(), file.size, file.size);
    }
    Ok(())
}
```

Custom parameters
-----------------
```rust,no_run
use iconpack::{IconConfig, OutputFormat, ResampleFilter, convert_with_config};

fn main() -> iconpack::Result<()> {
    let config = IconConfig {
        source: "art/logo.png".into(),
        output_dir: "dist/icons".into(),
        sizes: vec![16, 24, 32, 64],
        format: OutputFormat::Png,
        filter: ResampleFilter::CatmullRom,
    };
    convert_with_config(&config, |file| println!("wrote {}", file.file_name()))?;
    Ok(())
}
```

Error handling
--------------
```rust,no_run
use std::path::Path;
use iconpack::{ErrorKind, convert};

fn main() {
    match convert(Path::new("logo.png")) {
        Ok(files) => println!("{} icons", files.len()),
        Err(e) if e.kind() == ErrorKind::SourceNotFound => eprintln!("place logo.png first"),
        Err(e) => eprintln!("{e}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — output formats, filters and result records.
- [`io`] — source decoding and icon encoding.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use core::params::{DEFAULT_SIZES, DEFAULT_SOURCE, IconConfig};
pub use error::{ConversionCause, Error, ErrorKind, Result};
pub use io::{SourceImage, load_source};
pub use types::{OutputFormat, RenderedIcon, ResampleFilter, WrittenFile, icon_file_name};

pub use api::{convert, convert_with_config, render_icons};
