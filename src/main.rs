//! Binary entry point for the interactive gallery viewer.

use galleria::{Options, Viewer};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let manifest = args.next();
    let preset = args.next();

    let mut builder = Viewer::builder().with_title("Galleria");

    if let Some(path) = manifest {
        builder = builder.with_manifest(path);
    }

    if let Some(preset_path) = preset {
        match Options::load(std::path::Path::new(&preset_path)) {
            Ok(options) => builder = builder.with_options(options),
            Err(e) => {
                log::error!("failed to load preset {preset_path}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = builder.run() {
        log::error!("viewer exited with error: {e}");
        std::process::exit(1);
    }
}
