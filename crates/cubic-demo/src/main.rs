mod app;
mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cubic_engine::coords::ColorRgba;
use cubic_engine::logging::init_logging;
use cubic_engine::texture::TextureImage;
use cubic_engine::window::Runtime;

use crate::app::SpinningCube;
use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let image = match &cli.texture {
        Some(path) => TextureImage::load(path)?,
        None => {
            log::info!("no texture given; using a checkerboard");
            default_texture()
        }
    };

    let app = SpinningCube::new(image, cli.cube_transform(), cli.title.clone(), cli.show_fps);
    Runtime::run(cli.runtime_config(), cli.gpu_init(), app)
}

fn default_texture() -> TextureImage {
    TextureImage::checkerboard(
        256,
        8,
        ColorRgba::new(0.95, 0.55, 0.1, 1.0),
        ColorRgba::new(0.1, 0.1, 0.12, 1.0),
    )
}
