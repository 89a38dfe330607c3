use std::path::PathBuf;

use clap::Parser;
use winit::dpi::LogicalSize;

use cubic_engine::device::GpuInit;
use cubic_engine::logging::LoggingConfig;
use cubic_engine::math::{CubeTransform, Spin};
use cubic_engine::window::RuntimeConfig;

/// Renders a rotating textured cube.
#[derive(Debug, Parser)]
#[command(name = "cubic", version, about, long_about = None)]
pub struct Cli {
    /// Image (PNG or JPEG) mapped onto every face. A checkerboard is used when omitted.
    #[arg(short, long)]
    pub texture: Option<PathBuf>,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Window title.
    #[arg(long, default_value = "cubic")]
    pub title: String,

    /// Present without waiting for vertical sync.
    #[arg(long)]
    pub no_vsync: bool,

    /// Log filter in `env_logger` syntax; overrides RUST_LOG.
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// How fast the rotation axis sweeps around, in radians per second.
    #[arg(long, default_value_t = 1.0, value_name = "RAD/S")]
    pub spin_rate: f32,

    /// Show the frame rate in the window title.
    #[arg(long)]
    pub show_fps: bool,
}

impl Cli {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_filter.clone(),
            ..Default::default()
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width.max(1.0), self.height.max(1.0)),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        let present_mode = if self.no_vsync {
            wgpu::PresentMode::AutoNoVsync
        } else {
            wgpu::PresentMode::Fifo
        };

        GpuInit {
            present_mode,
            ..Default::default()
        }
    }

    pub fn cube_transform(&self) -> CubeTransform {
        CubeTransform {
            spin: Spin {
                axis_rate: self.spin_rate,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cubic").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.texture, None);
        assert_eq!((cli.width, cli.height), (1280.0, 720.0));
        assert_eq!(cli.title, "cubic");
        assert!(!cli.no_vsync && !cli.show_fps);
        assert_eq!(cli.gpu_init().present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(cli.cube_transform(), CubeTransform::default());
    }

    #[test]
    fn flags_feed_the_engine_configs() {
        let cli = parse(&[
            "--texture",
            "crate.png",
            "--width",
            "640",
            "--height",
            "480",
            "--title",
            "demo",
            "--no-vsync",
            "--log",
            "debug",
            "--spin-rate",
            "2.5",
        ]);

        assert_eq!(cli.texture, Some(PathBuf::from("crate.png")));
        assert_eq!(cli.runtime_config().initial_size, LogicalSize::new(640.0, 480.0));
        assert_eq!(cli.runtime_config().title, "demo");
        assert_eq!(cli.gpu_init().present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(cli.logging_config().env_filter.as_deref(), Some("debug"));
        assert_eq!(cli.cube_transform().spin.axis_rate, 2.5);
    }

    #[test]
    fn window_size_is_kept_positive() {
        let cli = parse(&["--width", "0", "--height=-3"]);
        assert_eq!(cli.runtime_config().initial_size, LogicalSize::new(1.0, 1.0));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["cubic", "--wireframe"]).is_err());
    }
}
