use cubic_engine::coords::ColorRgba;
use cubic_engine::core::{App, AppControl, FrameCtx};
use cubic_engine::math::{model_view_projection, CubeTransform};
use cubic_engine::render::CubeRenderer;
use cubic_engine::texture::TextureImage;
use cubic_engine::time::FrameRate;

const CLEAR: ColorRgba = ColorRgba::new(0.02, 0.02, 0.025, 1.0);

/// The whole demo: one cube, one draw per frame.
pub struct SpinningCube {
    renderer: CubeRenderer,
    transform: CubeTransform,
    title: String,
    show_fps: bool,
    frame_rate: FrameRate,
}

impl SpinningCube {
    pub fn new(image: TextureImage, transform: CubeTransform, title: String, show_fps: bool) -> Self {
        Self {
            renderer: CubeRenderer::new(image),
            transform,
            title,
            show_fps,
            frame_rate: FrameRate::new(1.0),
        }
    }
}

impl App for SpinningCube {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(fps) = self.frame_rate.record(ctx.time.dt) {
            log::debug!("{fps:.1} fps (frame {})", ctx.time.frame_index);
            if self.show_fps {
                ctx.runtime.set_title(format!("{} ({fps:.0} fps)", self.title));
            }
        }

        let aspect = ctx.window.viewport().aspect();
        let mvp = model_view_projection(aspect, ctx.time.elapsed, &self.transform);

        let renderer = &mut self.renderer;
        let mut drawn = Ok(());
        let control = ctx.render(CLEAR, |rctx, target| {
            drawn = renderer.render(rctx, target, mvp);
        });

        if let Err(err) = drawn {
            ctx.runtime.fail(err);
            return AppControl::Exit;
        }
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_dark_and_opaque() {
        let luminance = 0.2126 * CLEAR.r + 0.7152 * CLEAR.g + 0.0722 * CLEAR.b;
        assert!(luminance < 0.05, "clear color too bright: {CLEAR:?}");
        assert_eq!(CLEAR.a, 1.0);
    }
}
