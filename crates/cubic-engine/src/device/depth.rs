use winit::dpi::PhysicalSize;

/// Depth attachment kept in step with the surface size.
pub struct DepthBuffer {
    format: wgpu::TextureFormat,
    extent: wgpu::Extent3d,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, size: PhysicalSize<u32>) -> Self {
        let extent = depth_extent(size);
        let (texture, view) = create_depth_texture(device, format, extent);
        Self {
            format,
            extent,
            texture,
            view,
        }
    }

    /// Re-creates the depth texture when `size` no longer matches it.
    ///
    /// Returns `true` if a new texture was allocated.
    pub fn ensure_size(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) -> bool {
        let extent = depth_extent(size);
        if extent == self.extent {
            return false;
        }

        log::debug!(
            "depth buffer {}x{} -> {}x{}",
            self.extent.width,
            self.extent.height,
            extent.width,
            extent.height
        );

        self.texture.destroy();
        let (texture, view) = create_depth_texture(device, self.format, extent);
        self.texture = texture;
        self.view = view;
        self.extent = extent;
        true
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Texture extent for a depth buffer covering `size`.
///
/// Zero dimensions (minimized window) are clamped to 1.
pub fn depth_extent(size: PhysicalSize<u32>) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width.max(1),
        height: size.height.max(1),
        depth_or_array_layers: 1,
    }
}

fn create_depth_texture(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    extent: wgpu::Extent3d,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cubic depth texture"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_matches_surface_size() {
        let e = depth_extent(PhysicalSize::new(800, 600));
        assert_eq!((e.width, e.height, e.depth_or_array_layers), (800, 600, 1));
    }

    #[test]
    fn extent_clamps_zero_dimensions() {
        let e = depth_extent(PhysicalSize::new(0, 0));
        assert_eq!((e.width, e.height), (1, 1));

        let e = depth_extent(PhysicalSize::new(640, 0));
        assert_eq!((e.width, e.height), (640, 1));
    }

    #[test]
    fn ensure_size_reallocates_only_on_change() {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let format = wgpu::TextureFormat::Depth24Plus;
        let mut depth = DepthBuffer::new(&device, format, PhysicalSize::new(800, 600));

        assert!(!depth.ensure_size(&device, PhysicalSize::new(800, 600)));
        assert!(depth.ensure_size(&device, PhysicalSize::new(640, 480)));
        assert_eq!((depth.texture.width(), depth.texture.height()), (640, 480));
        assert!(!depth.ensure_size(&device, PhysicalSize::new(640, 480)));
        assert_eq!(depth.format(), format);
    }

    #[test]
    fn minimized_surface_keeps_a_one_pixel_buffer() {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let mut depth =
            DepthBuffer::new(&device, wgpu::TextureFormat::Depth24Plus, PhysicalSize::new(0, 0));
        assert_eq!((depth.texture.width(), depth.texture.height()), (1, 1));

        // 0x0 and 1x1 map to the same extent.
        assert!(!depth.ensure_size(&device, PhysicalSize::new(1, 1)));
        assert!(depth.ensure_size(&device, PhysicalSize::new(2, 2)));
    }

    #[test]
    fn equal_sizes_produce_equal_extents() {
        // `ensure_size` relies on this to skip re-allocation.
        assert_eq!(
            depth_extent(PhysicalSize::new(0, 5)),
            depth_extent(PhysicalSize::new(1, 5))
        );
        assert_ne!(
            depth_extent(PhysicalSize::new(2, 5)),
            depth_extent(PhysicalSize::new(1, 5))
        );
    }
}
