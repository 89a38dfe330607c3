use anyhow::Result;

use super::TextureImage;

/// Texture uploaded to the GPU, with the view and sampler the shader binds.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl GpuTexture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Creates an sRGB texture from `image` and writes its pixels.
    ///
    /// Fails if the image does not fit the device's 2D texture limit.
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &TextureImage) -> Result<Self> {
        check_dimensions(
            image.width(),
            image.height(),
            device.limits().max_texture_dimension_2d,
        )?;

        let size = wgpu::Extent3d {
            width: image.width(),
            height: image.height(),
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("cubic cube texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.rgba(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width() * 4),
                rows_per_image: Some(image.height()),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("cubic cube sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
        })
    }
}

fn check_dimensions(width: u32, height: u32, max: u32) -> Result<()> {
    anyhow::ensure!(
        width <= max && height <= max,
        "texture is {width}x{height}, larger than the device limit of {max}x{max}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_within_limit_pass() {
        assert!(check_dimensions(8192, 1, 8192).is_ok());
        assert!(check_dimensions(1, 1, 8192).is_ok());
    }

    #[test]
    fn dimensions_over_limit_fail_with_sizes() {
        let err = check_dimensions(9000, 1, 8192).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("9000x1"), "{msg}");
        assert!(msg.contains("8192"), "{msg}");
        assert!(check_dimensions(1, 8193, 8192).is_err());
    }

    #[test]
    fn oversized_upload_is_an_error() {
        let (device, queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let max = device.limits().max_texture_dimension_2d;
        let image = TextureImage::from_rgba8(max + 1, 1, vec![0; (max as usize + 1) * 4]).unwrap();
        assert!(GpuTexture::upload(&device, &queue, &image).is_err());
    }

    #[test]
    fn upload_within_limit_succeeds() {
        let (device, queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let image = TextureImage::from_rgba8(2, 2, vec![255; 16]).unwrap();
        let texture = GpuTexture::upload(&device, &queue, &image).unwrap();
        assert_eq!(texture.texture.width(), 2);
    }
}
