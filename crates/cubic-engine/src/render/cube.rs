use anyhow::{Context, Result};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::math::TransformUniform;
use crate::mesh::{CubeVertex, CUBE_VERTEX_COUNT, CUBE_VERTICES};
use crate::render::{RenderCtx, RenderTarget};
use crate::texture::{GpuTexture, TextureImage};

const SHADER_SRC: &str = include_str!("shaders/cube.wgsl");

const BINDING_TRANSFORM: u32 = 0;
const BINDING_SAMPLER: u32 = 1;
const BINDING_TEXTURE: u32 = 2;

/// Draws the textured cube with a single draw call.
///
/// GPU resources are created on the first `render` call. The pipeline is
/// rebuilt if the surface or depth format changes; buffers and the texture
/// live for the renderer's lifetime.
pub struct CubeRenderer {
    pending_image: Option<TextureImage>,

    pipeline_formats: Option<(wgpu::TextureFormat, Option<wgpu::TextureFormat>)>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
    texture: Option<GpuTexture>,
}

impl CubeRenderer {
    /// `image` is uploaded on the first frame.
    pub fn new(image: TextureImage) -> Self {
        Self {
            pending_image: Some(image),
            pipeline_formats: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            transform_ubo: None,
            vertex_buffer: None,
            texture: None,
        }
    }

    /// Records one render pass drawing the cube with `mvp` into `target`.
    ///
    /// The pass loads existing color and depth; clearing is the caller's job.
    /// Fails if the texture cannot be uploaded to this device.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mvp: Mat4,
    ) -> Result<()> {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_texture(ctx)?;
        self.ensure_bindings(ctx);

        let Some(ubo) = self.transform_ubo.as_ref() else { return Ok(()) };
        ctx.queue
            .write_buffer(ubo, 0, bytemuck::bytes_of(&TransformUniform::from_mat4(mvp)));

        let Some(pipeline) = self.pipeline.as_ref() else { return Ok(()) };
        let Some(bind_group) = self.bind_group.as_ref() else { return Ok(()) };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return Ok(()) };

        let depth_stencil_attachment = match (ctx.depth_format, target.depth_view) {
            (Some(_), Some(view)) => Some(wgpu::RenderPassDepthStencilAttachment {
                view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            (Some(_), None) => {
                log::warn!("CubeRenderer: pipeline expects depth but target has none; skipped");
                return Ok(());
            }
            (None, _) => None,
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cubic cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(0..CUBE_VERTEX_COUNT, 0..1);
        Ok(())
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let formats = (ctx.surface_format, ctx.depth_format);
        if self.pipeline_formats == Some(formats) && self.pipeline.is_some() {
            return;
        }

        log::debug!("CubeRenderer: building pipeline for {formats:?}");

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cubic cube shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("cubic cube bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: BINDING_TRANSFORM,
                            visibility: wgpu::ShaderStages::VERTEX,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: wgpu::BufferSize::new(
                                    std::mem::size_of::<TransformUniform>() as u64,
                                ),
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: BINDING_SAMPLER,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: BINDING_TEXTURE,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("cubic cube pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cubic cube pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CubeVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: ctx.depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_formats = Some(formats);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind groups reference the layout; rebuild them against the new one.
        self.bind_group = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_none() {
            self.vertex_buffer =
                Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cubic cube vbo"),
                    contents: bytemuck::cast_slice(&CUBE_VERTICES),
                    usage: wgpu::BufferUsages::VERTEX,
                }));
        }

        if self.transform_ubo.is_none() {
            self.transform_ubo =
                Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cubic cube transform ubo"),
                    contents: bytemuck::bytes_of(&TransformUniform::default()),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                }));
        }
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        if self.texture.is_some() {
            return Ok(());
        }
        let Some(image) = self.pending_image.take() else { return Ok(()) };

        log::debug!("CubeRenderer: uploading {}x{} texture", image.width(), image.height());
        let texture = GpuTexture::upload(ctx.device, ctx.queue, &image)
            .context("cube texture cannot be used on this GPU")?;
        self.texture = Some(texture);
        self.bind_group = None;
        Ok(())
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(ubo) = self.transform_ubo.as_ref() else { return };
        let Some(texture) = self.texture.as_ref() else { return };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cubic cube bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: BINDING_TRANSFORM,
                    resource: ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: BINDING_SAMPLER,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: BINDING_TEXTURE,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
            ],
        }));
    }
}
