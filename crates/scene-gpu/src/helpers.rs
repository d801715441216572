use glam::Vec3;
use scene_core::{Camera, Mesh, ObjectId, Scene};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalsUniform {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniform {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) emissive: [f32; 4],
}

impl GlobalsUniform {
    pub(crate) fn new(scene: &Scene, camera: &Camera) -> Self {
        let light = &scene.light;
        let ambient = scene.ambient.color.to_vec3() * scene.ambient.intensity;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_dir: light.direction().extend(light.intensity).to_array(),
            light_color: light.color.to_vec3().extend(1.0).to_array(),
            ambient: ambient.extend(1.0).to_array(),
        }
    }
}

/// Expand an indexed mesh into unshared vertices carrying the face normal,
/// giving the faceted look of flat-shaded solids.
pub fn flat_vertices(mesh: &Mesh) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(mesh.triangle_count() * 3);
    for [a, b, c] in mesh.triangles() {
        let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
        for p in [a, b, c] {
            out.push(Vertex {
                position: p.to_array(),
                normal,
            });
        }
    }
    out
}

/// Order objects for drawing: opaque ones in traversal order, then
/// transparent ones from farthest to nearest `eye`.
pub fn draw_order(scene: &Scene, eye: Vec3) -> Vec<ObjectId> {
    let (mut transparent, opaque): (Vec<_>, Vec<_>) =
        scene.iter().partition(|(_, o)| o.material.transparent);
    transparent.sort_by(|(_, a), (_, b)| {
        let da = a.position.distance_squared(eye);
        let db = b.position.distance_squared(eye);
        db.total_cmp(&da)
    });
    opaque
        .into_iter()
        .chain(transparent)
        .map(|(id, _)| id)
        .collect()
}

pub fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    transparent: bool,
) -> wgpu::RenderPipeline {
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
    let (label, blend) = if transparent {
        ("scene_pipeline_transparent", Some(wgpu::BlendState::ALPHA_BLENDING))
    } else {
        ("scene_pipeline_opaque", Some(wgpu::BlendState::REPLACE))
    };
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..wgpu::PrimitiveState::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            // transparent surfaces test against opaque depth but do not occlude each other
            depth_write_enabled: !transparent,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
