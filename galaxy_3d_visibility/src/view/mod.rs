/// View module - per-frame visibility results and the builders producing them

mod frame;
mod render_list;
mod instancing;
mod scene_view;
mod shadow_view;
mod draw_list_builder;
mod shadow_view_builder;
mod pipeline;

pub use frame::{FrameContext, FrameStats};
pub use render_list::{
    batch_instances, InstanceBatch, InstanceTransforms, InstancedRenderList, MeshDrawData,
    MeshInstance, RasterizerState, RenderList, RenderPassKind,
};
pub use instancing::{BuiltinCasterInstancing, BuiltinMeshInstancing, InstancingPolicy, NoInstancing};
pub use scene_view::SceneView;
pub use shadow_view::{CubeFaceView, LightShadowView, PointShadowView, ShadowView};
pub use draw_list_builder::DrawListBuilder;
pub use shadow_view_builder::ShadowViewBuilder;
pub use pipeline::{FrameViews, VisibilityPipeline};
