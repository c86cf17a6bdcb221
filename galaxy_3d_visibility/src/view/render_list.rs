/// Render lists — ordered object lists, per-mesh instanced lookups, and
/// their split into fixed-size instanced draw batches.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::config::InstanceBatchLimits;
use crate::scene::{MeshId, MeshKind, ObjectKey, Scene};

// ===== RENDER LIST =====

/// Ordered object list; keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderList {
    objects: Vec<ObjectKey>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: ObjectKey) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, object: ObjectKey) -> bool {
        self.objects.contains(&object)
    }

    pub fn as_slice(&self) -> &[ObjectKey] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.objects.iter().copied()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Stable sort: objects whose primary mesh is built-in first, ordered by
    /// mesh id; custom meshes after, in their current order.
    pub fn sort_by_mesh(&mut self, scene: &Scene) {
        self.objects.sort_by_key(|key| mesh_sort_key(scene, *key));
    }
}

/// (0, id) for built-ins, (1, 0) for custom meshes, (2, 0) for unknown.
fn mesh_sort_key(scene: &Scene, key: ObjectKey) -> (u8, u32) {
    match scene.object(key).and_then(|o| o.primary_mesh()) {
        Some(mesh) if mesh.id.is_builtin() => (0, mesh.id.0),
        Some(_) => (1, 0),
        None => (2, 0),
    }
}

impl From<Vec<ObjectKey>> for RenderList {
    fn from(objects: Vec<ObjectKey>) -> Self {
        Self { objects }
    }
}

impl<'a> IntoIterator for &'a RenderList {
    type Item = &'a ObjectKey;
    type IntoIter = std::slice::Iter<'a, ObjectKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

// ===== INSTANCED RENDER LIST =====

/// Objects grouped by mesh for instanced drawing.
///
/// Within a mesh, objects keep insertion order; meshes iterate in the
/// order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct InstancedRenderList {
    lookup: FxHashMap<MeshId, Vec<ObjectKey>>,
    order: Vec<MeshId>,
}

impl InstancedRenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mesh: MeshId, object: ObjectKey) {
        self.lookup
            .entry(mesh)
            .or_insert_with(|| {
                self.order.push(mesh);
                Vec::new()
            })
            .push(object);
    }

    pub fn get(&self, mesh: MeshId) -> Option<&[ObjectKey]> {
        self.lookup.get(&mesh).map(Vec::as_slice)
    }

    /// Meshes in first-seen order
    pub fn meshes(&self) -> &[MeshId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &[ObjectKey])> + '_ {
        self.order
            .iter()
            .filter_map(|mesh| self.lookup.get(mesh).map(|objects| (*mesh, objects.as_slice())))
    }

    pub fn contains(&self, object: ObjectKey) -> bool {
        self.lookup.values().any(|objects| objects.contains(&object))
    }

    /// Number of distinct meshes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_instances(&self) -> usize {
        self.lookup.values().map(Vec::len).sum()
    }

    /// Reorder meshes: built-ins ascending by id, then custom meshes
    pub fn sort_meshes(&mut self) {
        self.order.sort_by_key(|mesh| (!mesh.is_builtin(), mesh.0));
    }

    /// Split every mesh's instances into batches sized for `pass`.
    pub fn batches(&self, pass: RenderPassKind, limits: &InstanceBatchLimits) -> Vec<InstanceBatch<'_>> {
        let max_instances = limits.for_pass(pass);
        self.iter()
            .flat_map(|(mesh, objects)| batch_instances(mesh, objects, pass, max_instances))
            .collect()
    }
}

// ===== BATCHING =====

/// Render pass an instanced batch is prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPassKind {
    ZPrePass,
    GBuffer,
    ShadowDepth,
}

impl RenderPassKind {
    pub fn is_shadow_pass(self) -> bool {
        matches!(self, RenderPassKind::ShadowDepth)
    }
}

/// Triangle-face culling for a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterizerState {
    CullNone,
    CullBack,
    CullFront,
}

impl RasterizerState {
    /// Flat meshes are two-sided; solid meshes cull back faces in camera
    /// passes and front faces in shadow depth passes.
    pub fn for_mesh(kind: MeshKind, pass: RenderPassKind) -> Self {
        match (kind, pass.is_shadow_pass()) {
            (MeshKind::Flat, _) => RasterizerState::CullNone,
            (MeshKind::Solid, false) => RasterizerState::CullBack,
            (MeshKind::Solid, true) => RasterizerState::CullFront,
        }
    }
}

/// One instanced draw: a contiguous slice of a mesh's instance list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceBatch<'a> {
    pub mesh: MeshId,
    pub rasterizer: RasterizerState,
    /// Index of `objects[0]` in the mesh's full instance list
    pub first: usize,
    pub objects: &'a [ObjectKey],
}

/// Per-instance matrices as uploaded to the instance buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceTransforms {
    pub world: Mat4,
    /// Inverse-transpose of `world`
    pub normal: Mat4,
    pub world_view_proj: Mat4,
}

impl InstanceTransforms {
    pub fn new(world: Mat4, view_projection: &Mat4) -> Self {
        Self {
            world,
            normal: world.inverse().transpose(),
            world_view_proj: *view_projection * world,
        }
    }
}

impl InstanceBatch<'_> {
    /// Instance matrices for every object of the batch still in `scene`.
    pub fn instance_transforms(&self, scene: &Scene, view_projection: &Mat4) -> Vec<InstanceTransforms> {
        self.objects
            .iter()
            .filter_map(|key| scene.object(*key))
            .map(|object| InstanceTransforms::new(*object.world_matrix(), view_projection))
            .collect()
    }
}

/// Split `objects` into `ceil(N / max_instances)` batches; batch `i` covers
/// `[i * max, min((i + 1) * max, N))`. No batch is empty.
pub fn batch_instances<'a>(
    mesh: MeshId,
    objects: &'a [ObjectKey],
    pass: RenderPassKind,
    max_instances: usize,
) -> impl Iterator<Item = InstanceBatch<'a>> + 'a {
    let max_instances = max_instances.max(1);
    let rasterizer = RasterizerState::for_mesh(mesh.kind(), pass);
    objects
        .chunks(max_instances)
        .enumerate()
        .map(move |(i, chunk)| InstanceBatch {
            mesh,
            rasterizer,
            first: i * max_instances,
            objects: chunk,
        })
}

// ===== MESH DRAW DATA =====

/// One visible mesh instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub object: ObjectKey,
    pub world: Mat4,
}

/// Per-mesh visible instances of one view, built from per-mesh boxes
/// (used for point-light cubemap faces).
#[derive(Debug, Clone, Default)]
pub struct MeshDrawData {
    lookup: FxHashMap<MeshId, Vec<MeshInstance>>,
    order: Vec<MeshId>,
}

impl MeshDrawData {
    pub fn add(&mut self, mesh: MeshId, object: ObjectKey, world: Mat4) {
        self.lookup
            .entry(mesh)
            .or_insert_with(|| {
                self.order.push(mesh);
                Vec::new()
            })
            .push(MeshInstance { object, world });
    }

    pub fn instances(&self, mesh: MeshId) -> &[MeshInstance] {
        self.lookup.get(&mesh).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn meshes(&self) -> &[MeshId] {
        &self.order
    }

    pub fn contains_object(&self, object: ObjectKey) -> bool {
        self.lookup.values().flatten().any(|i| i.object == object)
    }

    pub fn total_instances(&self) -> usize {
        self.lookup.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[path = "render_list_tests.rs"]
mod tests;
