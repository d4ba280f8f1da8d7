use std::collections::hash_map::Entry;
use std::rc::Rc;

use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::model::{Shape, SurfaceId};

use super::RenderModel;

/// Whether [`RenderModelCache::build_or_update`] found an existing record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CacheLookup {
    Hit,
    Miss,
}

/// Scene-scoped store of one [`RenderModel`] per surface.
///
/// Unbounded; entries live until [`flush`](Self::flush). Records are boxed so
/// their addresses survive map growth.
///
/// Invariant: at most one record per [`SurfaceId`], and that record's
/// `surface_id()` equals its key.
#[derive(Debug, Default)]
pub struct RenderModelCache {
    models: FxHashMap<SurfaceId, Box<RenderModel>>,
}

impl RenderModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for surface `index` of `shape`, refreshed for this frame.
    ///
    /// A miss builds and stores a new record; a hit updates the stored one in place.
    pub fn build_or_update(
        &mut self,
        shape: &Rc<Shape>,
        index: usize,
        transform: Mat4,
        projection: Mat4,
        viewport: Mat4,
    ) -> (&mut RenderModel, CacheLookup) {
        let id = shape.surfaces()[index].id();
        match self.models.entry(id) {
            Entry::Occupied(entry) => {
                let model = &mut **entry.into_mut();
                model.update(transform, projection, viewport);
                (model, CacheLookup::Hit)
            }
            Entry::Vacant(entry) => {
                log::trace!("render model cache miss for surface {}", id.get());
                let model = RenderModel::new(Rc::clone(shape), index, transform, projection, viewport);
                (&mut **entry.insert(Box::new(model)), CacheLookup::Miss)
            }
        }
    }

    #[inline]
    pub fn get(&self, id: SurfaceId) -> Option<&RenderModel> {
        self.models.get(&id).map(|m| &**m)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: SurfaceId) -> Option<&mut RenderModel> {
        self.models.get_mut(&id).map(|m| &mut **m)
    }

    #[inline]
    pub fn contains(&self, id: SurfaceId) -> bool {
        self.models.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Drops every record.
    pub fn flush(&mut self) {
        log::debug!("flushing render model cache ({} entries)", self.models.len());
        self.models.clear();
    }
}
