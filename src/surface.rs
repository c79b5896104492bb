//! Full-viewport drawing surfaces.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::draw::recording::RecordingContext;
use crate::draw::DrawContext;
use crate::error::Result;
use crate::geometry::{Size, Viewport};

/// Page colour shown while a surface is mounted, so a half-built surface
/// never reveals the previous background.
pub const FALLBACK_BACKGROUND: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(pub(crate) u32);

/// A mounted drawing target. Its viewport is kept equal to the window size by
/// the manager that created it.
pub struct Surface<C> {
    id: SurfaceId,
    viewport: Viewport,
    context: Rc<RefCell<C>>,
}

impl<C> Surface<C> {
    pub fn new(id: SurfaceId, viewport: Viewport, context: C) -> Self {
        Self {
            id,
            viewport,
            context: Rc::new(RefCell::new(context)),
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn size(&self) -> Size {
        self.viewport.get()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn context(&self) -> Rc<RefCell<C>> {
        self.context.clone()
    }
}

pub trait SurfaceManager {
    type Context: DrawContext + 'static;

    /// Mount a new surface behind all content and start tracking the window
    /// size for it.
    fn create_surface(&mut self) -> Result<Surface<Self::Context>>;

    /// Unmount the surface and detach its resize tracking. Destroying a
    /// surface that is already gone does nothing.
    fn destroy_surface(&mut self, surface: &Surface<Self::Context>);

    fn live_surfaces(&self) -> usize;
}

struct Mounted {
    viewport: Viewport,
    context: Rc<RefCell<RecordingContext>>,
}

/// Surfaces without a document: a window size the caller controls and
/// recording contexts in place of canvases.
pub struct HeadlessSurfaces {
    window: Size,
    mounted: BTreeMap<SurfaceId, Mounted>,
    next_id: u32,
    created: usize,
    page_background: Option<String>,
}

impl HeadlessSurfaces {
    pub fn new(window: Size) -> Self {
        Self {
            window,
            mounted: BTreeMap::new(),
            next_id: 0,
            created: 0,
            page_background: None,
        }
    }

    pub fn window(&self) -> Size {
        self.window
    }

    /// Simulate a window resize notification.
    pub fn resize(&mut self, window: Size) {
        self.window = window;
        for m in self.mounted.values() {
            m.viewport.set(window);
        }
    }

    pub fn is_mounted(&self, id: SurfaceId) -> bool {
        self.mounted.contains_key(&id)
    }

    /// Recording context of a mounted surface.
    pub fn context(&self, id: SurfaceId) -> Option<Rc<RefCell<RecordingContext>>> {
        self.mounted.get(&id).map(|m| m.context.clone())
    }

    /// Surfaces created over the manager's lifetime.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn page_background(&self) -> Option<&str> {
        self.page_background.as_deref()
    }
}

impl SurfaceManager for HeadlessSurfaces {
    type Context = RecordingContext;

    fn create_surface(&mut self) -> Result<Surface<RecordingContext>> {
        self.next_id += 1;
        let id = SurfaceId(self.next_id);
        self.page_background = Some(FALLBACK_BACKGROUND.to_owned());
        let surface = Surface::new(id, Viewport::new(self.window), RecordingContext::new());
        self.mounted.insert(
            id,
            Mounted {
                viewport: surface.viewport().clone(),
                context: surface.context(),
            },
        );
        self.created += 1;
        Ok(surface)
    }

    fn destroy_surface(&mut self, surface: &Surface<RecordingContext>) {
        if self.mounted.remove(&surface.id()).is_none() {
            log::trace!("surface {:?} already destroyed", surface.id());
        }
    }

    fn live_surfaces(&self) -> usize {
        self.mounted.len()
    }
}
