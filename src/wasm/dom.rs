use std::collections::BTreeMap;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::render::CanvasContext;
use crate::error::{BackgroundError, Result};
use crate::geometry::{Size, Viewport};
use crate::surface::{Surface, SurfaceId, SurfaceManager, FALLBACK_BACKGROUND};

const CANVAS_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
];

struct Mounted {
    canvas: HtmlCanvasElement,
    on_resize: Closure<dyn FnMut()>,
}

/// Canvas elements appended to `document.body`, each kept at window size by
/// its own resize listener.
pub struct DomSurfaces {
    window: Window,
    document: Document,
    mounted: BTreeMap<SurfaceId, Mounted>,
    next_id: u32,
}

fn window_size(window: &Window) -> Size {
    let read = |v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Size::new(read(window.inner_width()), read(window.inner_height()))
}

impl DomSurfaces {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
        let document = window.document().ok_or(BackgroundError::NoDocument)?;
        Ok(Self {
            window,
            document,
            mounted: BTreeMap::new(),
            next_id: 0,
        })
    }

    /// The canvas element behind a mounted surface.
    pub fn canvas(&self, id: SurfaceId) -> Option<&HtmlCanvasElement> {
        self.mounted.get(&id).map(|m| &m.canvas)
    }
}

impl SurfaceManager for DomSurfaces {
    type Context = CanvasContext;

    fn create_surface(&mut self) -> Result<Surface<CanvasContext>> {
        let body = self.document.body().ok_or(BackgroundError::NoBody)?;
        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| BackgroundError::Dom("canvas element has the wrong type".into()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(BackgroundError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| BackgroundError::ContextUnavailable)?;

        let style = canvas.style();
        for (prop, value) in CANVAS_STYLE {
            style.set_property(prop, value)?;
        }
        let size = window_size(&self.window);
        canvas.set_width(size.width);
        canvas.set_height(size.height);

        let body_style = body.style();
        body_style.set_property("background", FALLBACK_BACKGROUND)?;
        body_style.set_property("background-image", "none")?;
        body.append_child(&canvas)?;

        let viewport = Viewport::new(size);
        let on_resize = {
            let window = self.window.clone();
            let canvas = canvas.clone();
            let viewport = viewport.clone();
            Closure::wrap(Box::new(move || {
                let size = window_size(&window);
                canvas.set_width(size.width);
                canvas.set_height(size.height);
                viewport.set(size);
            }) as Box<dyn FnMut()>)
        };
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            canvas.remove();
            return Err(err.into());
        }

        self.next_id += 1;
        let id = SurfaceId(self.next_id);
        self.mounted.insert(id, Mounted { canvas, on_resize });
        Ok(Surface::new(id, viewport, CanvasContext::new(ctx)))
    }

    fn destroy_surface(&mut self, surface: &Surface<CanvasContext>) {
        let Some(mounted) = self.mounted.remove(&surface.id()) else {
            log::trace!("surface {:?} already destroyed", surface.id());
            return;
        };
        let listener = mounted.on_resize.as_ref().unchecked_ref();
        if let Err(err) = self.window.remove_event_listener_with_callback("resize", listener) {
            log::warn!("could not detach resize listener: {err:?}");
        }
        mounted.canvas.remove();
    }

    fn live_surfaces(&self) -> usize {
        self.mounted.len()
    }
}
