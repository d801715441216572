//! DOM control panel bound to the live [`ControlParameters`].
//!
//! Range inputs keep values inside the widget limits; the handlers write the
//! parsed value straight into the shared parameters, which the frame loop
//! reads on its next tick.

use crate::dom::js_err;
use scene_core::{
    Color, ControlParameters, OPACITY_RANGE, OPACITY_STEP, ROTATION_SPEED_RANGE,
    ROTATION_SPEED_STEP,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:8px;right:8px;padding:8px 12px;\
background:rgba(20,20,24,0.85);color:#eee;font:12px sans-serif;border-radius:4px;";

const ROW_STYLE: &str = "display:flex;gap:8px;align-items:center;justify-content:space-between;";

pub struct ControlPanel {
    pub root: web::HtmlElement,
}

impl ControlPanel {
    pub fn mount(
        document: &web::Document,
        controls: Rc<RefCell<ControlParameters>>,
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        let root: web::HtmlElement = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
        root.set_id("controls");
        root.set_attribute("style", PANEL_STYLE).map_err(js_err)?;

        let initial = controls.borrow().clone();

        let speed = range_input(
            document,
            ROTATION_SPEED_RANGE,
            ROTATION_SPEED_STEP,
            initial.rotation_speed,
        )?;
        let c = controls.clone();
        on_input(&speed, move |value| match value.parse::<f32>() {
            Ok(v) => c.borrow_mut().set_rotation_speed(v),
            Err(e) => log::warn!("[controls] bad rotation speed {value:?}: {e}"),
        })?;
        append_row(document, &root, "rotationSpeed", &speed)?;

        let opacity = range_input(document, OPACITY_RANGE, OPACITY_STEP, initial.opacity)?;
        let c = controls.clone();
        on_input(&opacity, move |value| match value.parse::<f32>() {
            Ok(v) => c.borrow_mut().set_opacity(v),
            Err(e) => log::warn!("[controls] bad opacity {value:?}: {e}"),
        })?;
        append_row(document, &root, "opacity", &opacity)?;

        let color = input(document, "color")?;
        color.set_value(&initial.color.to_string());
        let c = controls;
        on_input(&color, move |value| match value.parse::<Color>() {
            Ok(v) => c.borrow_mut().color = v,
            Err(e) => log::warn!("[controls] {e}"),
        })?;
        append_row(document, &root, "color", &color)?;

        body.append_child(&root).map_err(js_err)?;
        log::info!("[controls] panel mounted");
        Ok(Self { root })
    }
}

fn input(document: &web::Document, kind: &str) -> anyhow::Result<web::HtmlInputElement> {
    let el: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("input is not an HtmlInputElement"))?;
    el.set_type(kind);
    Ok(el)
}

fn range_input(
    document: &web::Document,
    (min, max): (f32, f32),
    step: f32,
    value: f32,
) -> anyhow::Result<web::HtmlInputElement> {
    let el = input(document, "range")?;
    el.set_min(&min.to_string());
    el.set_max(&max.to_string());
    el.set_step(&step.to_string());
    el.set_value(&value.to_string());
    Ok(el)
}

fn append_row(
    document: &web::Document,
    root: &web::HtmlElement,
    label: &str,
    control: &web::HtmlInputElement,
) -> anyhow::Result<()> {
    let row = document.create_element("label").map_err(js_err)?;
    row.set_attribute("style", ROW_STYLE).map_err(js_err)?;
    row.set_text_content(Some(label));
    row.append_child(control).map_err(js_err)?;
    root.append_child(&row).map_err(js_err)?;
    Ok(())
}

fn on_input(
    el: &web::HtmlInputElement,
    mut handler: impl FnMut(&str) + 'static,
) -> anyhow::Result<()> {
    let target = el.clone();
    let closure = Closure::wrap(Box::new(move || handler(&target.value())) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}
