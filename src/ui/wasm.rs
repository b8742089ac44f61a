//! Browser front end: DOM-backed `View`, Chart.js `ChartBackend`, and `mount`.
//!
//! - `web-sys` DOM handles + `wasm-bindgen` closures for event wiring
//! - Chart.js is reached through the page's global `Chart` constructor
//! - Toast auto-dismiss via `gloo-timers` (a new toast cancels the old timer)
//! - Async actions run on `wasm_bindgen_futures::spawn_local`

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use tracing;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, HtmlCanvasElement, HtmlInputElement,
    HtmlOptionElement, HtmlSelectElement,
};

use super::{Controller, UiConfig, View};
use crate::client::FxClient;
use crate::domain::chart::{ChartBackend, LineChart};
use crate::domain::conversion::ConversionResult;
use crate::error::FxError;
use crate::shared::{CurrencyCode, Selection};

type App = Controller<FxClient, ChartJs, DomView>;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
    static TOAST_TIMEOUT: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// Build the app against the current page and start it.
///
/// Expects the converter markup (selectors, form, result box, history list,
/// toast, `#rateChart` canvas) and Chart.js loaded as a global.
#[wasm_bindgen]
pub fn mount(api_key: &str) -> Result<(), JsValue> {
    mount_with_config(api_key, UiConfig::default()).map_err(to_js)
}

/// `mount` with explicit UI settings.
pub fn mount_with_config(api_key: &str, config: UiConfig) -> Result<(), FxError> {
    let document = document()?;
    let client = FxClient::builder().api_key(api_key).build()?;
    let view = DomView::bind(&document, config.toast_ms)?;
    let chart = ChartJs::bind(&document)?;

    let app = Rc::new(Controller::new(client, chart, view, config));
    wire_events(&app)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    wasm_bindgen_futures::spawn_local(async move {
        let _ = app.start().await;
    });
    Ok(())
}

// ── Event wiring ─────────────────────────────────────────────────────────────

fn current_app() -> Option<Rc<App>> {
    APP.with(|slot| slot.borrow().clone())
}

fn on(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), FxError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

fn wire_events(app: &Rc<App>) -> Result<(), FxError> {
    let els = &app.view().els;

    on(&els.form, "submit", |e: Event| {
        e.prevent_default();
        if let Some(app) = current_app() {
            let amount = app.view().amount_value();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = app.submit(&amount).await;
            });
        }
    })?;

    on(&els.refresh, "click", |_| {
        if let Some(app) = current_app() {
            let amount = app.view().amount_value();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = app.refresh(&amount).await;
            });
        }
    })?;

    on(&els.swap, "click", |_| {
        if let Some(app) = current_app() {
            wasm_bindgen_futures::spawn_local(async move {
                app.swap().await;
            });
        }
    })?;

    on(&els.clear_history, "click", |_| {
        if let Some(app) = current_app() {
            wasm_bindgen_futures::spawn_local(async move {
                app.clear_history().await;
            });
        }
    })?;

    let select_handler = |_: Event| {
        if let Some(app) = current_app() {
            let (from, to) = app.view().selected_codes();
            wasm_bindgen_futures::spawn_local(async move {
                app.select(from, to).await;
            });
        }
    };
    on(&els.from, "change", select_handler)?;
    on(&els.to, "change", select_handler)?;

    Ok(())
}

// ── DOM view ─────────────────────────────────────────────────────────────────

struct Elements {
    from: Element,
    to: Element,
    amount: Element,
    form: Element,
    history_list: Element,
    clear_history: Element,
    result_box: Element,
    amount_display: Element,
    from_display: Element,
    converted_display: Element,
    to_display: Element,
    rate_info: Element,
    swap: Element,
    refresh: Element,
    toast: Element,
}

/// `View` over the converter page.
pub struct DomView {
    document: Document,
    els: Elements,
    toast_ms: u32,
}

impl DomView {
    fn bind(document: &Document, toast_ms: u32) -> Result<Self, FxError> {
        let els = Elements {
            from: by_id(document, "from-currency")?,
            to: by_id(document, "to-currency")?,
            amount: by_id(document, "amount")?,
            form: by_id(document, "converter-form")?,
            history_list: by_id(document, "history-list")?,
            clear_history: by_id(document, "clear-history-btn")?,
            result_box: by_selector(document, ".result")?,
            amount_display: by_id(document, "amount-display")?,
            from_display: by_id(document, "from-display")?,
            converted_display: by_id(document, "converted-display")?,
            to_display: by_id(document, "to-display")?,
            rate_info: by_id(document, "rate-info")?,
            swap: by_id(document, "swap-btn")?,
            refresh: insert_refresh_button(document)?,
            toast: by_id(document, "toast")?,
        };
        Ok(Self {
            document: document.clone(),
            els,
            toast_ms,
        })
    }

    /// Raw text of the amount input.
    pub fn amount_value(&self) -> String {
        self.els
            .amount
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    /// Codes currently chosen in the two selectors.
    pub fn selected_codes(&self) -> (CurrencyCode, CurrencyCode) {
        (select_value(&self.els.from), select_value(&self.els.to))
    }

    fn fill_select(&self, select: &Element, codes: &[CurrencyCode]) {
        let Some(select) = select.dyn_ref::<HtmlSelectElement>() else {
            return;
        };
        select.set_length(0);
        for code in codes {
            let added = HtmlOptionElement::new_with_text_and_value(code.as_str(), code.as_str())
                .and_then(|opt| select.add_with_html_option_element(&opt));
            if let Err(e) = added {
                tracing::error!("Failed to add option {}: {}", code, extract_js_error(&e));
            }
        }
    }
}

impl View for DomView {
    fn set_currencies(&self, codes: &[CurrencyCode]) {
        self.fill_select(&self.els.from, codes);
        self.fill_select(&self.els.to, codes);
    }

    fn set_selection(&self, selection: &Selection) {
        if let Some(from) = self.els.from.dyn_ref::<HtmlSelectElement>() {
            from.set_value(selection.from.as_str());
        }
        if let Some(to) = self.els.to.dyn_ref::<HtmlSelectElement>() {
            to.set_value(selection.to.as_str());
        }
    }

    fn hide_result(&self) {
        let _ = self.els.result_box.class_list().remove_1("show");
    }

    fn show_result(&self, result: &ConversionResult) {
        let amount = crate::shared::fmt::display_amount(result.amount);
        self.els.amount_display.set_text_content(Some(&amount));
        self.els.from_display.set_text_content(Some(result.from.as_str()));
        self.els
            .converted_display
            .set_text_content(Some(&result.converted_display));
        self.els.to_display.set_text_content(Some(result.to.as_str()));
        self.els.rate_info.set_text_content(Some(&result.rate_info));
    }

    fn reveal_result(&self) {
        let _ = self.els.result_box.class_list().add_1("show");
    }

    fn prepend_history(&self, line: &str) {
        match self.document.create_element("li") {
            Ok(li) => {
                li.set_text_content(Some(line));
                if let Err(e) = self.els.history_list.prepend_with_node_1(&li) {
                    tracing::error!("Failed to add history line: {}", extract_js_error(&e));
                }
            }
            Err(e) => tracing::error!("Failed to create history line: {}", extract_js_error(&e)),
        }
    }

    fn clear_history(&self) {
        self.els.history_list.set_inner_html("");
    }

    fn toast(&self, message: &str) {
        let toast = self.els.toast.clone();
        toast.set_text_content(Some(message));
        let _ = toast.class_list().add_1("show");

        let dismiss = Timeout::new(self.toast_ms, move || {
            let _ = toast.class_list().remove_1("show");
        });
        TOAST_TIMEOUT.with(|t| {
            if let Ok(mut slot) = t.try_borrow_mut() {
                // Dropping the previous Timeout cancels it.
                *slot = Some(dismiss);
            }
        });
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

// ── Chart.js backend ─────────────────────────────────────────────────────────

/// `ChartBackend` driving Chart.js on the `#rateChart` canvas.
pub struct ChartJs {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    title: Element,
    instance: Option<JsValue>,
    /// Keeps the tooltip callback alive for as long as its chart.
    tooltip_label: Option<Closure<dyn Fn(JsValue) -> JsValue>>,
}

impl ChartJs {
    fn bind(document: &Document) -> Result<Self, FxError> {
        let canvas: HtmlCanvasElement = by_id(document, "rateChart")?
            .dyn_into()
            .map_err(|_| FxError::Chart("#rateChart is not a canvas".to_string()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| FxError::Chart("2d context unavailable".to_string()))?
            .dyn_into()
            .map_err(|_| FxError::Chart("unexpected 2d context type".to_string()))?;
        let title = by_selector(document, ".chart-container h3")?;

        Ok(Self {
            canvas,
            ctx,
            title,
            instance: None,
            tooltip_label: None,
        })
    }

    fn config(&self, chart: &LineChart) -> Result<JsValue, FxError> {
        let json = serde_json::json!({
            "type": "line",
            "data": {
                "labels": chart.labels,
                "datasets": [{
                    "label": chart.series_label,
                    "data": chart.values,
                    "borderWidth": 3,
                    "fill": true,
                    "backgroundColor": "rgba(139,92,246,0.1)",
                    "pointRadius": 5,
                    "pointHoverRadius": 8,
                    "pointBackgroundColor": "#8b5cf6",
                    "tension": 0.4
                }]
            },
            "options": {
                "responsive": true,
                "plugins": {
                    "tooltip": { "callbacks": {} },
                    "legend": { "labels": { "color": "#fff" } }
                },
                "scales": {
                    "x": {
                        "title": { "display": true, "text": chart.x_axis_title, "color": "#fff" },
                        "ticks": { "color": "#fff" }
                    },
                    "y": {
                        "title": { "display": true, "text": chart.y_axis_title, "color": "#fff" },
                        "ticks": { "color": "#fff" }
                    }
                }
            }
        });
        js_sys::JSON::parse(&json.to_string()).map_err(js_err)
    }
}

impl ChartBackend for ChartJs {
    fn release(&mut self) -> Result<(), FxError> {
        if let Some(instance) = self.instance.take() {
            let destroy: Function = Reflect::get(&instance, &"destroy".into())
                .map_err(js_err)?
                .dyn_into()
                .map_err(|_| FxError::Chart("chart has no destroy()".to_string()))?;
            destroy.call0(&instance).map_err(js_err)?;
        }
        self.tooltip_label = None;
        Ok(())
    }

    fn render_series(&mut self, chart: &LineChart) -> Result<(), FxError> {
        self.title.set_text_content(Some(&chart.title));

        let config = self.config(chart)?;

        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, 300.0);
        gradient
            .add_color_stop(0.0, "rgba(99,102,241,1)")
            .map_err(js_err)?;
        gradient
            .add_color_stop(1.0, "rgba(139,92,246,0.3)")
            .map_err(js_err)?;
        let dataset = get_path(&config, &["data", "datasets", "0"])?;
        Reflect::set(&dataset, &"borderColor".into(), &gradient).map_err(js_err)?;

        let suffix = chart.value_suffix.clone();
        let label = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |item: JsValue| {
            let value = get_path(&item, &["parsed", "y"])
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(f64::NAN);
            JsValue::from_str(&format!("{} {}", crate::shared::fmt::fixed(value, 2), suffix))
        });
        let callbacks = get_path(&config, &["options", "plugins", "tooltip", "callbacks"])?;
        Reflect::set(&callbacks, &"label".into(), label.as_ref()).map_err(js_err)?;

        let ctor: Function = web_sys::window()
            .ok_or_else(|| FxError::Chart("no window".to_string()))
            .and_then(|w| Reflect::get(&w, &"Chart".into()).map_err(js_err))?
            .dyn_into()
            .map_err(|_| FxError::Chart("Chart.js is not loaded".to_string()))?;
        let args = Array::of2(&self.ctx, &config);
        let instance = Reflect::construct(&ctor, &args).map_err(js_err)?;

        self.instance = Some(instance);
        self.tooltip_label = Some(label);
        Ok(())
    }

    fn show_empty(&mut self, title: &str) -> Result<(), FxError> {
        self.title.set_text_content(Some(title));
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        Ok(())
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn document() -> Result<Document, FxError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FxError::Other("no document".to_string()))
}

fn by_id(document: &Document, id: &str) -> Result<Element, FxError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FxError::Other(format!("missing element #{}", id)))
}

fn by_selector(document: &Document, selector: &str) -> Result<Element, FxError> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| FxError::Other(format!("missing element {}", selector)))
}

fn insert_refresh_button(document: &Document) -> Result<Element, FxError> {
    let button = document.create_element("button").map_err(js_err)?;
    button.set_id("refresh-btn");
    button.set_text_content(Some("🔄 Refresh Rates"));

    let container = by_selector(document, ".container")?;
    let chart_container = document
        .query_selector(".chart-container")
        .map_err(js_err)?;
    container
        .insert_before(&button, chart_container.as_deref())
        .map_err(js_err)?;
    Ok(button)
}

fn select_value(el: &Element) -> CurrencyCode {
    el.dyn_ref::<HtmlSelectElement>()
        .map(|s| CurrencyCode::new(s.value()))
        .unwrap_or_else(|| CurrencyCode::new(""))
}

fn get_path(root: &JsValue, path: &[&str]) -> Result<JsValue, FxError> {
    let mut current = root.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).map_err(js_err)?;
    }
    Ok(current)
}

fn extract_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_err(value: JsValue) -> FxError {
    FxError::Chart(extract_js_error(&value))
}

fn to_js(e: FxError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
