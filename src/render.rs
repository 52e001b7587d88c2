//! Marquee tree construction.

use crate::class::compose;
use crate::config::MarqueeConfig;
use crate::style;

/// Base classes on the outer container.
const CONTAINER_BASE: &str = "group flex gap-marquee overflow-hidden";

/// Base classes on each copy wrapper.
const WRAPPER_BASE: &str = "flex justify-around gap-marquee shrink-0";

/// Presentation of a single output node.
///
/// This is a platform-agnostic description of what needs to be rendered.
/// Each consumer can interpret it for its own node type; the `web` module
/// maps one spec to one `<div>`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSpec {
    /// Final composed class string
    pub classes: String,
    /// Inline styles as (property, value) pairs
    pub styles: Vec<(String, String)>,
    /// Pass-through attributes as (name, value) pairs
    pub attrs: Vec<(String, String)>,
}

impl ElementSpec {
    /// Whether a class appears in the composed class string.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.split_whitespace().any(|c| c == class)
    }

    /// Look up an inline style value by property name.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

/// Declarative render result for one marquee.
///
/// The container wraps the copy wrappers in order along the scroll axis;
/// each wrapper receives an identical rendering of the caller's content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeTree {
    /// The outer scroll container
    pub container: ElementSpec,
    /// One entry per rendered copy wrapper
    pub copies: Vec<ElementSpec>,
}

/// Render a marquee configuration into its declarative tree.
///
/// Pure function: the same configuration and gate flag always produce a
/// structurally identical tree. `ready` comes from [`crate::ReadyGate`];
/// while false, exactly one copy is rendered regardless of the configured
/// copy count, so the first paint shows no duplicated, not-yet-animated
/// content.
///
/// ## Example
///
/// ```rust
/// use marquee_view::{render_marquee, Direction, MarqueeConfig};
///
/// let mut config = MarqueeConfig::new();
/// config.direction = Direction::Up;
/// config.number_of_copies = 3;
///
/// let tree = render_marquee(&config, true);
/// assert_eq!(tree.copies.len(), 3);
/// assert!(tree.container.has_class("flex-col"));
/// assert!(tree.copies[0].has_class("animate-marquee-up"));
/// ```
pub fn render_marquee(config: &MarqueeConfig, ready: bool) -> MarqueeTree {
    let orientation = if config.direction.is_horizontal() {
        "flex-row"
    } else {
        "flex-col"
    };

    let container_class = compose(&[
        CONTAINER_BASE,
        orientation,
        config.container.class.as_deref().unwrap_or(""),
    ]);

    let mut container_styles: Vec<(String, String)> = Vec::new();
    if config.fade {
        let mask = style::fade_mask(config.direction);
        container_styles.push((style::MASK_IMAGE.to_string(), mask.clone()));
        container_styles.push((style::WEBKIT_MASK_IMAGE.to_string(), mask));
    }
    merge_styles(&mut container_styles, &config.container.styles);

    let container = ElementSpec {
        classes: container_class,
        styles: container_styles,
        attrs: config.container.attrs.clone(),
    };

    let animation = if config.direction.is_horizontal() {
        "animate-marquee-left"
    } else {
        "animate-marquee-up"
    };
    let wrapper_class = compose(&[
        WRAPPER_BASE,
        orientation,
        animation,
        if config.pause_on_hover {
            "pause-on-hover"
        } else {
            ""
        },
        if config.effective_reverse() {
            "direction-reverse"
        } else {
            ""
        },
        config.wrapper.class.as_deref().unwrap_or(""),
    ]);

    let mut wrapper_styles: Vec<(String, String)> = Vec::new();
    merge_styles(&mut wrapper_styles, &config.wrapper.styles);

    let wrapper = ElementSpec {
        classes: wrapper_class,
        styles: wrapper_styles,
        attrs: config.wrapper.attrs.clone(),
    };

    let count = if ready { config.copy_count() } else { 1 };

    MarqueeTree {
        container,
        copies: vec![wrapper; count],
    }
}

/// Merge caller styles onto generated styles.
///
/// The caller's value wins on the same property; the surviving entry takes
/// the caller's position.
fn merge_styles(base: &mut Vec<(String, String)>, overrides: &[(String, String)]) {
    for (property, value) in overrides {
        base.retain(|(p, _)| p != property);
        base.push((property.clone(), value.clone()));
    }
}

/// Web-specific DOM mounting.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::gate::{GateState, ReadyGate};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Node};

    /// A marquee mounted into the DOM.
    ///
    /// Owns the container element, the mount gate, and the pending ready
    /// tick. Dropping the handle leaves the DOM in place; call
    /// [`MountedMarquee::unmount`] to cancel the tick and detach the
    /// container.
    pub struct MountedMarquee {
        container: Element,
        gate: Rc<RefCell<ReadyGate>>,
        timeout_id: Option<i32>,
        _ready_callback: Closure<dyn FnMut()>,
    }

    impl MountedMarquee {
        /// The container element in the DOM.
        pub fn container(&self) -> &Element {
            &self.container
        }

        /// Whether the ready tick has fired and the full copy count renders.
        pub fn is_ready(&self) -> bool {
            self.gate.borrow().is_ready()
        }

        /// Cancel a still-pending ready tick and detach the container.
        pub fn unmount(mut self) {
            self.cancel_pending();
            self.container.remove();
        }

        fn cancel_pending(&mut self) {
            let mut gate = self.gate.borrow_mut();
            if gate.state() == GateState::Scheduled {
                gate.cancel();
                if let (Some(id), Some(window)) = (self.timeout_id.take(), web_sys::window()) {
                    window.clear_timeout_with_handle(id);
                }
            }
        }
    }

    /// Mount a marquee into the DOM under `parent`.
    ///
    /// The first paint renders a single copy wrapper containing a deep clone
    /// of `content`. A zero-delay timeout then fires the mount gate and
    /// appends the remaining copies, each with its own clone of `content`.
    /// Unmounting before the timeout fires clears it, so no state mutates
    /// after teardown.
    ///
    /// ## Arguments
    ///
    /// * `parent` - Element the container is appended to
    /// * `config` - The marquee configuration to render
    /// * `content` - Node cloned into each copy wrapper
    ///
    /// ## Returns
    ///
    /// A [`MountedMarquee`] handle, or an error message on failure.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use marquee_view::{mount_marquee, MarqueeConfig};
    ///
    /// let parent: web_sys::Element = // ... get host element
    /// let content: web_sys::Node = // ... build the scrolling content
    /// let marquee = mount_marquee(&parent, &MarqueeConfig::new(), &content)?;
    /// // later:
    /// marquee.unmount();
    /// ```
    pub fn mount_marquee(
        parent: &Element,
        config: &MarqueeConfig,
        content: &Node,
    ) -> Result<MountedMarquee, String> {
        let window = web_sys::window().ok_or("No window available")?;
        let document = window.document().ok_or("No document available")?;

        let first_paint = render_marquee(config, false);
        let container = create_element(&document, &first_paint.container)?;
        for spec in &first_paint.copies {
            let wrapper = create_element(&document, spec)?;
            let clone = content
                .clone_node_with_deep(true)
                .map_err(|_| "Failed to clone content node")?;
            wrapper
                .append_child(&clone)
                .map_err(|_| "Failed to append content")?;
            container
                .append_child(&wrapper)
                .map_err(|_| "Failed to append copy wrapper")?;
        }
        parent
            .append_child(&container)
            .map_err(|_| "Failed to append container")?;

        let gate = Rc::new(RefCell::new(ReadyGate::new()));
        gate.borrow_mut().schedule();

        let ready_tree = render_marquee(config, true);
        let cb_gate = Rc::clone(&gate);
        let cb_document = document.clone();
        let cb_container = container.clone();
        let cb_content = content.clone();
        let ready_callback = Closure::wrap(Box::new(move || {
            if !cb_gate.borrow_mut().fire() {
                return;
            }
            // The single pre-ready wrapper stays; append the rest.
            for spec in ready_tree.copies.iter().skip(1) {
                let wrapper = match create_element(&cb_document, spec) {
                    Ok(wrapper) => wrapper,
                    Err(_) => return,
                };
                if let Ok(clone) = cb_content.clone_node_with_deep(true) {
                    let _ = wrapper.append_child(&clone);
                }
                let _ = cb_container.append_child(&wrapper);
            }
        }) as Box<dyn FnMut()>);

        let handler: &js_sys::Function = ready_callback.as_ref().unchecked_ref();
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(handler, 0)
            .map_err(|_| "Failed to schedule ready tick")?;

        Ok(MountedMarquee {
            container,
            gate,
            timeout_id: Some(timeout_id),
            _ready_callback: ready_callback,
        })
    }

    /// Create a `<div>` for an element spec.
    fn create_element(document: &Document, spec: &ElementSpec) -> Result<Element, String> {
        let element = document
            .create_element("div")
            .map_err(|_| "Failed to create marquee element")?;
        element.set_class_name(&spec.classes);

        if !spec.styles.is_empty() {
            let html = element
                .clone()
                .dyn_into::<web_sys::HtmlElement>()
                .map_err(|_| "Failed to cast element to HtmlElement")?;
            let style = html.style();
            for (property, value) in &spec.styles {
                style
                    .set_property(property, value)
                    .map_err(|_| "Failed to set inline style")?;
            }
        }

        for (name, value) in &spec.attrs {
            element
                .set_attribute(name, value)
                .map_err(|_| "Failed to set attribute")?;
        }

        Ok(element)
    }
}
