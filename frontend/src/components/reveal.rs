use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::utils::motion;

/// Fraction of the viewport height a section's top must pass before it plays.
const REVEAL_THRESHOLD: f64 = 0.9;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    /// Position among the content sections, staggers the entrance.
    pub order: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Whether a section whose top sits at `top` should play. An unknown viewport
/// height reveals right away rather than hiding the section for good.
fn reached_threshold(top: f64, viewport: Option<f64>) -> bool {
    match viewport {
        Some(height) => top < height * REVEAL_THRESHOLD,
        None => true,
    }
}

fn in_view(node: &NodeRef) -> bool {
    let (Some(el), Some(window)) = (node.cast::<Element>(), web_sys::window()) else {
        return false;
    };
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64());
    reached_threshold(el.get_bounding_client_rect().top(), viewport)
}

/// Content section that fades up the first time it scrolls into view and
/// then stays put.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    {
        let node = node.clone();
        let revealed = revealed.clone();
        let id = props.id.clone();
        let deps = *revealed;
        // Re-runs when `revealed` flips, which tears the listener down.
        use_effect_with_deps(
            move |already: &bool| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !*already => {
                        let check = {
                            let revealed = revealed.clone();
                            move || {
                                if in_view(&node) {
                                    revealed.set(true);
                                }
                            }
                        };
                        // Sections already on screen at load
                        check();
                        let callback = Closure::<dyn Fn()>::new(check);
                        match window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                if let Some(win) = web_sys::window() {
                                    let _ = win.remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                }
                            }),
                            Err(e) => {
                                warn!("Could not watch scrolling for #{}: {:?}", id, e);
                                revealed.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            deps,
        );
    }

    let (class, style) = if *revealed {
        (
            classes!("site-section", "revealed"),
            format!(
                "animation: {};",
                motion::section_entrance(props.order).animation("fade-up-40")
            ),
        )
    } else {
        (classes!("site-section", "reveal-pending"), String::new())
    };

    html! {
        <section id={props.id.clone()} ref={node} class={class} style={style}>
            <div class="section-accent"></div>
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_top_passes_threshold() {
        assert!(reached_threshold(500.0, Some(800.0)));
        assert!(!reached_threshold(750.0, Some(800.0)));
        assert!(reached_threshold(-200.0, Some(800.0)));
    }

    #[test]
    fn unknown_viewport_reveals_immediately() {
        assert!(reached_threshold(10_000.0, None));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Event;

    #[derive(Properties, PartialEq)]
    struct SpacedProps {
        spacer_px: u32,
    }

    #[function_component(Spaced)]
    fn spaced(props: &SpacedProps) -> Html {
        html! {
            <>
                <div style={format!("height: {}px;", props.spacer_px)}></div>
                <Reveal id="far-section" order={0}>{"far"}</Reveal>
            </>
        }
    }

    #[wasm_bindgen_test]
    async fn section_below_fold_reveals_on_scroll() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        yew::Renderer::<Spaced>::with_root_and_props(host.clone(), SpacedProps { spacer_px: 5000 })
            .render();
        TimeoutFuture::new(50).await;

        let section = host.query_selector("#far-section").unwrap().unwrap();
        assert!(section.class_name().contains("reveal-pending"));

        section.scroll_into_view();
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
        TimeoutFuture::new(50).await;

        let section = host.query_selector("#far-section").unwrap().unwrap();
        assert!(section.class_name().contains("revealed"));

        // Listener is gone; scrolling back must not hide or replay it.
        window.scroll_to_with_x_and_y(0.0, 0.0);
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
        TimeoutFuture::new(50).await;
        let section = host.query_selector("#far-section").unwrap().unwrap();
        assert!(section.class_name().contains("revealed"));
    }
}
