use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Starting downward offset in pixels
    pub offset_px: f64,
    #[prop_or_default]
    pub children: Html,
}

/// Entrance transition: fades the children in and slides them up to their
/// resting position once, after mount.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            // Flip on the next tick so the browser paints the start state
            let timeout = Timeout::new(0, move || visible.set(true));
            move || drop(timeout)
        });
    }

    html! {
        <div class="fade-in" style={transition_style(*visible, props)}>
            { props.children.clone() }
        </div>
    }
}

fn transition_style(visible: bool, props: &FadeInProps) -> String {
    let (opacity, offset) = if visible { (1.0, 0.0) } else { (0.0, props.offset_px) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
        d = props.duration_ms,
        delay = props.delay_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn props(delay_ms: u32) -> FadeInProps {
        FadeInProps {
            duration_ms: 500,
            delay_ms,
            offset_px: 20.0,
            children: Html::default(),
        }
    }

    #[wasm_bindgen_test]
    fn test_initial_style_is_hidden_and_offset() {
        let style = transition_style(false, &props(200));
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(style.contains("opacity 500ms ease-out 200ms"));
    }

    #[wasm_bindgen_test]
    fn test_resting_style() {
        let style = transition_style(true, &props(0));
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
    }
}
