use yew::prelude::*;

use crate::theme::WaveVariant;
use crate::utils::motion;

#[derive(Properties, PartialEq)]
pub struct WaveBackgroundProps {
    pub variant: WaveVariant,
}

/// Two translucent white waves filling the lower page. Mount it keyed by
/// variant so a theme change replays the rise-in.
#[function_component(WaveBackground)]
pub fn wave_background(props: &WaveBackgroundProps) -> Html {
    let [front, back] = props.variant.paths();
    let style = format!("animation: {};", motion::ENTRANCE.animation("wave-rise"));
    html! {
        <div class="svg-bg-wrapper" data-wave={props.variant.as_str()} style={style}>
            <svg class="bg-svg" viewBox="0 0 800 600" fill="none" preserveAspectRatio="none" xmlns="http://www.w3.org/2000/svg">
                <path d={front} fill="#fff" fill-opacity="0.18" />
                <path d={back} fill="#fff" fill-opacity="0.10" />
            </svg>
        </div>
    }
}
