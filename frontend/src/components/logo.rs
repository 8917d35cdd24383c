use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub fill_color: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Plate-and-cloche mark next to the brand name.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let fill = props.fill_color.clone();
    html! {
        <svg class={props.class.clone()} viewBox="0 0 48 48" width="40" height="40" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <circle cx="24" cy="24" r="23" fill="#fff" />
            <path d="M10,31 A14,14 0 0 1 38,31 Z" fill={fill.clone()} />
            <circle cx="24" cy="14" r="2.5" fill={fill.clone()} />
            <rect x="8" y="32" width="32" height="3" rx="1.5" fill={fill} />
        </svg>
    }
}
