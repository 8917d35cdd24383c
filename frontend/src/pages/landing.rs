use crate::components::contact_form::ContactForm;
use crate::components::logo::Logo;
use crate::components::reveal::Reveal;
use crate::components::wave_background::WaveBackground;
use crate::config;
use crate::theme::{ThemeIndex, ThemeSelection};
use crate::utils::motion;
use log::{debug, info, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "How to use", href: "#how" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "About Us", href: "#about" },
];

const LANDING_CSS: &str = r#"
    body {
        margin: 0;
        font-family: 'Poppins', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
        color: #222;
    }
    .main-bg {
        position: relative;
        min-height: 100vh;
        overflow: hidden;
        padding: 2rem 1rem;
        box-sizing: border-box;
    }
    .svg-bg-wrapper {
        position: absolute;
        inset: 0;
        z-index: 0;
        pointer-events: none;
    }
    .bg-svg {
        width: 100%;
        height: 100%;
    }
    .glass-card {
        position: relative;
        z-index: 1;
        max-width: 1100px;
        margin: 0 auto;
        padding: 1.5rem 2.5rem 3rem;
        border-radius: 32px;
        background: rgba(255, 255, 255, 0.22);
        backdrop-filter: blur(14px);
        -webkit-backdrop-filter: blur(14px);
        box-shadow: 0 8px 40px rgba(0, 0, 0, 0.12);
    }
    .navbar {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1.5rem;
        flex-wrap: wrap;
    }
    .logo-section {
        display: flex;
        align-items: center;
        gap: 0.6rem;
    }
    .brand {
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        letter-spacing: 0.02em;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link {
        color: #fff;
        text-decoration: none;
        font-weight: 500;
        opacity: 0.9;
        transition: opacity 0.2s;
    }
    .nav-link:hover {
        opacity: 1;
        text-decoration: underline;
    }
    .contact-btn {
        border: none;
        border-radius: 999px;
        padding: 0.7rem 1.6rem;
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .nav-contact:hover {
        transform: scale(1.08);
        box-shadow: 0 0 32px var(--theme-accent);
    }
    .nav-contact:active {
        transform: scale(0.96);
    }
    .send-btn:hover {
        transform: scale(1.05);
    }
    .send-btn:active {
        transform: scale(0.97);
    }
    .hero-section {
        display: grid;
        grid-template-columns: 1fr 1fr;
        align-items: center;
        gap: 2rem;
        padding: 3rem 0 2rem;
    }
    .hero-title {
        font-size: 4rem;
        margin: 0 0 1rem;
        color: #fff;
    }
    .hero-desc {
        font-size: 1.15rem;
        line-height: 1.6;
        color: #fff;
        margin: 0 0 2rem;
    }
    .food-icons {
        display: flex;
        gap: 1.2rem;
    }
    .food-icon-float {
        display: inline-block;
    }
    .food-icon {
        width: 72px;
        height: 72px;
        border-radius: 50%;
        border: 3px solid transparent;
        background: #fff;
        object-fit: cover;
        cursor: pointer;
        position: relative;
    }
    .food-icon:hover {
        transform: scale(1.18) rotate(-8deg);
        z-index: 2;
    }
    .food-icon:active {
        transform: scale(0.95);
    }
    .hero-image {
        display: flex;
        justify-content: center;
        perspective: 1000px;
    }
    .main-dish-img {
        width: 100%;
        max-width: 420px;
        border-radius: 50%;
    }
    .site-section {
        position: relative;
        margin-top: 2.5rem;
        padding: 2rem 2rem 2rem 2.5rem;
        border-radius: 24px;
        background: rgba(255, 255, 255, 0.85);
    }
    .reveal-pending {
        opacity: 0;
        transform: translateY(40px);
    }
    .section-accent {
        position: absolute;
        left: 0;
        top: 1.5rem;
        bottom: 1.5rem;
        width: 6px;
        border-radius: 3px;
        background: var(--theme-accent);
        transition: background 0.7s;
    }
    .section-title {
        margin: 0 0 1rem;
        font-size: 1.8rem;
    }
    .section-list {
        margin: 0;
        padding-left: 1.4rem;
        line-height: 1.9;
    }
    .section-desc {
        margin: 0;
        line-height: 1.7;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 0.8rem;
        max-width: 520px;
    }
    .contact-input {
        padding: 0.8rem 1rem;
        border-radius: 12px;
        border: 1px solid #ddd;
        font: inherit;
    }
    .contact-input:focus {
        outline: none;
        border-color: var(--theme-bg);
    }
    @keyframes fade-up-30 {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fade-up-40 {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes wave-rise {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes dish-flip {
        from { opacity: 0; transform: scale(0.8) rotateY(90deg); }
        to { opacity: 1; transform: scale(1) rotateY(0deg); }
    }
    @keyframes food-bob {
        0%, 100% { transform: translateY(0); }
        25% { transform: translateY(-10px); }
        50% { transform: translateY(0); }
        75% { transform: translateY(10px); }
    }
    @media (max-width: 768px) {
        .glass-card {
            padding: 1rem 1.2rem 2rem;
        }
        .hero-section {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 2.8rem;
        }
        .nav-links {
            gap: 1rem;
            flex-wrap: wrap;
        }
    }
    @media (prefers-reduced-motion: reduce) {
        *, *::before, *::after {
            animation: none !important;
            transition: none !important;
        }
        .reveal-pending {
            opacity: 1;
            transform: none;
        }
    }
"#;

#[derive(Properties, PartialEq, Default)]
pub struct LandingProps {
    #[prop_or_default]
    pub initial_theme: ThemeIndex,
}

fn scroll_to_contact() {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("contact"));
    match target {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => warn!("No #contact section to scroll to"),
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let initial_theme = props.initial_theme;
    let selection = use_state_eq(move || ThemeSelection::new(initial_theme));
    let theme = selection.theme();

    let select_theme = {
        let selection = selection.clone();
        Callback::from(move |index: ThemeIndex| {
            let mut next = *selection;
            if next.select(index) {
                info!("Switching to {} theme", next.theme().name);
                selection.set(next);
            } else {
                debug!("{} theme already active", next.theme().name);
            }
        })
    };

    let root_style = format!(
        "--theme-bg: {bg}; --theme-accent: {accent}; background: {bg}; transition: {};",
        motion::THEME_SWAP.transition("background"),
        bg = theme.bg,
        accent = theme.accent,
    );
    let accent_button_style = format!("background: {}; color: #333;", theme.accent);
    let icon_transition = format!(
        "{}, {}",
        motion::ICON_BORDER.transition("border-color"),
        motion::ICON_BORDER.transition("box-shadow")
    );

    let food_icons = theme
        .food_icons
        .iter()
        .enumerate()
        .map(|(idx, icon)| {
            let onclick = match ThemeIndex::try_from(idx) {
                Ok(index) => {
                    let select_theme = select_theme.clone();
                    Callback::from(move |_: MouseEvent| select_theme.emit(index))
                }
                Err(e) => {
                    warn!("Icon {} has no matching theme: {}", idx, e);
                    Callback::from(|_: MouseEvent| ())
                }
            };
            let selected = selection.active().get() == idx;
            let shadow = if selected {
                format!("0 8px 32px {}", theme.accent)
            } else {
                "0 2px 8px rgba(0,0,0,0.08)".to_string()
            };
            let icon_style = format!(
                "border-color: {}; box-shadow: {}; transition: {}, transform 0.2s;",
                theme.accent, shadow, icon_transition
            );
            html! {
                <span key={*icon} class="food-icon-float" style={format!("animation: {};", motion::icon_bob(idx as u32))}>
                    <img
                        src={config::asset_url(icon)}
                        alt={format!("Food {}", idx + 1)}
                        class={classes!("food-icon", selected.then_some("selected"))}
                        style={icon_style}
                        onclick={onclick}
                    />
                </span>
            }
        })
        .collect::<Html>();

    html! {
        <div class="main-bg" style={root_style}>
            <style>{LANDING_CSS}</style>
            <WaveBackground key={theme.wave.as_str()} variant={theme.wave} />
            <div class="glass-card">
                <header class="navbar">
                    <div class="logo-section">
                        <Logo class={classes!("logo")} fill_color={theme.bg} />
                        <span class="brand">{"Dishcovery"}</span>
                    </div>
                    <nav class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.href} class="nav-link">{link.label}</a>
                        }) }
                    </nav>
                    <button
                        class="contact-btn nav-contact"
                        style={accent_button_style}
                        onclick={Callback::from(|_: MouseEvent| scroll_to_contact())}
                    >
                        {"Contact Us"}
                    </button>
                </header>
                <main id="home" class="hero-section">
                    <div class="hero-content">
                        <h1 class="hero-title" style={format!("animation: {};", motion::HERO_TITLE.animation("fade-up-30"))}>
                            {"Dishcovery"}
                        </h1>
                        <p class="hero-desc" style={format!("animation: {};", motion::HERO_DESC.animation("fade-up-30"))}>
                            {"Dishcovery – Turning \"what's for dinner?\" into \"wow, that's dinner?!\""}<br/>
                            {"An AI-powered recipe matchmaker that helps you cook what you love with what you have. No stress, just tasty success!"}
                        </p>
                        <div class="food-icons">
                            {food_icons}
                        </div>
                    </div>
                    <div class="hero-image">
                        <img
                            key={theme.main_dish}
                            src={config::asset_url(theme.main_dish)}
                            alt="Main Dish"
                            class="main-dish-img"
                            style={format!(
                                "box-shadow: 0 4px 32px {}; animation: {};",
                                theme.accent,
                                motion::DISH_FLIP.animation("dish-flip")
                            )}
                        />
                    </div>
                </main>
                <Reveal id="how" order={0}>
                    <h2 class="section-title">{"🍳 How to Use"}</h2>
                    <ol class="section-list">
                        <li>{"Enter the ingredients you have at home."}</li>
                        <li>{"Browse AI-recommended recipes tailored to your taste."}</li>
                        <li>{"Follow step-by-step instructions and enjoy your meal!"}</li>
                    </ol>
                </Reveal>
                <Reveal id="services" order={1}>
                    <h2 class="section-title">{"🛠️ Services"}</h2>
                    <ul class="section-list">
                        <li>{"AI-powered recipe recommendations"}</li>
                        <li>{"Personalized meal planning"}</li>
                        <li>{"Ingredient-based search"}</li>
                        <li>{"Nutrition insights"}</li>
                        <li>{"Save & share your favorite recipes"}</li>
                    </ul>
                </Reveal>
                <Reveal id="about" order={2}>
                    <h2 class="section-title">{"👩‍🍳 About Us"}</h2>
                    <p class="section-desc">
                        {"Dishcovery is built by foodies and techies who believe everyone deserves a delicious, stress-free meal. Our AI helps you discover new dishes and make the most of what you have at home."}
                    </p>
                </Reveal>
                <Reveal id="contact" order={3}>
                    <h2 class="section-title">{"📬 Contact Us"}</h2>
                    <ContactForm accent={theme.accent} />
                </Reveal>
            </div>
        </div>
    }
}
