use log::info;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub accent: AttrValue,
}

/// Name, email and message fields. Nothing is sent anywhere: the submit event
/// is swallowed so the page stays where it is.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, discarding");
    });
    let button_style = format!(
        "background: {}; color: #333; margin-top: 1rem;",
        props.accent
    );

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <input type="text" name="name" placeholder="Your Name" required=true class="contact-input" />
            <input type="email" name="email" placeholder="Your Email" required=true class="contact-input" />
            <textarea name="message" placeholder="Your Message" required=true class="contact-input" rows="4" />
            <button type="submit" class="contact-btn send-btn" style={button_style}>
                {"Send Message"}
            </button>
        </form>
    }
}
