use log::info;
use yew::prelude::*;

use crate::components::contact_list::ContactList;
use crate::components::section_heading::SectionHeading;
use crate::content::{contact, SectionAnchor, CONTACTS};

/// Donation card with the message form. The form has no transport; submitting
/// only stops the browser from reloading the page.
#[function_component(SupportForm)]
fn support_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Support form submitted, no transport configured");
    });

    html! {
        <div class="support-card">
            <h3 class="support-title serif">{contact::DONATION_HEADING}</h3>
            <p class="support-blurb">{contact::DONATION_BLURB}</p>
            <form class="support-form" {onsubmit}>
                <div class="support-names">
                    <input type="text" name="first_name" placeholder="First Name" />
                    <input type="text" name="last_name" placeholder="Last Name" />
                </div>
                <input type="email" name="email" placeholder="Email Address" />
                <textarea name="message" placeholder="Your Message" rows="4"></textarea>
                <button type="submit" class="support-submit">{"Send Message"}</button>
            </form>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact_section() -> Html {
    html! {
        <section id={SectionAnchor::Contact.id()} class="contact">
            <div class="container contact-grid">
                <div>
                    <SectionHeading subtitle={contact::SUBTITLE}>{contact::HEADING}</SectionHeading>
                    <p class="contact-intro">{contact::COLLABORATION}</p>
                    <ContactList entries={CONTACTS} />
                </div>
                <SupportForm />
            </div>
            <style>
                {r#"
                .contact {
                    padding: 6rem 0;
                    background: rgba(6, 78, 59, 0.2);
                }
                .contact-grid {
                    display: grid;
                    gap: 4rem;
                }
                @media (min-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .contact-intro {
                    color: #a8a29e;
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }
                .contact-row {
                    display: flex;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .contact-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: rgba(16, 185, 129, 0.1);
                    color: #34d399;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .contact-heading {
                    color: #f5f5f4;
                    font-weight: 700;
                    margin: 0 0 0.25rem;
                }
                .contact-detail {
                    color: #a8a29e;
                    font-size: 0.875rem;
                    margin: 0;
                    text-decoration: none;
                }
                a.contact-detail:hover {
                    color: #34d399;
                }
                .support-card {
                    background: rgba(6, 78, 59, 0.4);
                    border: 1px solid rgba(6, 95, 70, 0.5);
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    backdrop-filter: blur(4px);
                }
                .support-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #d1fae5;
                    margin: 0 0 1.5rem;
                }
                .support-blurb {
                    color: #a8a29e;
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }
                .support-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .support-names {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .support-form input,
                .support-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: rgba(2, 44, 34, 0.5);
                    border: 1px solid #065f46;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    color: inherit;
                    font: inherit;
                    font-size: 0.875rem;
                    transition: border-color 0.2s ease;
                }
                .support-form input:focus,
                .support-form textarea:focus {
                    outline: none;
                    border-color: #10b981;
                }
                .support-submit {
                    width: 100%;
                    background: #059669;
                    color: #fff;
                    font-weight: 700;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .support-submit:hover {
                    background: #10b981;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn form_has_the_four_inputs_and_a_submit() {
        let html = ServerRenderer::<Contact>::new().hydratable(false).render().await;
        for placeholder in ["First Name", "Last Name", "Email Address", "Your Message"] {
            assert!(
                html.contains(&format!("placeholder=\"{}\"", placeholder)),
                "missing {}",
                placeholder
            );
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Send Message"));
    }

    #[tokio::test]
    async fn section_is_the_contact_anchor() {
        let html = ServerRenderer::<Contact>::new().hydratable(false).render().await;
        assert!(html.contains("id=\"contact\""));
    }
}
