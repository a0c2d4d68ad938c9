use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SectionHeading;
use crate::frontend::components::{Alert, AlertVariant, Button, TextArea, TextInput};
use crate::frontend::context::use_app;
use crate::log_err;
use crate::types::ContactSubmission;

/// Contact form. Submissions land in the admin's messages panel.
#[component]
pub fn ConnectSection() -> impl IntoView {
    let app = use_app();
    let language = app.language;
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let outcome = RwSignal::new(None::<bool>);

    let public = app.public.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = ContactSubmission {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            message: message.get_untracked().trim().to_string(),
        };
        let public = public.clone();
        sending.set(true);
        outcome.set(None);

        spawn_local(async move {
            match public.submit_contact_message(&submission).await {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    outcome.set(Some(true));
                }
                Err(e) => {
                    log_err!("submit contact message", e);
                    outcome.set(Some(false));
                }
            }
            sending.set(false);
        });
    };

    view! {
        <section id="connect" class="py-20">
            <div class="max-w-xl mx-auto px-6">
                <SectionHeading en="Connect" hi="संपर्क" />
                {move || {
                    let lang = language.get();
                    outcome.get().map(|sent| {
                        if sent {
                            view! {
                                <Alert message=lang.pick("Thank you! Your message has been sent.", "धन्यवाद! आपका संदेश भेज दिया गया है।") />
                            }
                        } else {
                            view! {
                                <Alert
                                    message=lang.pick("Could not send your message. Please try again.", "संदेश नहीं भेजा जा सका। कृपया पुनः प्रयास करें।")
                                    variant=AlertVariant::Error
                                />
                            }
                        }
                    })
                }}
                <form class="space-y-4" on:submit=on_submit>
                    <TextInput label="Name" name="name" required=true value=name />
                    <TextInput label="Email" name="email" input_type="email" required=true value=email />
                    <TextArea label="Message" name="message" required=true value=message />
                    <Button button_type="submit" loading=sending loading_text="Sending...">
                        {move || language.get().pick("Send Message", "संदेश भेजें")}
                    </Button>
                </form>
            </div>
        </section>
    }
}
