use std::sync::LazyLock;
use std::time::Duration;

use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::ui::{Button, ButtonVariant};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern should compile")
});

const MIN_MESSAGE_CHARS: usize = 10;

/// In-progress form contents. Persisted to local storage so a draft survives
/// navigating away; the honeypot never leaves memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip)]
    pub honeypot: String,
}

impl ContactDraft {
    /// The honeypot field is invisible to real users; any content means a bot
    /// filled it in and the submission is silently dropped.
    pub fn is_spam(&self) -> bool {
        !self.honeypot.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Client-side checks only; there is no backend to submit to.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if draft.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }
    let email = draft.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some("Please enter a valid email address");
    }
    let message = draft.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required");
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some("Message must be at least 10 characters");
    }
    errors
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (honeypot, set_honeypot) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitted, set_submitted) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<ContactDraft, JsonSerdeWasmCodec>("contact_draft");

        // restore an abandoned draft once at mount
        Effect::watch(
            || (),
            move |_, _, _| {
                let draft = stored.get_untracked();
                if draft != ContactDraft::default() {
                    set_name(draft.name);
                    set_email(draft.email);
                    set_message(draft.message);
                }
            },
            true,
        );

        // keep storage current as the user types
        Effect::new(move |_| {
            set_stored.set(ContactDraft {
                name: name.get(),
                email: email.get(),
                message: message.get(),
                honeypot: String::new(),
            });
        });
    }

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
            honeypot: honeypot.get_untracked(),
        };
        if draft.is_spam() {
            return;
        }
        let found = validate(&draft);
        if !found.is_empty() {
            set_errors(found);
            set_submitted(false);
            return;
        }
        set_errors(FieldErrors::default());
        // no real backend; simulate the round trip, then clear the banner
        set_timeout(
            move || {
                set_submitted(true);
                set_name(String::new());
                set_email(String::new());
                set_message(String::new());
                set_honeypot(String::new());
                set_timeout(move || set_submitted(false), Duration::from_secs(5));
            },
            Duration::from_millis(500),
        );
    };

    view! {
        <Title text="Contact" />
        <div class="contact-page page-enter mx-auto w-full max-w-6xl px-4 py-8 sm:px-6 lg:px-8">
            <section class="header mb-8 text-center">
                <h1 class="text-3xl font-bold">"Let's Work Together"</h1>
                <p class="subtitle mt-2 text-gray-600">
                    "Ready to optimize your operations and drive measurable results? I'm here to help your organization achieve strategic excellence."
                </p>
            </section>

            <section class="contact-content grid grid-cols-1 gap-12 lg:grid-cols-2">
                <div class="contact-info">
                    <h2 class="mb-4 text-xl font-bold">"Reach Out Directly"</h2>
                    <p class="contact-intro mb-6 text-gray-600">
                        "I'm actively seeking opportunities with forward-thinking organizations that value operational excellence and strategic innovation."
                    </p>

                    <div class="contact-method mb-6">
                        <h3 class="font-bold">"📧 Email"</h3>
                        <a href="mailto:anabel@example.com" class="contact-link">
                            "anabel@example.com"
                        </a>
                        <p class="method-description text-sm text-gray-500">
                            "Best for detailed inquiries and project discussions"
                        </p>
                    </div>

                    <div class="contact-method mb-6">
                        <h3 class="font-bold">"💼 LinkedIn"</h3>
                        <a
                            href="https://linkedin.com/in/anabel"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-link"
                        >
                            "Connect on LinkedIn"
                        </a>
                        <p class="method-description text-sm text-gray-500">
                            "Let's expand our professional network"
                        </p>
                    </div>

                    <div class="response-time mb-6">
                        <h3 class="font-bold">"⏱️ Response Time"</h3>
                        <p class="text-gray-600">
                            "I typically respond within 24-48 hours during business days."
                        </p>
                    </div>

                    <div class="availability-note">
                        <h3 class="font-bold">"🎯 Current Status"</h3>
                        <p class="text-gray-600">
                            <strong>"Open to opportunities"</strong>
                            " in operational strategy, business administration, and virtual assistantship roles."
                        </p>
                    </div>
                </div>

                <div class="contact-form-container">
                    <h2 class="mb-4 text-xl font-bold">"Start the Conversation"</h2>

                    {move || {
                        submitted
                            .get()
                            .then(|| {
                                view! {
                                    <div class="success-message mb-4 rounded-md border border-green-300 bg-green-50 p-4">
                                        <strong>"Message sent successfully!"</strong>
                                        " Thank you for reaching out. I'll review your message and respond within 24-48 hours."
                                    </div>
                                }
                            })
                    }}

                    <form class="contact-form space-y-4" on:submit=submit>
                        <div class="form-group">
                            <label for="name" class="mb-1 block font-medium">
                                "Name *"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                class="form-input"
                                class=("error", move || errors.get().name.is_some())
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    set_name(event_target_value(&ev));
                                    set_errors.update(|e| e.name = None);
                                }
                            />
                            {move || {
                                errors
                                    .get()
                                    .name
                                    .map(|e| view! { <span class="error-message">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="email" class="mb-1 block font-medium">
                                "Email *"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                class="form-input"
                                class=("error", move || errors.get().email.is_some())
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    set_email(event_target_value(&ev));
                                    set_errors.update(|e| e.email = None);
                                }
                            />
                            {move || {
                                errors
                                    .get()
                                    .email
                                    .map(|e| view! { <span class="error-message">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="message" class="mb-1 block font-medium">
                                "Message *"
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                class="form-input"
                                class=("error", move || errors.get().message.is_some())
                                prop:value=move || message.get()
                                on:input=move |ev| {
                                    set_message(event_target_value(&ev));
                                    set_errors.update(|e| e.message = None);
                                }
                            ></textarea>
                            {move || {
                                errors
                                    .get()
                                    .message
                                    .map(|e| view! { <span class="error-message">{e}</span> })
                            }}
                        </div>

                        <div class="honeypot" aria-hidden="true">
                            <label for="company-website">"Leave this field empty"</label>
                            <input
                                type="text"
                                id="company-website"
                                name="company-website"
                                tabindex="-1"
                                autocomplete="off"
                                prop:value=move || honeypot.get()
                                on:input=move |ev| set_honeypot(event_target_value(&ev))
                            />
                        </div>

                        <Button variant=ButtonVariant::Gradient button_type="submit">
                            "Send Message →"
                        </Button>
                    </form>

                    <div class="form-footer mt-4">
                        <p class="privacy-note text-sm text-gray-500">
                            "🔒 Your information is secure and will never be shared with third parties."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let errors = validate(&draft("Anabel", "anabel@example.com", "I have a project in mind."));
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = validate(&draft("", "", ""));
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate(&draft("   ", "anabel@example.com", "A long enough message."));
        assert_eq!(errors.name, Some("Name is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["not-an-email", "a@b", "a b@example.com", "a@example."] {
            let errors = validate(&draft("Anabel", bad, "A long enough message."));
            assert_eq!(
                errors.email,
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn short_message_is_rejected() {
        let errors = validate(&draft("Anabel", "anabel@example.com", "too short"));
        assert_eq!(errors.message, Some("Message must be at least 10 characters"));
    }

    #[test]
    fn honeypot_content_marks_spam() {
        let mut d = draft("Anabel", "anabel@example.com", "A long enough message.");
        assert!(!d.is_spam());
        d.honeypot = "https://spam.example".to_string();
        assert!(d.is_spam());
    }
}
