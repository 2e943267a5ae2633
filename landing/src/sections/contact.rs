use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use thiserror::Error;

use crate::config;
use crate::nav::{SectionId, SectionRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email address",
            Field::Subject => "What's this about?",
            Field::Message => "Tell us more about your project or question...",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    /// `(css class, text)` of the banner under the submit button.
    pub fn banner(self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some((
                "form-status form-status-success",
                "Thank you! Your message has been sent successfully. We'll get back to you soon.",
            )),
            SubmitStatus::Error => Some((
                "form-status form-status-error",
                "Sorry, there was an error sending your message. Please try again.",
            )),
        }
    }
}

/// Progress of one contact submission.
///
/// Every status change bumps `epoch`, so a reset timer scheduled for an older
/// status can tell it has been superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    pub sending: bool,
    pub status: SubmitStatus,
    epoch: u32,
}

impl Submission {
    /// Validate `form` and either start sending or record the error.
    pub fn start(&mut self, form: &ContactForm) -> Result<(), ContactError> {
        match form.validate() {
            Ok(()) => {
                self.sending = true;
                self.status = SubmitStatus::Idle;
                self.epoch = self.epoch.wrapping_add(1);
                Ok(())
            }
            Err(err) => {
                self.status = SubmitStatus::Error;
                self.epoch = self.epoch.wrapping_add(1);
                Err(err)
            }
        }
    }

    /// The simulated round trip finished.
    pub fn complete(&mut self) {
        self.sending = false;
        self.status = SubmitStatus::Success;
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Clear the status banner unless something newer replaced it.
    pub fn settle(&mut self, epoch: u32) {
        if self.epoch == epoch && !self.sending {
            self.status = SubmitStatus::Idle;
        }
    }
}

pub fn submit_label(sending: bool) -> &'static str {
    if sending { "Sending Message..." } else { "Send Message" }
}

fn schedule_settle(submission: RwSignal<Submission>) {
    let epoch = submission.with_untracked(Submission::epoch);
    set_timeout(
        move || submission.update(|s| s.settle(epoch)),
        config::STATUS_RESET,
    );
}

#[component]
pub fn Contact(region: SectionRef) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submission.with_untracked(|s| s.sending) {
            return;
        }

        let started = form.with_untracked(|f| {
            let mut result = Ok(());
            submission.update(|s| result = s.start(f));
            result
        });

        match started {
            Ok(()) => {
                tracing::info!("contact form submitted");
                set_timeout(
                    move || {
                        form.set(ContactForm::default());
                        submission.update(Submission::complete);
                        tracing::debug!("contact form delivered");
                        schedule_settle(submission);
                    },
                    config::SUBMIT_DELAY,
                );
            }
            Err(err) => {
                tracing::info!(%err, "contact form rejected");
                schedule_settle(submission);
            }
        }
    };

    view! {
        <section id={SectionId::Contact.as_str()} node_ref=region class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Get In "
                        <span class="text-gradient">"Touch"</span>
                    </h2>
                    <p class="section-description">
                        "Ready to transform your digital experience? We'd love to hear from you. "
                        "Send us a message and we'll respond within 24 hours."
                    </p>
                </div>

                <div class="contact-grid">
                    <form class="contact-form" on:submit=on_submit>
                        {Field::ALL
                            .into_iter()
                            .map(|field| view! { <FormField field=field form=form /> })
                            .collect_view()}

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled=move || submission.with(|s| s.sending)
                        >
                            {move || submission.with(|s| submit_label(s.sending))}
                        </button>

                        {move || {
                            submission
                                .with(|s| s.status.banner())
                                .map(|(class, text)| view! { <div class=class>{text}</div> })
                        }}
                    </form>

                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let label = format!("{} *", field.label());

    let control = if field == Field::Message {
        view! {
            <textarea
                id={field.key()}
                name={field.key()}
                rows="6"
                required
                placeholder={field.placeholder()}
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type={field.input_type()}
                id={field.key()}
                name={field.key()}
                required
                placeholder={field.placeholder()}
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for={field.key()} class="form-label">{label}</label>
            {control}
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info">
            <div>
                <h3 class="contact-info-title">"Let's Start a Conversation"</h3>
                <p class="contact-info-text">
                    "Whether you're looking to transform your business, need technical support, or just want "
                    "to say hello, we're here to help. Our team of experts is ready to discuss your unique "
                    "needs and challenges."
                </p>
            </div>

            <div class="contact-methods">
                <ContactMethod icon="✉" title="Email Us" detail="hello@demoland.com" />
                <ContactMethod icon="☎" title="Call Us" detail="+1 (555) 123-4567" />
                <ContactMethod
                    icon="⌖"
                    title="Visit Us"
                    detail="123 Innovation Drive, San Francisco, CA 94105"
                />
            </div>

            <div class="contact-response">
                <h4>"Quick Response Guarantee"</h4>
                <p>
                    "We typically respond to all inquiries within 2-4 hours during business hours. "
                    "For urgent matters, please call us directly."
                </p>
            </div>
        </div>
    }
}

#[component]
fn ContactMethod(icon: &'static str, title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="contact-method">
            <div class="contact-method-icon">{icon}</div>
            <div>
                <div class="contact-method-title">{title}</div>
                <div class="contact-method-detail">{detail}</div>
            </div>
        </div>
    }
}
