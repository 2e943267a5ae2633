use leptos::prelude::*;

use crate::nav::{SectionId, SectionRef};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: usize,
}

impl Testimonial {
    /// Initials shown in the avatar bubble.
    fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart Inc.",
        content: "This platform has completely transformed how our team collaborates. The intuitive interface and powerful features have increased our productivity by 300%. It's simply game-changing.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Lead Developer, Innovation Labs",
        content: "As a developer, I appreciate the attention to detail and the robust API. The platform scales beautifully and the support team is incredibly responsive. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Manager, Growth Co.",
        content: "The analytics and insights provided have been invaluable for our product decisions. The user experience is exceptional, and our customers love the new features we've built.",
        rating: 5,
    },
];

#[component]
pub fn Testimonials(region: SectionRef) -> impl IntoView {
    view! {
        <section id={SectionId::Testimonials.as_str()} node_ref=region class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "What Our Customers "
                        <span class="text-gradient">"Are Saying"</span>
                    </h2>
                    <p class="section-description">
                        "Don't just take our word for it. Here's what industry leaders and innovators "
                        "have to say about their experience with our platform."
                    </p>
                </div>

                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <figure class="testimonial-card">
                                    <div class="testimonial-rating">{"★".repeat(testimonial.rating)}</div>
                                    <blockquote class="testimonial-quote">
                                        {format!("\"{}\"", testimonial.content)}
                                    </blockquote>
                                    <figcaption class="testimonial-author">
                                        <div class="testimonial-avatar">{testimonial.initials()}</div>
                                        <div>
                                            <div class="testimonial-name">{testimonial.name}</div>
                                            <div class="testimonial-role">{testimonial.role}</div>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="trust-badge">
                    <span class="trust-badge-icon">"🏆"</span>
                    <span>"Rated 4.9/5 by 10,000+ customers"</span>
                </div>
            </div>
        </section>
    }
}
