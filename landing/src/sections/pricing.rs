use leptos::prelude::*;

use crate::nav::{SectionId, SectionRef};

struct PricingTier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
    button_text: &'static str,
}

static TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Basic",
        price: "$29",
        period: "per month",
        description: "Perfect for individuals and small teams getting started",
        features: &[
            "Up to 5 team members",
            "10GB storage",
            "Basic analytics",
            "Email support",
            "Standard templates",
        ],
        popular: false,
        button_text: "Get Started",
    },
    PricingTier {
        name: "Pro",
        price: "$79",
        period: "per month",
        description: "Ideal for growing teams and businesses",
        features: &[
            "Up to 25 team members",
            "100GB storage",
            "Advanced analytics",
            "Priority support",
            "Custom templates",
            "API access",
            "Advanced integrations",
        ],
        popular: true,
        button_text: "Start Free Trial",
    },
    PricingTier {
        name: "Enterprise",
        price: "$199",
        period: "per month",
        description: "For large organizations with advanced needs",
        features: &[
            "Unlimited team members",
            "Unlimited storage",
            "Custom analytics",
            "24/7 dedicated support",
            "White-label solution",
            "Advanced security",
            "Custom integrations",
            "SLA guarantee",
        ],
        popular: false,
        button_text: "Contact Sales",
    },
];

fn tier_card_class(popular: bool) -> &'static str {
    if popular {
        "pricing-card pricing-card-popular"
    } else {
        "pricing-card"
    }
}

fn tier_button_class(popular: bool) -> &'static str {
    if popular {
        "btn btn-primary btn-block"
    } else {
        "btn btn-outline btn-block"
    }
}

#[component]
pub fn Pricing(region: SectionRef) -> impl IntoView {
    view! {
        <section id={SectionId::Pricing.as_str()} node_ref=region class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Simple, Transparent "
                        <span class="text-gradient">"Pricing"</span>
                    </h2>
                    <p class="section-description">
                        "Choose the perfect plan for your needs. All plans include our core features "
                        "with no hidden fees or surprise charges."
                    </p>
                </div>

                <div class="pricing-grid">
                    {TIERS.iter().map(|tier| view! { <TierCard tier=tier /> }).collect_view()}
                </div>

                <div class="section-footer">
                    <p class="pricing-note">"All plans include a 14-day free trial. No credit card required."</p>
                    <button class="btn-link">"Compare all features →"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: &'static PricingTier) -> impl IntoView {
    view! {
        <article class={tier_card_class(tier.popular)}>
            {tier.popular.then(|| view! {
                <div class="pricing-badge">"Most Popular"</div>
            })}
            <div class="pricing-header">
                <h3 class="pricing-name">{tier.name}</h3>
                <div class="pricing-price">
                    <span class="pricing-amount">{tier.price}</span>
                    <span class="pricing-period">{tier.period}</span>
                </div>
                <p class="pricing-description">{tier.description}</p>
            </div>
            <ul class="pricing-features">
                {tier
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="pricing-feature">
                            <span class="pricing-check">"✓"</span>
                            <span>{*feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <button class={tier_button_class(tier.popular)}>{tier.button_text}</button>
        </article>
    }
}
