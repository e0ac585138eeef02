//! Startups page: how founders raise on the platform

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new(
        "For Startups",
        "From application to funding, with investors and mentors along the way",
    )
    .heading("How It Works")
    .card_with(
        "Apply",
        "Submit your startup application with business plan, financials, and team details.",
        "01",
    )
    .card_with(
        "Get Validated",
        "Our expert team reviews your application and validates your business model.",
        "02",
    )
    .card_with(
        "Raise Funds",
        "Get matched with investors through our structured funding compartments.",
        "03",
    )
    .card_with(
        "Grow",
        "Access mentorship, resources, and ongoing support to scale your business.",
        "04",
    )
    .heading("Benefits")
    .card(
        "Access to Investors",
        "Connect with a network of 2,000+ verified investors actively looking for opportunities.",
    )
    .card(
        "Mentorship Network",
        "Get guidance from industry experts and successful entrepreneurs who've been there.",
    )
    .card(
        "Growth Support",
        "Access resources, tools, and ongoing support to accelerate your startup's growth.",
    )
    .heading("Success Stories")
    .quote(
        "Investyc helped us raise $2M in Series A funding. The process was transparent and the investor matching was perfect.",
        "Sarah Chen, CEO, TechFlow",
    )
    .quote(
        "The mentorship network is incredible. Our mentor helped us refine our business model and strategy.",
        "Marcus Rodriguez, Founder, GreenTech Solutions",
    )
    .quote(
        "From application to funding in just 8 weeks. Investyc made the impossible possible for us.",
        "Emily Watson, Co-founder, HealthAI",
    )
    .link("View a startup profile", PageId::StartupProfile)
    .link("Apply now", PageId::Register)
}
