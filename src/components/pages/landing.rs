//! Home page

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new(
        "Fueling Startups. Driving Innovation Forward",
        "Our platform connects ambitious startups with forward-thinking investors",
    )
    .stat("Startups Onboarded", "500+", Some("Verified and vetted startups"))
    .stat("Active Investors", "2,000+", Some("Worldwide community"))
    .stat("Funds Raised", "$50M+", Some("Total funding deployed"))
    .stat("Success Rate", "85%", Some("Profitable exits"))
    .heading("Why Investyc")
    .card(
        "Trust and SPV Security",
        "Each startup has its own transparent SPV compartment with escrow protection and regulatory compliance.",
    )
    .card(
        "AI-Powered Matching",
        "Advanced algorithms match investors with startups based on risk profile and growth potential.",
    )
    .card(
        "Lightning Fast",
        "Complete due diligence and investment in days, not months, with our streamlined process.",
    )
    .heading("Featured Startups")
    .text("Each startup has its own TrustSPV compartment for transparent deal flow")
    .card_with("HealthTech Pro", "Healthcare · raising $2M", "Series A")
    .card_with("EcoFlow", "CleanTech · raising $500K", "Seed")
    .card_with("FinanceAI", "FinTech · raising $1.5M", "Pre-Series A")
    .card_with("EduVerse", "EdTech · raising $5M", "Series B")
    .heading("AI-Powered Investment Insights")
    .text("Get personalized deal suggestions and risk analysis powered by advanced AI")
    .heading("Learn & Grow")
    .text("Comprehensive courses for startups and investors")
    .card_with("Fundraising 101", "1,200+ students", "4.8★")
    .card_with("Investor Relations", "850+ students", "4.9★")
    .card_with("Legal Basics", "650+ students", "4.7★")
    .card_with("Growth Strategy", "1,100+ students", "4.8★")
    .heading("Secure Payment Gateway")
    .text("Multiple payment options for seamless transactions")
    .link("Register your startup", PageId::Register)
    .link("Start investing", PageId::Investors)
    .link("Learn more about us", PageId::About)
}
