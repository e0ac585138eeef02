//! How It Works: the seven-step flow and the three compartments

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new(
        "How It Works",
        "From registration to returns in seven steps",
    )
    .heading("The Process")
    .card_with(
        "Investor Registration",
        "Investors join the platform and complete their investment profile",
        "1",
    )
    .card_with(
        "Startup Application",
        "Startups apply with comprehensive business documentation",
        "2",
    )
    .card_with(
        "Validation & Due Diligence",
        "Our expert team conducts thorough startup evaluation",
        "3",
    )
    .card_with(
        "Funding Structure Setup",
        "Approved startups get structured funding compartments",
        "4",
    )
    .card_with("Investor Matching", "Startups are matched with suitable investors", "5")
    .card_with(
        "Secure Investment Flow",
        "Funds flow through secure escrow and structured vehicles",
        "6",
    )
    .card_with(
        "Growth & Returns",
        "Ongoing support and eventual returns to investors",
        "7",
    )
    .heading("Investment Compartments")
    .card_with(
        "Trust Compartment",
        "Small ticket investments pooled together · min $1,000 · Managed trust fund with \
         diversified portfolio approach · Risk: Low-Medium",
        "15-25% IRR",
    )
    .card_with(
        "SPV Compartment",
        "Mid-tier investments through Special Purpose Vehicles · min $25,000 · SPV created \
         for each startup investment opportunity · Risk: Medium-High",
        "25-40% IRR",
    )
    .card_with(
        "Direct Equity",
        "Large investments directly into startup equity · min $100,000 · Direct equity \
         purchase with full shareholder rights · Risk: High",
        "40-100% IRR",
    )
    .heading("Key Features")
    .card(
        "Regulated Escrow Services",
        "All investor funds are held in regulated escrow accounts with milestone-based release mechanisms.",
    )
    .card(
        "SEC Compliance",
        "Full compliance with Securities and Exchange Commission regulations and investor protection laws.",
    )
    .card(
        "Expert Due Diligence",
        "Comprehensive startup evaluation by our team of experienced investors and industry experts.",
    )
    .link("Get started", PageId::Register)
    .link("Investment options", PageId::Investors)
}
