//! Investors page: investment slabs and protections

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new(
        "For Investors",
        "Structured access to vetted startups at every ticket size",
    )
    .heading("Investment Slabs")
    .card_with(
        "Trust Investment",
        "Small Ticket · from $1,000 · Perfect for new investors looking to diversify into startups",
        "15-25% IRR",
    )
    .card_with(
        "SPV Investment",
        "Mid Ticket · from $25,000 · Special Purpose Vehicle for focused startup investments",
        "25-40% IRR",
    )
    .card_with(
        "Direct Equity",
        "Large Ticket · from $100,000 · Direct equity investment in pre-vetted startups",
        "40-100% IRR",
    )
    .heading("Investor Protection")
    .card(
        "Escrow Protection",
        "All funds are held in regulated escrow accounts until investment milestones are met.",
    )
    .card(
        "Compliance & Legal",
        "Full regulatory compliance with SEC guidelines and investor protection laws.",
    )
    .card(
        "Due Diligence",
        "Comprehensive vetting of all startups including financial, legal, and market analysis.",
    )
    .heading("Expected Returns")
    .card_with(
        "Conservative Portfolio",
        "Diversified across multiple validated startups · Risk Level: Low-Medium · Time Frame: 3-5 years",
        "15-25% IRR",
    )
    .card_with(
        "Growth Portfolio",
        "Focused investments in high-growth potential startups · Risk Level: Medium-High · Time Frame: 2-4 years",
        "25-40% IRR",
    )
    .card_with(
        "High-Impact Portfolio",
        "Direct investments in breakthrough technologies · Risk Level: High · Time Frame: 1-3 years",
        "40-100% IRR",
    )
    .link("How it works", PageId::HowItWorks)
    .link("Register as investor", PageId::Register)
}
