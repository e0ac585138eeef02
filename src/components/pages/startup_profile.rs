//! Sample startup profile

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new("EcoTech Solutions", "CleanTech · San Francisco, CA · Founded 2023")
        .text(
            "Revolutionizing renewable energy storage with AI-powered battery optimization systems \
             that increase efficiency by 40% while reducing costs.",
        )
        .text("www.ecotech-solutions.com")
        .heading("Funding Progress")
        .stat("Raised", "$1.4M", Some("of $2M target"))
        .stat("Progress", "70%", None)
        .stat("Equity Offered", "15%", None)
        .heading("Key Metrics")
        .stat("Revenue", "$500K ARR", None)
        .stat("Growth Rate", "25% MoM", None)
        .stat("Customers", "50+ Enterprise", None)
        .stat("Patents", "3 Filed", None)
        .heading("Meet the Team")
        .card_with("Alex Chen", "Former Tesla Engineer, MIT PhD", "CEO & Co-founder")
        .card_with("Sarah Johnson", "Ex-Google AI, Stanford MS", "CTO & Co-founder")
        .card_with("Michael Brown", "Former Goldman Sachs, Wharton MBA", "CFO")
        .heading("Investment Options")
        .card_with(
            "Small Ticket Investment",
            "Perfect for new investors looking to diversify their portfolio. From $1,000. \
             Professional management, diversified risk, low minimum entry.",
            "Trust",
        )
        .card_with(
            "Mid-Tier Investment",
            "Structured vehicle for sophisticated investors. From $25,000. \
             Direct equity exposure, investor protection, professional oversight.",
            "SPV",
        )
        .card_with(
            "Direct Equity",
            "Direct investment for accredited investors. From $100,000. \
             Direct equity ownership, board representation potential, maximum returns.",
            "Direct",
        )
        .link("Invest in EcoTech", PageId::Register)
        .link("Browse startups", PageId::Startups)
}
