//! About page

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new("About Investyc", "Democratizing startup investing since 2022")
        .heading("Our Vision")
        .text(
            "To create a world where exceptional startups have seamless access to capital, \
             and smart investors can easily discover and invest in the next generation of \
             innovative companies.",
        )
        .heading("Our Mission")
        .text(
            "We democratize startup investing by providing structured, secure, and accessible \
             investment vehicles that protect investors while enabling startups to scale rapidly.",
        )
        .heading("Our Values")
        .card(
            "Trust",
            "We build trust through transparency, security, and regulatory compliance in every interaction.",
        )
        .card(
            "Growth",
            "We enable sustainable growth for startups and consistent returns for investors through smart capital allocation.",
        )
        .card(
            "Innovation",
            "We continuously innovate our platform and processes to create better outcomes for our community.",
        )
        .heading("Milestones")
        .card_with(
            "Company Founded",
            "Investyc was founded with a vision to democratize startup investing",
            "2022",
        )
        .card_with(
            "Platform Launch",
            "Launched our investment platform with the first Trust compartment",
            "2023",
        )
        .card_with(
            "First $10M Raised",
            "Facilitated our first $10M in startup funding across 25 companies",
            "2023",
        )
        .card_with(
            "Series A Success",
            "Completed our own Series A to expand platform capabilities",
            "2024",
        )
        .card_with(
            "Global Expansion",
            "Expanded operations to serve international investors and startups",
            "2024",
        )
        .heading("By the Numbers")
        .stat("Startups Funded", "500+", None)
        .stat("Total Funds Raised", "$50M+", None)
        .stat("Active Investors", "2,000+", None)
        .stat("Success Rate", "85%", None)
        .heading("Founders")
        .card_with(
            "Alexander Rodriguez",
            "Former VP at Goldman Sachs, Harvard MBA. With 15+ years in investment banking and \
             venture capital, Alex brings deep expertise in structured finance and startup ecosystems.",
            "CEO & Co-founder",
        )
        .card_with(
            "Dr. Sarah Kim",
            "Former Lead Engineer at Tesla, MIT PhD. Sarah combines technical excellence with \
             product vision, having led engineering teams at scale in the automotive and fintech industries.",
            "CTO & Co-founder",
        )
        .card_with(
            "Marcus Chen",
            "Former Partner at Andreessen Horowitz. Marcus brings 20+ years of venture capital \
             experience, having led investments in 50+ successful startups including 3 unicorns.",
            "Chief Investment Officer",
        )
        .link("Join our mission", PageId::Register)
        .link("For startups", PageId::Startups)
        .link("For investors", PageId::Investors)
}
