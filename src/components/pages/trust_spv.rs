//! TrustSPV page: trust funds and live SPV deals

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new(
        "TrustSPV",
        "Invest through diversified Trust funds and targeted SPV opportunities",
    )
    .heading("Diversified Trust Funds")
    .card_with(
        "Diversified Startup Trust Alpha",
        "Balanced portfolio across multiple high-growth sectors · 156 investors · \
         avg return 18.5% · min $1,000 · FinTech, HealthTech, AI/ML, CleanTech",
        "Medium risk",
    )
    .card_with(
        "Tech Innovation Trust Beta",
        "Focus on breakthrough technology startups · 89 investors · \
         avg return 24.2% · min $2,500 · AI/ML, Blockchain, IoT, Quantum Computing",
        "High risk",
    )
    .heading("Why Choose Trust Funds?")
    .card("Risk Diversification", "Spread risk across 15-20 startups in different sectors")
    .card("Professional Management", "Expert fund managers with proven track records")
    .card("Lower Entry Barrier", "Start investing with as little as $1,000")
    .heading("Active SPV Deals")
    .card_with(
        "EcoTech Solutions",
        "AI-powered battery optimization for renewable energy · lead Goldman Ventures · \
         $1.4M / $2.0M raised (70% funded) · 24 investors · $15M pre-money · min $25,000 · 18 days remaining",
        "CleanTech · Series A",
    )
    .card_with(
        "HealthAI Diagnostics",
        "Machine learning for early disease detection · lead Andreessen Horowitz · \
         $2.8M / $3.5M raised (80% funded) · 31 investors · $25M pre-money · min $50,000 · 32 days remaining",
        "HealthTech · Series A",
    )
    .heading("Investment Terms")
    .bullet("Security Type: Preferred Shares")
    .bullet("Liquidation: 1x Non-participating")
    .bullet("Pro-rata Rights: Yes")
    .bullet("Information Rights: Quarterly reports")
    .heading("SPV Advantages")
    .card("Direct Exposure", "Invest directly in specific startups you believe in")
    .card("Higher Returns", "Potential for outsized returns from breakout companies")
    .card("Investor Rights", "Access to information rights and pro-rata participation")
    .link("Start investing", PageId::Signup)
    .link("Talk to our team", PageId::Contact)
}
