//! Terms, privacy and KYC policy pages

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn terms() -> PageContent {
    PageContent::new(
        "Terms of Service",
        "Please read these terms carefully before using our platform",
    )
    .text("Last updated: December 20, 2024")
    .card(
        "1. Acceptance of Terms",
        "By accessing and using Investyc platform, you accept and agree to be bound by the terms and provision of this agreement.",
    )
    .card(
        "2. Platform Services",
        "Investyc provides an investment platform connecting startups with investors through TrustSPV compartments and educational resources.",
    )
    .card(
        "3. User Registration",
        "Users must provide accurate information during registration and maintain the confidentiality of their account credentials.",
    )
    .card(
        "4. Investment Risks",
        "All investments carry risk. Past performance does not guarantee future results. Users should consult financial advisors before making investment decisions.",
    )
    .card(
        "5. KYC/AML Compliance",
        "All users must complete Know Your Customer (KYC) and Anti-Money Laundering (AML) verification as required by applicable regulations.",
    )
    .card(
        "6. Privacy and Data Protection",
        "We are committed to protecting user privacy and handle personal data in accordance with our Privacy Policy and applicable data protection laws.",
    )
    .card(
        "7. Intellectual Property",
        "All content, trademarks, and intellectual property on the platform are owned by Investyc or licensed from third parties.",
    )
    .card(
        "8. Limitation of Liability",
        "Investyc shall not be liable for any direct, indirect, incidental, or consequential damages arising from platform use.",
    )
    .heading("Questions About These Terms?")
    .text("Our legal team is happy to help.")
    .link("Contact us", PageId::Contact)
}

pub fn privacy() -> PageContent {
    PageContent::new(
        "Privacy Policy",
        "Your privacy is important to us. Learn how we collect, use, and protect your data.",
    )
    .text("Last updated: December 20, 2024")
    .card(
        "Information We Collect",
        "We collect information you provide directly, such as account details, investment preferences, and KYC documentation required for compliance.",
    )
    .card(
        "How We Use Your Information",
        "Your information is used to provide platform services, process investments, ensure compliance, and improve user experience.",
    )
    .card(
        "Data Security",
        "We implement industry-standard security measures to protect your data, including encryption, secure storage, and access controls.",
    )
    .card(
        "Information Sharing",
        "We do not sell personal information. Data may be shared with service providers, regulatory bodies, or as required by law.",
    )
    .heading("Contact Our Privacy Team")
    .bullet("Data Protection Officer")
    .bullet("Email: privacy@investyc.com")
    .bullet("Phone: +1 (555) 123-4567")
    .bullet("Address: 123 Finance Street, NY 10001")
    .link("Contact us", PageId::Contact)
}

pub fn kyc_policy() -> PageContent {
    PageContent::new(
        "KYC / AML Policy",
        "Know Your Customer (KYC) and Anti-Money Laundering (AML) compliance",
    )
    .text("Last updated: December 20, 2024")
    .heading("KYC Verification Process")
    .text("Complete verification in 3 simple steps")
    .card_with(
        "Personal Details",
        "Provide basic personal information including name, address, and contact details",
        "1",
    )
    .card_with(
        "Document Upload",
        "Upload required documentation for identity and address verification",
        "2",
    )
    .card_with(
        "Verification Process",
        "Our compliance team reviews your documents and verifies your identity",
        "3",
    )
    .heading("Compliance")
    .card(
        "Regulatory Compliance",
        "Full compliance with local and international AML/CTF regulations",
    )
    .card(
        "Document Security",
        "All documents are encrypted and stored in secure, compliant systems",
    )
    .card(
        "Identity Verification",
        "Multi-layer identity verification using advanced AI and manual review",
    )
    .link("Get verified", PageId::Register)
    .link("Contact compliance", PageId::Contact)
}
