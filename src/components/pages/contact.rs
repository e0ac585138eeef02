//! Contact page: ways to reach the team, a message form and the FAQ

use crate::components::content::PageContent;
use crate::components::form::{Field, Form};
use crate::components::form_page::{FormPage, OnSubmit};
use crate::model::PageId;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We'll get back to you within 24 hours.";

const INQUIRIES: &[&str] = &[
    "Investor Questions",
    "Startup Funding",
    "Partnership",
    "Media Inquiry",
    "Technical Support",
    "Other",
];

pub fn page() -> FormPage {
    let content = PageContent::new("Contact Us", "Get in touch with our team")
        .card_with("Email Us", "Send us an email anytime", "hello@investyc.com")
        .card_with("Call Us", "Mon-Fri from 8am to 6pm", "+1 (555) 123-4567")
        .card_with(
            "Visit Us",
            "Come say hello at our office",
            "123 Innovation Drive, San Francisco, CA 94105",
        )
        .heading("Office Hours")
        .bullet("Monday - Friday: 8:00 AM - 6:00 PM PST")
        .bullet("Saturday: 9:00 AM - 3:00 PM PST")
        .bullet("Sunday: Closed")
        .heading("Send a Message")
        .link("Create account", PageId::Signup)
        .link("View investment options", PageId::TrustSpv)
        .link("Explore startups", PageId::Startups)
        .link("About us", PageId::About);

    let form = Form::new(vec![
        Field::text("First Name"),
        Field::text("Last Name"),
        Field::email("Email Address"),
        Field::text("Phone Number").optional(),
        Field::choice("Inquiry Type", INQUIRIES),
        Field::message("Message"),
    ]);

    let faq = PageContent::new("", "")
        .heading("Frequently Asked Questions")
        .card(
            "How do I get started as an investor?",
            "Simply create an investor account, complete the verification process, and you can start \
             exploring investment opportunities through our Trust funds or SPV deals.",
        )
        .card(
            "What is the minimum investment amount?",
            "Trust funds start from $1,000, SPV investments typically start from $25,000, and direct \
             equity investments begin at $100,000.",
        )
        .card(
            "How are startups vetted?",
            "We conduct comprehensive due diligence including financial review, market analysis, team \
             background checks, and business model validation.",
        )
        .card(
            "What fees do you charge?",
            "Our fee structure varies by investment type. Trust funds charge a 2% management fee plus \
             20% carry. SPV fees are typically 2-3% setup cost plus carry.",
        );

    FormPage::single(content, form, OnSubmit::Acknowledge(ACKNOWLEDGEMENT)).with_footer(faq)
}
