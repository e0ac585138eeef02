//! Register page: startup, investor and general inquiry applications

use crate::components::content::PageContent;
use crate::components::form::{Field, Form, TabbedForm};
use crate::components::form_page::{FormPage, OnSubmit};

pub const ACKNOWLEDGEMENT: &str = "Registration submitted! We'll be in touch soon.";

const SECTORS: &[&str] = &[
    "FinTech", "HealthTech", "EdTech", "CleanTech", "AI/ML", "SaaS", "E-commerce", "Other",
];
const STAGES: &[&str] = &["Idea Stage", "MVP", "Early Revenue", "Growth Stage", "Scale Stage"];
const FUNDING: &[&str] = &["Under $500K", "$500K - $1M", "$1M - $5M", "$5M - $10M", "Over $10M"];
const TIMELINES: &[&str] = &["Immediately", "1-3 months", "3-6 months", "6-12 months", "Just exploring"];
const INVESTOR_TYPES: &[&str] = &[
    "Individual Investor",
    "Angel Investor",
    "Venture Capital",
    "Family Office",
    "Institutional",
];
const RANGES: &[&str] = &["$1K - $10K", "$10K - $50K", "$50K - $250K", "$250K - $1M", "Over $1M"];
const PREFERRED: &[&str] = &[
    "All Sectors", "FinTech", "HealthTech", "EdTech", "CleanTech", "AI/ML", "SaaS",
];
const INQUIRIES: &[&str] = &["Partnership", "Media Inquiry", "Support", "Careers", "Other"];

fn startup() -> Form {
    Form::new(vec![
        Field::text("Company Name"),
        Field::text("Website").optional(),
        Field::text("Founder Name"),
        Field::email("Email"),
        Field::text("Phone Number").optional(),
        Field::text("Location").optional(),
        Field::choice("Industry Sector", SECTORS),
        Field::choice("Company Stage", STAGES),
        Field::choice("Funding Needed", FUNDING),
        Field::choice("Funding Timeline", TIMELINES),
        Field::message("Company Description"),
    ])
}

fn investor() -> Form {
    Form::new(vec![
        Field::text("Full Name"),
        Field::email("Email"),
        Field::text("Phone Number").optional(),
        Field::text("Location").optional(),
        Field::choice("Investor Type", INVESTOR_TYPES),
        Field::choice("Investment Range", RANGES),
        Field::choice("Preferred Sectors", PREFERRED),
        Field::message("Experience").optional(),
    ])
}

fn general() -> Form {
    Form::new(vec![
        Field::text("Full Name"),
        Field::email("Email"),
        Field::text("Phone Number").optional(),
        Field::choice("Inquiry Type", INQUIRIES),
        Field::message("Message"),
    ])
}

pub fn page() -> FormPage {
    let content = PageContent::new("Register with Investyc", "Tell us about yourself and we'll reach out")
        .text("Pick a registration type with ←/→, then press Enter to fill in the form.");

    let forms = TabbedForm::new(vec![
        ("Startup", startup()),
        ("Investor", investor()),
        ("General Inquiry", general()),
    ]);

    let footer = PageContent::new("", "")
        .heading("Need Help?")
        .bullet("hello@investyc.com")
        .bullet("+1 (555) 123-4567")
        .bullet("San Francisco, CA");

    FormPage::new(content, forms, OnSubmit::Acknowledge(ACKNOWLEDGEMENT)).with_footer(footer)
}
