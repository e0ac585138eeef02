//! Sign-up page: one tab per account type

use crate::components::content::PageContent;
use crate::components::form::{Field, Form, TabbedForm};
use crate::components::form_page::{FormPage, OnSubmit};
use crate::components::pages::register::ACKNOWLEDGEMENT;
use crate::model::PageId;

const INDUSTRIES: &[&str] = &["FinTech", "HealthTech", "EdTech", "AI/ML", "SaaS"];
const STAGES: &[&str] = &["Idea Stage", "MVP", "Early Revenue", "Growth"];
const INVESTOR_TYPES: &[&str] = &["Individual", "Angel Investor", "Venture Capital", "Institutional"];
const RANGES: &[&str] = &["$1K - $10K", "$10K - $50K", "$50K - $250K", "$250K+"];

fn student() -> Form {
    Form::new(vec![
        Field::text("First Name"),
        Field::text("Last Name"),
        Field::email("Email Address"),
        Field::text("University").optional(),
        Field::text("Major").optional(),
        Field::password("Password"),
    ])
}

fn startup() -> Form {
    Form::new(vec![
        Field::text("Company Name"),
        Field::text("Website").optional(),
        Field::text("Founder Name"),
        Field::email("Email"),
        Field::choice("Industry", INDUSTRIES),
        Field::choice("Company Stage", STAGES),
        Field::message("Description"),
        Field::password("Password"),
    ])
}

fn investor() -> Form {
    Form::new(vec![
        Field::text("Full Name"),
        Field::email("Email"),
        Field::choice("Investor Type", INVESTOR_TYPES),
        Field::choice("Investment Range", RANGES),
        Field::message("Experience").optional(),
        Field::password("Password"),
    ])
}

pub fn page() -> FormPage {
    let content = PageContent::new("Join Investyc", "Create your account and start your journey")
        .text("Pick an account type with ←/→, then press Enter to fill in the form.")
        .link("Already have an account? Login", PageId::Login);

    let forms = TabbedForm::new(vec![
        ("Student", student()),
        ("Startup", startup()),
        ("Investor", investor()),
    ]);

    FormPage::new(content, forms, OnSubmit::Acknowledge(ACKNOWLEDGEMENT))
}
