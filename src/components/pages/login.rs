//! Login page
//!
//! Credentials are never checked; the picked account type becomes the
//! session role.

use crate::components::content::PageContent;
use crate::components::form::{Field, Form};
use crate::components::form_page::{FormPage, OnSubmit};
use crate::model::PageId;

pub const ACCOUNT_TYPES: &[&str] = &["Investor", "Startup", "Student"];

pub fn page() -> FormPage {
    let content = PageContent::new("Welcome Back", "Sign in to your Investyc account")
        .bullet("Startup: Raise funds for your company")
        .bullet("Investor: Discover investment opportunities")
        .bullet("Student: Learn about startups and investing")
        .link("Sign up", PageId::Signup)
        .link_id("Forgot password?", "forgot-password");

    let form = Form::new(vec![
        Field::email("Email"),
        Field::password("Password"),
        Field::choice("Account type", ACCOUNT_TYPES),
    ]);

    FormPage::single(content, form, OnSubmit::LoginWithChoice("Account type"))
}
