//! One module per page
//!
//! `build` is the only place a `PageId` turns into a component. The match is
//! exhaustive, so a new page id does not compile until it has a view.

pub mod about;
pub mod ai_insights;
pub mod contact;
pub mod dashboard;
pub mod education;
pub mod how_it_works;
pub mod investors;
pub mod landing;
pub mod legal;
pub mod login;
pub mod register;
pub mod signup;
pub mod startup_profile;
pub mod startups;
pub mod trust_spv;

use crate::component::Component;
use crate::components::StaticPage;
use crate::config::Config;
use crate::model::PageId;

pub fn build(page: PageId, config: &Config) -> Box<dyn Component> {
    match page {
        PageId::Home => Box::new(StaticPage::new(landing::content())),
        PageId::Startups => Box::new(StaticPage::new(startups::content())),
        PageId::StartupProfile => Box::new(StaticPage::new(startup_profile::content())),
        PageId::Investors => Box::new(StaticPage::new(investors::content())),
        PageId::TrustSpv => Box::new(StaticPage::new(trust_spv::content())),
        PageId::AiInsights => Box::new(ai_insights::AiInsightsPage::new(config.chat_reply_delay())),
        PageId::Education => Box::new(StaticPage::new(education::content())),
        PageId::HowItWorks => Box::new(StaticPage::new(how_it_works::content())),
        PageId::About => Box::new(StaticPage::new(about::content())),
        PageId::Contact => Box::new(contact::page()),
        PageId::Terms => Box::new(StaticPage::new(legal::terms())),
        PageId::Privacy => Box::new(StaticPage::new(legal::privacy())),
        PageId::KycPolicy => Box::new(StaticPage::new(legal::kyc_policy())),
        PageId::Login => Box::new(login::page()),
        PageId::Signup => Box::new(signup::page()),
        PageId::Dashboard => Box::new(dashboard::DashboardPage::default()),
        PageId::Register => Box::new(register::page()),
    }
}
