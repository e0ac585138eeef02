//! Page identifiers
//!
//! The closed set of views the app can show. String identifiers only enter
//! through `PageId::parse`, which is the single place an unknown id is
//! resolved (to `Home`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Startups,
    StartupProfile,
    Investors,
    TrustSpv,
    AiInsights,
    Education,
    HowItWorks,
    About,
    Contact,
    Terms,
    Privacy,
    KycPolicy,
    Login,
    Signup,
    Dashboard,
    Register,
}

impl PageId {
    /// Every page, in page-picker order
    pub const ALL: [PageId; 17] = [
        PageId::Home,
        PageId::Startups,
        PageId::StartupProfile,
        PageId::Investors,
        PageId::TrustSpv,
        PageId::AiInsights,
        PageId::Education,
        PageId::HowItWorks,
        PageId::About,
        PageId::Contact,
        PageId::Terms,
        PageId::Privacy,
        PageId::KycPolicy,
        PageId::Login,
        PageId::Signup,
        PageId::Dashboard,
        PageId::Register,
    ];

    /// Resolve a string identifier, falling back to `Home`
    pub fn parse(id: &str) -> PageId {
        match id {
            "home" => PageId::Home,
            "startups" => PageId::Startups,
            "startup-profile" => PageId::StartupProfile,
            "investors" => PageId::Investors,
            "trustspv" => PageId::TrustSpv,
            "ai-insights" => PageId::AiInsights,
            "education" => PageId::Education,
            "how-it-works" => PageId::HowItWorks,
            "about" => PageId::About,
            "contact" => PageId::Contact,
            "terms" => PageId::Terms,
            "privacy" => PageId::Privacy,
            "kyc-policy" => PageId::KycPolicy,
            "login" => PageId::Login,
            "signup" => PageId::Signup,
            "dashboard" => PageId::Dashboard,
            "register" => PageId::Register,
            _ => PageId::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Startups => "startups",
            PageId::StartupProfile => "startup-profile",
            PageId::Investors => "investors",
            PageId::TrustSpv => "trustspv",
            PageId::AiInsights => "ai-insights",
            PageId::Education => "education",
            PageId::HowItWorks => "how-it-works",
            PageId::About => "about",
            PageId::Contact => "contact",
            PageId::Terms => "terms",
            PageId::Privacy => "privacy",
            PageId::KycPolicy => "kyc-policy",
            PageId::Login => "login",
            PageId::Signup => "signup",
            PageId::Dashboard => "dashboard",
            PageId::Register => "register",
        }
    }

    /// Human-readable name used in the navbar and page picker
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Startups => "Startups",
            PageId::StartupProfile => "Startup Profile",
            PageId::Investors => "Investors",
            PageId::TrustSpv => "TrustSPV",
            PageId::AiInsights => "AI Insights",
            PageId::Education => "Education",
            PageId::HowItWorks => "How It Works",
            PageId::About => "About Us",
            PageId::Contact => "Contact",
            PageId::Terms => "Terms of Service",
            PageId::Privacy => "Privacy Policy",
            PageId::KycPolicy => "KYC Policy",
            PageId::Login => "Login",
            PageId::Signup => "Sign Up",
            PageId::Dashboard => "Dashboard",
            PageId::Register => "Register",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
