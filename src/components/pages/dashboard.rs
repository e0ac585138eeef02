//! Role-specific dashboard
//!
//! The copy is derived from the session on every draw, so a new login
//! shows the new role without remounting the page.

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::content::{draw_page, handle_page_key, PageContent};
use crate::model::{PageId, Role};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub fn content_for(role: Option<Role>) -> PageContent {
    match role {
        Some(Role::Investor) => investor(),
        Some(Role::Startup) => startup(),
        Some(Role::Student) => student(),
        None => signed_out(),
    }
}

fn investor() -> PageContent {
    PageContent::new("Investor Dashboard", "Portfolio Overview · Verified Investor")
        .stat("Total Invested", "$485K", Some("+8.5% returns"))
        .stat("Startups", "12", Some("Active investments"))
        .stat("Portfolio Value", "$526K", Some("+$41K gain"))
        .stat("IRR", "22.4%", Some("Annualized"))
        .heading("By Compartment")
        .card_with("Trust Compartment", "Diversified small investments", "$185K")
        .card_with("SPV Investments", "Targeted startup investments", "$225K")
        .card_with("Direct Equity", "Large direct investments", "$75K")
        .heading("By Sector")
        .bullet("FinTech      $145K  30%")
        .bullet("HealthTech   $120K  25%")
        .bullet("AI/ML         $95K  20%")
        .bullet("CleanTech     $85K  17%")
        .bullet("EdTech        $40K   8%")
        .heading("Top Performers")
        .card_with("EcoTech Solutions", "+45% · $72K", "SPV")
        .card_with("HealthAI Inc", "+32% · $39K", "Trust")
        .card_with("FinanceFlow", "+28% · $64K", "Direct")
        .card_with("EduLearn Pro", "+15% · $23K", "Trust")
        .link("Ask the AI assistant", PageId::AiInsights)
        .link("Keep learning", PageId::Education)
}

fn startup() -> PageContent {
    PageContent::new("Startup Dashboard", "EcoTech Solutions · Series A · Active")
        .stat("Funds Raised", "$1.4M", Some("+12% this month"))
        .stat("Investors", "24", Some("+3 new"))
        .stat("Funding Goal", "70%", Some("$2M target"))
        .stat("Valuation", "$15M", Some("Pre-money"))
        .heading("Total Progress")
        .text("$1.4M / $2M · 70% Complete · $600K remaining")
        .heading("Compartments")
        .card_with("Trust Compartment", "Small ticket investors · 18 investors", "$420K")
        .card_with("SPV Compartment", "Mid-tier investments · 5 investors", "$680K")
        .card_with("Direct Equity", "Large investments · 1 investor", "$300K")
        .heading("Recent Activity")
        .card_with("New investment", "$25K via Trust compartment", "2 hours ago")
        .card_with("Investor meeting", "Scheduled with Goldman Ventures", "1 day ago")
        .card_with("Due diligence", "Financial documents uploaded", "2 days ago")
        .card_with("Milestone reached", "70% funding target achieved", "3 days ago")
        .link("Ask the AI assistant", PageId::AiInsights)
        .link("Keep learning", PageId::Education)
}

fn student() -> PageContent {
    PageContent::new("Student Dashboard", "Learning Hub · Active Learner")
        .stat("Courses Completed", "4", Some("2 in progress"))
        .stat("Learning Hours", "42", Some("+8 this week"))
        .stat("Certificates", "3", Some("Verified"))
        .heading("Continue Learning")
        .card_with("Fundraising Mastery", "Complete guide to raising capital from seed to Series A", "In progress")
        .card_with("Due Diligence Deep Dive", "Master the art of evaluating startup investments", "In progress")
        .link("Ask the AI assistant", PageId::AiInsights)
        .link("Browse courses", PageId::Education)
}

fn signed_out() -> PageContent {
    PageContent::new("Dashboard", "Sign in to see your dashboard")
        .text("Your dashboard shows your portfolio, raise or learning progress once you are signed in.")
        .link("Login", PageId::Login)
        .link("Sign up", PageId::Signup)
}

#[derive(Default)]
pub struct DashboardPage {
    scroll: usize,
}

impl Component for DashboardPage {
    fn handle_key_event(&mut self, key: KeyEvent, ctx: &ViewContext) -> Result<Option<Action>> {
        let content = content_for(ctx.session.role());
        Ok(handle_page_key(&key, &content, &mut self.scroll))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) -> Result<()> {
        let content = content_for(ctx.session.role());
        let body = content.body_lines();
        draw_page(frame, area, &content, body, &mut self.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_role_has_its_own_stats() {
        let investor = content_for(Some(Role::Investor)).stat_labels();
        let startup = content_for(Some(Role::Startup)).stat_labels();
        let student = content_for(Some(Role::Student)).stat_labels();

        assert_eq!(investor, vec!["Total Invested", "Startups", "Portfolio Value", "IRR"]);
        assert_eq!(startup, vec!["Funds Raised", "Investors", "Funding Goal", "Valuation"]);
        assert_eq!(student, vec!["Courses Completed", "Learning Hours", "Certificates"]);

        for label in &investor {
            assert!(!startup.contains(label) && !student.contains(label));
        }
        for label in &startup {
            assert!(!student.contains(label));
        }
    }

    #[test]
    fn test_signed_out_prompts_login() {
        let content = content_for(None);
        assert!(content.stat_labels().is_empty());
        assert_eq!(
            content.link_for_key('1').map(|l| l.action.clone()),
            Some(Action::Navigate(PageId::Login))
        );
    }
}
